//! Preview modal for library content

use dioxus::prelude::*;

use portal_client::{BlogPost, SocialPost, Title};

use super::CopyButton;

/// What the preview modal is showing.
#[derive(Clone, Debug, PartialEq)]
pub enum PreviewContent {
    Title(Title),
    Social(SocialPost),
    Blog(BlogPost),
}

impl PreviewContent {
    fn heading(&self) -> &str {
        match self {
            PreviewContent::Title(_) => "Saved Title",
            PreviewContent::Social(_) => "Social Media Post",
            PreviewContent::Blog(blog) => &blog.title,
        }
    }

    /// Text placed on the clipboard by the copy button.
    fn copy_text(&self) -> String {
        match self {
            PreviewContent::Title(title) => title.title.clone(),
            PreviewContent::Social(post) => post.content.clone(),
            PreviewContent::Blog(blog) => blog.content.clone(),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PreviewModalProps {
    pub content: Option<PreviewContent>,
    pub on_close: EventHandler<()>,
}

/// Modal overlay showing the full content of a library record.
/// Clicking the backdrop closes it.
#[component]
pub fn PreviewModal(props: PreviewModalProps) -> Element {
    let Some(content) = props.content else {
        return VNode::empty();
    };
    let on_close = props.on_close;
    let copy_text = content.copy_text();

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-40 z-40 flex items-center justify-center p-4",
            onclick: move |_| on_close.call(()),

            div {
                class: "bg-white rounded-lg shadow-xl max-w-2xl w-full overflow-y-auto p-6",
                style: "max-height: 80vh",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "flex items-start justify-between gap-4 mb-4",
                    h2 {
                        class: "text-lg font-semibold text-gray-900",
                        "{content.heading()}"
                    }
                    div {
                        class: "flex items-center gap-2",
                        CopyButton { text: copy_text }
                        button {
                            class: "text-gray-400 hover:text-gray-600 text-xl leading-none",
                            onclick: move |_| on_close.call(()),
                            "\u{00D7}"
                        }
                    }
                }

                match &content {
                    PreviewContent::Title(title) => rsx! {
                        p {
                            class: "text-base text-gray-900 mb-4",
                            "{title.title}"
                        }
                        dl {
                            class: "text-sm text-gray-600 space-y-1",
                            div { "Source: {title.source_type.label()}" }
                            div { "Filter: {title.filter_summary()}" }
                            if title.is_used {
                                div { "Used {title.used_count} times" }
                            } else {
                                div { "Not used yet" }
                            }
                        }
                    },
                    PreviewContent::Social(post) => rsx! {
                        if let Some(title) = post.title.as_ref() {
                            p {
                                class: "text-sm font-medium text-gray-900 mb-2",
                                "{title}"
                            }
                        }
                        p {
                            class: "text-sm text-gray-700 whitespace-pre-wrap mb-4",
                            "{post.content}"
                        }
                        dl {
                            class: "text-sm text-gray-600 space-y-1",
                            div { "Source: {post.source_type.label()}" }
                            if let Some(tone) = post.tone.as_ref() {
                                div { "Tone: {tone}" }
                            }
                            div {
                                if post.is_published { "Status: Published" } else { "Status: Draft" }
                            }
                        }
                    },
                    PreviewContent::Blog(blog) => rsx! {
                        if let Some(summary) = blog.summary.as_ref() {
                            p {
                                class: "text-sm italic text-gray-600 mb-3",
                                "{summary}"
                            }
                        }
                        p {
                            class: "text-sm text-gray-700 whitespace-pre-wrap mb-4",
                            "{blog.content}"
                        }
                        if let Some(tags) = blog.tags.as_ref() {
                            div {
                                class: "flex flex-wrap gap-1 mb-3",
                                for tag in tags.iter() {
                                    span {
                                        class: "text-xs px-2 py-0.5 rounded-full bg-gray-100 text-gray-600",
                                        "{tag}"
                                    }
                                }
                            }
                        }
                        dl {
                            class: "text-sm text-gray-600 space-y-1",
                            div { "Source: {blog.source_type.label()}" }
                            if let Some(words) = blog.word_count {
                                div { "{words} words" }
                            }
                            if let Some(description) = blog.meta_description.as_ref() {
                                div { "Meta: {description}" }
                            }
                        }
                    },
                }
            }
        }
    }
}
