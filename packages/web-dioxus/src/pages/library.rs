//! Saved content library: browse, filter, and preview generated content

use dioxus::prelude::*;

use portal_client::{BlogPost, SocialPost, SourceType, Title};

use crate::api::{list_blogs, list_social, list_titles};
use crate::components::{CopyButton, LoadingSpinner, PreviewContent, PreviewModal};
use crate::state::{use_query_cache, ContentLibraryFilters, QueryView, TitleLibraryFilters};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum LibraryTab {
    #[default]
    Titles,
    Social,
    Blogs,
}

impl LibraryTab {
    fn label(&self) -> &'static str {
        match self {
            LibraryTab::Titles => "Saved Titles",
            LibraryTab::Social => "Social Media",
            LibraryTab::Blogs => "Blog Posts",
        }
    }

    fn variants() -> &'static [LibraryTab] {
        &[LibraryTab::Titles, LibraryTab::Social, LibraryTab::Blogs]
    }
}

/// Browsing workspace for everything the generator has saved
#[component]
pub fn ContentLibrary() -> Element {
    let cache = use_query_cache();

    let mut active_tab = use_signal(LibraryTab::default);
    let mut title_filters = use_signal(TitleLibraryFilters::default);
    let mut social_filters = use_signal(ContentLibraryFilters::default);
    let mut blog_filters = use_signal(ContentLibraryFilters::default);
    let mut preview = use_signal(|| None::<PreviewContent>);

    // Saved list for the active tab, keyed by its filters
    use_effect({
        let cache = cache.clone();
        move || match active_tab() {
            LibraryTab::Titles => {
                let request = title_filters().request();
                cache.fetch("list-titles", &request, list_titles(request.clone()));
            }
            LibraryTab::Social => {
                let request = social_filters().request();
                cache.fetch("list-social", &request, list_social(request.clone()));
            }
            LibraryTab::Blogs => {
                let request = blog_filters().request();
                cache.fetch("list-blogs", &request, list_blogs(request.clone()));
            }
        }
    });

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Content Library" }

            // Tabs
            div {
                class: "flex gap-1 border-b border-gray-200 mb-6",
                for tab in LibraryTab::variants() {
                    button {
                        key: "{tab.label()}",
                        class: if *tab == active_tab() {
                            "px-4 py-2 text-sm font-medium border-b-2 border-blue-600 text-blue-700"
                        } else {
                            "px-4 py-2 text-sm font-medium border-b-2 border-transparent text-gray-500 hover:text-gray-700"
                        },
                        onclick: {
                            let tab = *tab;
                            move |_| active_tab.set(tab)
                        },
                        "{tab.label()}"
                    }
                }
            }

            match active_tab() {
                LibraryTab::Titles => rsx! {
                    TitleSection {
                        filters: title_filters(),
                        view: cache.query("list-titles", &title_filters().request()),
                        on_filters_change: move |next| title_filters.set(next),
                        on_preview: move |content| preview.set(Some(content)),
                    }
                },
                LibraryTab::Social => rsx! {
                    SocialSection {
                        filters: social_filters(),
                        view: cache.query("list-social", &social_filters().request()),
                        on_filters_change: move |next| social_filters.set(next),
                        on_preview: move |content| preview.set(Some(content)),
                    }
                },
                LibraryTab::Blogs => rsx! {
                    BlogSection {
                        filters: blog_filters(),
                        view: cache.query("list-blogs", &blog_filters().request()),
                        on_filters_change: move |next| blog_filters.set(next),
                        on_preview: move |content| preview.set(Some(content)),
                    }
                },
            }

            PreviewModal {
                content: preview(),
                on_close: move |_| preview.set(None),
            }
        }
    }
}

fn source_tag_class(source_type: SourceType) -> &'static str {
    match source_type {
        SourceType::Jobs => "bg-blue-100 text-blue-700",
        SourceType::News => "bg-green-100 text-green-700",
    }
}

#[derive(Props, Clone, PartialEq)]
struct TitleSectionProps {
    filters: TitleLibraryFilters,
    view: QueryView<Vec<Title>>,
    on_filters_change: EventHandler<TitleLibraryFilters>,
    on_preview: EventHandler<PreviewContent>,
}

#[component]
fn TitleSection(props: TitleSectionProps) -> Element {
    let on_filters_change = props.on_filters_change;
    let on_preview = props.on_preview;
    let filters = props.filters;
    let view = props.view;

    let source_value = filters.source_type.map(|s| s.as_str()).unwrap_or_default();
    let usage_value = match filters.usage {
        None => "",
        Some(false) => "unused",
        Some(true) => "used",
    };

    rsx! {
        div {
            // Filter bar
            div {
                class: "flex flex-wrap gap-4 mb-4",
                select {
                    class: "border border-gray-300 rounded-md px-3 py-2 text-sm",
                    value: "{source_value}",
                    onchange: {
                        let filters = filters.clone();
                        move |e: Event<FormData>| {
                            let mut next = filters.clone();
                            next.source_type = SourceType::from_value(&e.value());
                            on_filters_change.call(next);
                        }
                    },
                    option { value: "", "All Sources" }
                    for source in SourceType::variants() {
                        option { value: "{source.as_str()}", "{source.label()}" }
                    }
                }
                select {
                    class: "border border-gray-300 rounded-md px-3 py-2 text-sm",
                    value: "{usage_value}",
                    onchange: {
                        let filters = filters.clone();
                        move |e: Event<FormData>| {
                            let mut next = filters.clone();
                            next.usage = match e.value().as_str() {
                                "unused" => Some(false),
                                "used" => Some(true),
                                _ => None,
                            };
                            on_filters_change.call(next);
                        }
                    },
                    option { value: "", "All Titles" }
                    option { value: "unused", "Unused Only" }
                    option { value: "used", "Used Only" }
                }
            }

            if let Some(error) = view.error.as_ref() {
                div {
                    class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-4",
                    "Error: {error}"
                }
            }

            match view.data.as_ref() {
                Some(titles) if !titles.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Title" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Source" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Filters" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Created" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Actions" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-gray-200",
                                for title in titles.iter() {
                                    TitleRow {
                                        key: "{title.id}",
                                        title: title.clone(),
                                        on_preview: on_preview,
                                    }
                                }
                            }
                        }
                    }
                },
                Some(_) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No saved titles match these filters." }
                    }
                },
                None => rsx! {
                    div { class: "py-12", LoadingSpinner {} }
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TitleRowProps {
    title: Title,
    on_preview: EventHandler<PreviewContent>,
}

#[component]
fn TitleRow(props: TitleRowProps) -> Element {
    let on_preview = props.on_preview;
    let title = props.title;
    let created = title.created_at.format("%Y-%m-%d").to_string();
    let source_class = source_tag_class(title.source_type);

    let usage_class = if title.is_used {
        "bg-amber-100 text-amber-700"
    } else {
        "bg-green-100 text-green-700"
    };
    let usage_label = if title.is_used {
        format!("Used ({})", title.used_count)
    } else {
        "Unused".to_string()
    };

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4",
                p { class: "text-sm font-medium text-gray-900", "{title.title}" }
            }
            td {
                class: "px-6 py-4",
                span {
                    class: "px-2 py-1 rounded text-xs font-medium {source_class}",
                    "{title.source_type.label()}"
                }
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                "{title.filter_summary()}"
            }
            td {
                class: "px-6 py-4",
                span {
                    class: "px-2 py-1 rounded text-xs font-medium {usage_class}",
                    "{usage_label}"
                }
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                "{created}"
            }
            td {
                class: "px-6 py-4",
                div {
                    class: "flex gap-2",
                    CopyButton { text: title.title.clone() }
                    button {
                        class: "text-xs px-2 py-1 rounded bg-gray-100 text-gray-700 hover:bg-gray-200",
                        onclick: {
                            let title = title.clone();
                            move |_| on_preview.call(PreviewContent::Title(title.clone()))
                        },
                        "Preview"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SocialSectionProps {
    filters: ContentLibraryFilters,
    view: QueryView<Vec<SocialPost>>,
    on_filters_change: EventHandler<ContentLibraryFilters>,
    on_preview: EventHandler<PreviewContent>,
}

#[component]
fn SocialSection(props: SocialSectionProps) -> Element {
    let on_filters_change = props.on_filters_change;
    let on_preview = props.on_preview;
    let filters = props.filters;
    let view = props.view;

    rsx! {
        div {
            ContentFilterBar {
                filters: filters.clone(),
                on_change: on_filters_change,
            }

            if let Some(error) = view.error.as_ref() {
                div {
                    class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-4",
                    "Error: {error}"
                }
            }

            match view.data.as_ref() {
                Some(posts) if !posts.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Content" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Source" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Tone" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Created" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Actions" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-gray-200",
                                for post in posts.iter() {
                                    SocialRow {
                                        key: "{post.id}",
                                        post: post.clone(),
                                        on_preview: on_preview,
                                    }
                                }
                            }
                        }
                    }
                },
                Some(_) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No social posts match these filters." }
                    }
                },
                None => rsx! {
                    div { class: "py-12", LoadingSpinner {} }
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SocialRowProps {
    post: SocialPost,
    on_preview: EventHandler<PreviewContent>,
}

#[component]
fn SocialRow(props: SocialRowProps) -> Element {
    let on_preview = props.on_preview;
    let post = props.post;
    let created = post.created_at.format("%Y-%m-%d").to_string();
    let source_class = source_tag_class(post.source_type);
    let tone = post.tone.clone().unwrap_or_else(|| "-".to_string());

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4 max-w-md",
                if let Some(title) = post.title.as_ref() {
                    p { class: "text-sm font-medium text-gray-900 truncate", "{title}" }
                }
                p { class: "text-sm text-gray-500 line-clamp-2", "{post.content}" }
            }
            td {
                class: "px-6 py-4",
                span {
                    class: "px-2 py-1 rounded text-xs font-medium {source_class}",
                    "{post.source_type.label()}"
                }
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500 capitalize",
                "{tone}"
            }
            td {
                class: "px-6 py-4",
                PublishedTag { is_published: post.is_published }
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                "{created}"
            }
            td {
                class: "px-6 py-4",
                div {
                    class: "flex gap-2",
                    CopyButton { text: post.content.clone() }
                    button {
                        class: "text-xs px-2 py-1 rounded bg-gray-100 text-gray-700 hover:bg-gray-200",
                        onclick: {
                            let post = post.clone();
                            move |_| on_preview.call(PreviewContent::Social(post.clone()))
                        },
                        "Preview"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BlogSectionProps {
    filters: ContentLibraryFilters,
    view: QueryView<Vec<BlogPost>>,
    on_filters_change: EventHandler<ContentLibraryFilters>,
    on_preview: EventHandler<PreviewContent>,
}

#[component]
fn BlogSection(props: BlogSectionProps) -> Element {
    let on_filters_change = props.on_filters_change;
    let on_preview = props.on_preview;
    let filters = props.filters;
    let view = props.view;

    rsx! {
        div {
            ContentFilterBar {
                filters: filters.clone(),
                on_change: on_filters_change,
            }

            if let Some(error) = view.error.as_ref() {
                div {
                    class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-4",
                    "Error: {error}"
                }
            }

            match view.data.as_ref() {
                Some(blogs) if !blogs.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Title" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Source" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Details" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Created" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Actions" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-gray-200",
                                for blog in blogs.iter() {
                                    BlogRow {
                                        key: "{blog.id}",
                                        blog: blog.clone(),
                                        on_preview: on_preview,
                                    }
                                }
                            }
                        }
                    }
                },
                Some(_) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No blog articles match these filters." }
                    }
                },
                None => rsx! {
                    div { class: "py-12", LoadingSpinner {} }
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BlogRowProps {
    blog: BlogPost,
    on_preview: EventHandler<PreviewContent>,
}

#[component]
fn BlogRow(props: BlogRowProps) -> Element {
    let on_preview = props.on_preview;
    let blog = props.blog;
    let created = blog.created_at.format("%Y-%m-%d").to_string();
    let source_class = source_tag_class(blog.source_type);
    let words = blog
        .word_count
        .map(|count| format!("{count} words"))
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4 max-w-md",
                p { class: "text-sm font-medium text-gray-900 truncate", "{blog.title}" }
                if let Some(summary) = blog.summary.as_ref() {
                    p { class: "text-sm text-gray-500 line-clamp-2", "{summary}" }
                }
            }
            td {
                class: "px-6 py-4",
                span {
                    class: "px-2 py-1 rounded text-xs font-medium {source_class}",
                    "{blog.source_type.label()}"
                }
            }
            td {
                class: "px-6 py-4",
                p { class: "text-sm text-gray-500", "{words}" }
                if let Some(tone) = blog.tone.as_ref() {
                    p { class: "text-xs text-gray-400 capitalize", "{tone}" }
                }
            }
            td {
                class: "px-6 py-4",
                PublishedTag { is_published: blog.is_published }
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                "{created}"
            }
            td {
                class: "px-6 py-4",
                div {
                    class: "flex gap-2",
                    CopyButton { text: blog.content.clone() }
                    button {
                        class: "text-xs px-2 py-1 rounded bg-gray-100 text-gray-700 hover:bg-gray-200",
                        onclick: {
                            let blog = blog.clone();
                            move |_| on_preview.call(PreviewContent::Blog(blog.clone()))
                        },
                        "Preview"
                    }
                }
            }
        }
    }
}

/// Shared source and publish-state selects for the social and blog tabs
#[derive(Props, Clone, PartialEq)]
struct ContentFilterBarProps {
    filters: ContentLibraryFilters,
    on_change: EventHandler<ContentLibraryFilters>,
}

#[component]
fn ContentFilterBar(props: ContentFilterBarProps) -> Element {
    let on_change = props.on_change;
    let filters = props.filters;

    let source_value = filters.source_type.map(|s| s.as_str()).unwrap_or_default();
    let published_value = match filters.published {
        None => "",
        Some(false) => "draft",
        Some(true) => "published",
    };

    rsx! {
        div {
            class: "flex flex-wrap gap-4 mb-4",
            select {
                class: "border border-gray-300 rounded-md px-3 py-2 text-sm",
                value: "{source_value}",
                onchange: {
                    let filters = filters.clone();
                    move |e: Event<FormData>| {
                        let mut next = filters.clone();
                        next.source_type = SourceType::from_value(&e.value());
                        on_change.call(next);
                    }
                },
                option { value: "", "All Sources" }
                for source in SourceType::variants() {
                    option { value: "{source.as_str()}", "{source.label()}" }
                }
            }
            select {
                class: "border border-gray-300 rounded-md px-3 py-2 text-sm",
                value: "{published_value}",
                onchange: {
                    let filters = filters.clone();
                    move |e: Event<FormData>| {
                        let mut next = filters.clone();
                        next.published = match e.value().as_str() {
                            "draft" => Some(false),
                            "published" => Some(true),
                            _ => None,
                        };
                        on_change.call(next);
                    }
                },
                option { value: "", "All Posts" }
                option { value: "draft", "Drafts Only" }
                option { value: "published", "Published Only" }
            }
        }
    }
}

#[component]
fn PublishedTag(is_published: bool) -> Element {
    let (tag_class, label) = if is_published {
        ("bg-green-100 text-green-700", "Published")
    } else {
        ("bg-gray-100 text-gray-600", "Draft")
    };

    rsx! {
        span {
            class: "px-2 py-1 rounded text-xs font-medium {tag_class}",
            "{label}"
        }
    }
}
