//! Content generator page: titles, social posts, and blog articles

use dioxus::prelude::*;
use futures::future::join_all;

use portal_client::{
    BlogPost, FilterOptions, GenerateBlogResponse, GenerateSocialResponse, SocialPost, Title,
};

use crate::api::{
    fetch_filter_options, generate_blog, generate_social, generate_titles, list_blogs,
    list_social, list_titles, save_title,
};
use crate::components::{CopyButton, FilterPanel, LoadingDots};
use crate::state::{
    use_query_cache, use_toasts, BlogLength, BlogTone, DraftFlow, GeneratorFilters,
    QueryCacheHandle, QueryView, SaveReport, SocialTone, TitleFlow, WorkflowError,
    TITLE_COUNT_OPTIONS,
};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum GeneratorTab {
    #[default]
    Titles,
    Social,
    Blog,
}

impl GeneratorTab {
    fn label(&self) -> &'static str {
        match self {
            GeneratorTab::Titles => "Generate Titles",
            GeneratorTab::Social => "Social Media",
            GeneratorTab::Blog => "Blog Posts",
        }
    }

    fn variants() -> &'static [GeneratorTab] {
        &[GeneratorTab::Titles, GeneratorTab::Social, GeneratorTab::Blog]
    }
}

/// Three-tab generation workspace sharing one set of source filters
#[component]
pub fn ContentGenerator() -> Element {
    let cache = use_query_cache();
    let toasts = use_toasts();

    let mut active_tab = use_signal(GeneratorTab::default);
    let mut filters = use_signal(GeneratorFilters::default);

    // Titles tab
    let mut title_count = use_signal(|| 5u8);
    let mut title_flow = use_signal(TitleFlow::default);

    // Social tab
    let mut social_title = use_signal(String::new);
    let mut social_tone = use_signal(SocialTone::default);
    let mut social_flow = use_signal(DraftFlow::<GenerateSocialResponse>::default);

    // Blog tab
    let mut blog_title = use_signal(String::new);
    let mut blog_tone = use_signal(BlogTone::default);
    let mut blog_length = use_signal(BlogLength::default);
    let mut blog_flow = use_signal(DraftFlow::<GenerateBlogResponse>::default);

    // Filter options load once
    use_effect({
        let cache = cache.clone();
        move || {
            cache.fetch("content-filters", &(), fetch_filter_options());
        }
    });

    // Saved list for the active tab, keyed by the current filters
    use_effect({
        let cache = cache.clone();
        move || {
            let current = filters();
            match active_tab() {
                GeneratorTab::Titles => {
                    let request = current.saved_titles_request();
                    cache.fetch("list-titles", &request, list_titles(request.clone()));
                }
                GeneratorTab::Social => {
                    let request = current.saved_content_request();
                    cache.fetch("list-social", &request, list_social(request.clone()));
                }
                GeneratorTab::Blog => {
                    let request = current.saved_content_request();
                    cache.fetch("list-blogs", &request, list_blogs(request.clone()));
                }
            }
        }
    });

    let options = cache
        .query::<FilterOptions>("content-filters", &())
        .data
        .unwrap_or_default();

    let handle_generate_titles = {
        let cache = cache.clone();
        move |_| {
            let mut flow = title_flow.peek().clone();
            if flow.start().is_err() {
                return;
            }
            title_flow.set(flow);

            let request = filters.peek().generate_titles_request(title_count.peek().clone());
            let cache = cache.clone();
            spawn(async move {
                match generate_titles(request).await {
                    Ok(response) => {
                        let mut flow = title_flow.peek().clone();
                        flow.complete(response.titles);
                        let count = flow.titles.len();
                        title_flow.set(flow.clone());
                        toasts.success(format!("{count} titles generated!"));

                        // Persist the batch, one save per title
                        let requests = flow.save_requests(&filters.peek());
                        let outcomes = join_all(requests.into_iter().map(save_title)).await;
                        let report = SaveReport::from_outcomes(&outcomes);
                        if report.all_saved() {
                            toasts.success(format!("All {} titles saved", report.total()));
                        } else {
                            toasts.error(report.summary());
                        }

                        let list_request = filters.peek().saved_titles_request();
                        cache.refetch(
                            "list-titles",
                            &list_request,
                            list_titles(list_request.clone()),
                        );
                    }
                    Err(_) => {
                        let mut flow = title_flow.peek().clone();
                        flow.fail();
                        title_flow.set(flow);
                        toasts.error("Failed to generate titles");
                    }
                }
            });
        }
    };

    let save_single_title = {
        let cache = cache.clone();
        move |title: String| {
            let request = filters.peek().save_title_request(&title);
            let cache = cache.clone();
            spawn(async move {
                match save_title(request).await {
                    Ok(_) => {
                        toasts.success("Title saved!");
                        let list_request = filters.peek().saved_titles_request();
                        cache.refetch(
                            "list-titles",
                            &list_request,
                            list_titles(list_request.clone()),
                        );
                    }
                    Err(_) => toasts.error("Failed to save title"),
                }
            });
        }
    };

    let handle_generate_social = {
        let cache = cache.clone();
        move |_| {
            let title = social_title.peek().clone();
            let mut flow = social_flow.peek().clone();
            match flow.start(&title) {
                Ok(()) => social_flow.set(flow),
                Err(WorkflowError::MissingTitle) => {
                    toasts.warning("Please enter a title");
                    return;
                }
                Err(WorkflowError::Busy) => return,
            }

            let request = filters
                .peek()
                .generate_social_request(&title, social_tone.peek().clone());
            let cache = cache.clone();
            spawn(async move {
                match generate_social(request).await {
                    Ok(response) => {
                        let mut flow = social_flow.peek().clone();
                        flow.complete(response);
                        social_flow.set(flow);
                        toasts.success("Content generated successfully!");

                        // Already persisted server-side; refresh the list
                        let list_request = filters.peek().saved_content_request();
                        cache.refetch(
                            "list-social",
                            &list_request,
                            list_social(list_request.clone()),
                        );
                    }
                    Err(_) => {
                        let mut flow = social_flow.peek().clone();
                        flow.fail();
                        social_flow.set(flow);
                        toasts.error("Failed to generate content");
                    }
                }
            });
        }
    };

    let handle_generate_blog = {
        let cache = cache.clone();
        move |_| {
            let title = blog_title.peek().clone();
            let mut flow = blog_flow.peek().clone();
            match flow.start(&title) {
                Ok(()) => blog_flow.set(flow),
                Err(WorkflowError::MissingTitle) => {
                    toasts.warning("Please enter a title");
                    return;
                }
                Err(WorkflowError::Busy) => return,
            }

            let request = filters.peek().generate_blog_request(
                &title,
                blog_tone.peek().clone(),
                blog_length.peek().clone(),
            );
            let cache = cache.clone();
            spawn(async move {
                match generate_blog(request).await {
                    Ok(response) => {
                        let mut flow = blog_flow.peek().clone();
                        flow.complete(response);
                        blog_flow.set(flow);
                        toasts.success("Blog generated successfully!");

                        let list_request = filters.peek().saved_content_request();
                        cache.refetch(
                            "list-blogs",
                            &list_request,
                            list_blogs(list_request.clone()),
                        );
                    }
                    Err(_) => {
                        let mut flow = blog_flow.peek().clone();
                        flow.fail();
                        blog_flow.set(flow);
                        toasts.error("Failed to generate blog");
                    }
                }
            });
        }
    };

    let use_for_social = move |title: String| {
        social_title.set(title);
        active_tab.set(GeneratorTab::Social);
        toasts.info("Title loaded into the Social Media tab");
    };

    let use_for_blog = move |title: String| {
        blog_title.set(title);
        active_tab.set(GeneratorTab::Blog);
        toasts.info("Title loaded into the Blog Posts tab");
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Content Generator" }

            // Tabs
            div {
                class: "flex gap-1 border-b border-gray-200 mb-6",
                for tab in GeneratorTab::variants() {
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

            // Shared filters
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Content Filters" }
                FilterPanel {
                    filters: filters(),
                    options: options.clone(),
                    on_change: move |next| filters.set(next),
                }
            }

            match active_tab() {
                GeneratorTab::Titles => rsx! {
                    TitlesTab {
                        flow: title_flow(),
                        count: title_count(),
                        saved: saved_titles_view(&cache, &filters()),
                        on_count_change: move |count| title_count.set(count),
                        on_generate: handle_generate_titles,
                        on_save: save_single_title,
                        on_use_social: use_for_social,
                        on_use_blog: use_for_blog,
                    }
                },
                GeneratorTab::Social => rsx! {
                    SocialTab {
                        flow: social_flow(),
                        tone: social_tone(),
                        title: social_title(),
                        saved: saved_social_view(&cache, &filters()),
                        on_title_change: move |value| social_title.set(value),
                        on_tone_change: move |tone| social_tone.set(tone),
                        on_generate: handle_generate_social,
                    }
                },
                GeneratorTab::Blog => rsx! {
                    BlogTab {
                        flow: blog_flow(),
                        tone: blog_tone(),
                        length: blog_length(),
                        title: blog_title(),
                        saved: saved_blogs_view(&cache, &filters()),
                        on_title_change: move |value| blog_title.set(value),
                        on_tone_change: move |tone| blog_tone.set(tone),
                        on_length_change: move |length| blog_length.set(length),
                        on_generate: handle_generate_blog,
                    }
                },
            }
        }
    }
}

fn saved_titles_view(cache: &QueryCacheHandle, filters: &GeneratorFilters) -> QueryView<Vec<Title>> {
    cache.query("list-titles", &filters.saved_titles_request())
}

fn saved_social_view(
    cache: &QueryCacheHandle,
    filters: &GeneratorFilters,
) -> QueryView<Vec<SocialPost>> {
    cache.query("list-social", &filters.saved_content_request())
}

fn saved_blogs_view(
    cache: &QueryCacheHandle,
    filters: &GeneratorFilters,
) -> QueryView<Vec<BlogPost>> {
    cache.query("list-blogs", &filters.saved_content_request())
}

#[derive(Props, Clone, PartialEq)]
struct TitlesTabProps {
    flow: TitleFlow,
    count: u8,
    saved: QueryView<Vec<Title>>,
    on_count_change: EventHandler<u8>,
    on_generate: EventHandler<()>,
    on_save: EventHandler<String>,
    on_use_social: EventHandler<String>,
    on_use_blog: EventHandler<String>,
}

#[component]
fn TitlesTab(props: TitlesTabProps) -> Element {
    let on_count_change = props.on_count_change;
    let on_generate = props.on_generate;
    let on_save = props.on_save;
    let on_use_social = props.on_use_social;
    let on_use_blog = props.on_use_blog;
    let flow = props.flow;
    let saved = props.saved;
    let generating = flow.is_generating();

    rsx! {
        div {
            class: "grid grid-cols-1 lg:grid-cols-2 gap-6",

            // Generation card
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Generate Titles" }

                div {
                    class: "flex items-end gap-4 mb-6",
                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Number of Titles"
                        }
                        select {
                            class: "border border-gray-300 rounded-md px-3 py-2 text-sm",
                            value: "{props.count}",
                            onchange: move |e: Event<FormData>| {
                                if let Ok(count) = e.value().parse::<u8>() {
                                    on_count_change.call(count);
                                }
                            },
                            for count in TITLE_COUNT_OPTIONS {
                                option { value: "{count}", "{count} titles" }
                            }
                        }
                    }
                    button {
                        class: "px-4 py-2 bg-blue-600 text-white text-sm font-medium rounded-lg hover:bg-blue-700 disabled:opacity-50",
                        disabled: generating,
                        onclick: move |_| on_generate.call(()),
                        if generating { "Generating..." } else { "Generate Titles" }
                    }
                }

                if flow.titles.is_empty() {
                    p { class: "text-sm text-gray-500", "Generated titles will appear here." }
                } else {
                    ul {
                        class: "space-y-2",
                        for (index, title) in flow.titles.iter().enumerate() {
                            li {
                                key: "{index}",
                                class: "flex items-center justify-between gap-3 p-3 bg-gray-50 rounded-lg",
                                span { class: "text-sm text-gray-900 flex-1", "{title}" }
                                div {
                                    class: "flex gap-2 shrink-0",
                                    CopyButton { text: title.clone() }
                                    button {
                                        class: "text-xs px-2 py-1 rounded bg-blue-100 text-blue-700 hover:bg-blue-200",
                                        onclick: {
                                            let title = title.clone();
                                            move |_| on_save.call(title.clone())
                                        },
                                        "Save"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Saved titles card
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                div {
                    class: "flex items-center justify-between mb-4",
                    h2 { class: "text-lg font-semibold text-gray-900", "Recently Saved" }
                    if saved.is_loading { LoadingDots {} }
                }

                if let Some(error) = saved.error.as_ref() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-3 rounded text-sm mb-3",
                        "Error: {error}"
                    }
                }

                match saved.data.as_ref() {
                    Some(titles) if !titles.is_empty() => rsx! {
                        ul {
                            class: "divide-y divide-gray-100",
                            for title in titles.iter() {
                                SavedTitleRow {
                                    key: "{title.id}",
                                    title: title.clone(),
                                    on_use_social: on_use_social,
                                    on_use_blog: on_use_blog,
                                }
                            }
                        }
                    },
                    Some(_) => rsx! {
                        p { class: "text-sm text-gray-500", "No saved titles for these filters yet." }
                    },
                    None => rsx! {
                        p { class: "text-sm text-gray-400", "Loading saved titles..." }
                    },
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SavedTitleRowProps {
    title: Title,
    on_use_social: EventHandler<String>,
    on_use_blog: EventHandler<String>,
}

#[component]
fn SavedTitleRow(props: SavedTitleRowProps) -> Element {
    let on_use_social = props.on_use_social;
    let on_use_blog = props.on_use_blog;
    let title = props.title;
    let text = title.title.clone();

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
        li {
            class: "py-3 flex items-start justify-between gap-3",
            div {
                class: "min-w-0",
                p { class: "text-sm text-gray-900", "{title.title}" }
                p { class: "text-xs text-gray-500 mt-0.5", "{title.filter_summary()}" }
            }
            div {
                class: "flex items-center gap-2 shrink-0",
                span {
                    class: "px-2 py-0.5 rounded text-xs font-medium {usage_class}",
                    "{usage_label}"
                }
                CopyButton { text: text.clone() }
                button {
                    class: "text-xs px-2 py-1 rounded bg-purple-100 text-purple-700 hover:bg-purple-200",
                    title: "Use for a social media post",
                    onclick: {
                        let text = text.clone();
                        move |_| on_use_social.call(text.clone())
                    },
                    "Social"
                }
                button {
                    class: "text-xs px-2 py-1 rounded bg-indigo-100 text-indigo-700 hover:bg-indigo-200",
                    title: "Use for a blog article",
                    onclick: {
                        let text = text.clone();
                        move |_| on_use_blog.call(text.clone())
                    },
                    "Blog"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SocialTabProps {
    flow: DraftFlow<GenerateSocialResponse>,
    tone: SocialTone,
    title: String,
    saved: QueryView<Vec<SocialPost>>,
    on_title_change: EventHandler<String>,
    on_tone_change: EventHandler<SocialTone>,
    on_generate: EventHandler<()>,
}

#[component]
fn SocialTab(props: SocialTabProps) -> Element {
    let on_title_change = props.on_title_change;
    let on_tone_change = props.on_tone_change;
    let on_generate = props.on_generate;
    let flow = props.flow;
    let saved = props.saved;
    let generating = flow.is_generating();

    rsx! {
        div {
            class: "grid grid-cols-1 lg:grid-cols-2 gap-6",

            // Generation card
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Generate Social Media Content" }

                div {
                    class: "space-y-4",
                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Title"
                        }
                        input {
                            r#type: "text",
                            class: "w-full border border-gray-300 rounded-md px-3 py-2 text-sm",
                            placeholder: "Enter a title to post about",
                            value: "{props.title}",
                            oninput: move |e| on_title_change.call(e.value()),
                        }
                    }
                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Tone"
                        }
                        select {
                            class: "w-full border border-gray-300 rounded-md px-3 py-2 text-sm",
                            value: "{props.tone.value()}",
                            onchange: move |e: Event<FormData>| {
                                if let Some(tone) = SocialTone::from_value(&e.value()) {
                                    on_tone_change.call(tone);
                                }
                            },
                            for tone in SocialTone::variants() {
                                option { value: "{tone.value()}", "{tone.label()}" }
                            }
                        }
                    }
                    button {
                        class: "px-4 py-2 bg-blue-600 text-white text-sm font-medium rounded-lg hover:bg-blue-700 disabled:opacity-50",
                        disabled: generating,
                        onclick: move |_| on_generate.call(()),
                        if generating { "Generating..." } else { "Generate Content" }
                    }
                }

                if let Some(draft) = flow.draft.as_ref() {
                    div {
                        class: "mt-6 p-4 bg-gray-50 rounded-lg",
                        div {
                            class: "flex items-center justify-between mb-2",
                            h3 { class: "text-sm font-semibold text-gray-900", "Generated Content" }
                            CopyButton { text: draft.content.clone() }
                        }
                        p { class: "text-sm text-gray-700 whitespace-pre-wrap", "{draft.content}" }
                    }
                }
            }

            // Saved posts card
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                div {
                    class: "flex items-center justify-between mb-4",
                    h2 { class: "text-lg font-semibold text-gray-900", "Recent Social Posts" }
                    if saved.is_loading { LoadingDots {} }
                }

                if let Some(error) = saved.error.as_ref() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-3 rounded text-sm mb-3",
                        "Error: {error}"
                    }
                }

                match saved.data.as_ref() {
                    Some(posts) if !posts.is_empty() => rsx! {
                        ul {
                            class: "divide-y divide-gray-100",
                            for post in posts.iter() {
                                SavedSocialItem { key: "{post.id}", post: post.clone() }
                            }
                        }
                    },
                    Some(_) => rsx! {
                        p { class: "text-sm text-gray-500", "No social posts for these filters yet." }
                    },
                    None => rsx! {
                        p { class: "text-sm text-gray-400", "Loading social posts..." }
                    },
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SavedSocialItemProps {
    post: SocialPost,
}

#[component]
fn SavedSocialItem(props: SavedSocialItemProps) -> Element {
    let post = props.post;
    let content = post.content.clone();

    rsx! {
        li {
            class: "py-3 flex items-start justify-between gap-3",
            div {
                class: "min-w-0",
                if let Some(title) = post.title.as_ref() {
                    p { class: "text-sm font-medium text-gray-900 truncate", "{title}" }
                }
                p { class: "text-sm text-gray-600 line-clamp-2", "{post.content}" }
                if let Some(tone) = post.tone.as_ref() {
                    p { class: "text-xs text-gray-400 mt-0.5", "Tone: {tone}" }
                }
            }
            div {
                class: "flex items-center gap-2 shrink-0",
                if post.is_published {
                    span { class: "px-2 py-0.5 rounded text-xs font-medium bg-green-100 text-green-700", "Published" }
                } else {
                    span { class: "px-2 py-0.5 rounded text-xs font-medium bg-gray-100 text-gray-600", "Draft" }
                }
                CopyButton { text: content }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BlogTabProps {
    flow: DraftFlow<GenerateBlogResponse>,
    tone: BlogTone,
    length: BlogLength,
    title: String,
    saved: QueryView<Vec<BlogPost>>,
    on_title_change: EventHandler<String>,
    on_tone_change: EventHandler<BlogTone>,
    on_length_change: EventHandler<BlogLength>,
    on_generate: EventHandler<()>,
}

#[component]
fn BlogTab(props: BlogTabProps) -> Element {
    let on_title_change = props.on_title_change;
    let on_tone_change = props.on_tone_change;
    let on_length_change = props.on_length_change;
    let on_generate = props.on_generate;
    let flow = props.flow;
    let saved = props.saved;
    let generating = flow.is_generating();

    rsx! {
        div {
            class: "grid grid-cols-1 lg:grid-cols-2 gap-6",

            // Generation card
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Generate Blog Article" }

                div {
                    class: "space-y-4",
                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Title"
                        }
                        input {
                            r#type: "text",
                            class: "w-full border border-gray-300 rounded-md px-3 py-2 text-sm",
                            placeholder: "Enter a title to write about",
                            value: "{props.title}",
                            oninput: move |e| on_title_change.call(e.value()),
                        }
                    }
                    div {
                        class: "grid grid-cols-2 gap-4",
                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-1",
                                "Tone"
                            }
                            select {
                                class: "w-full border border-gray-300 rounded-md px-3 py-2 text-sm",
                                value: "{props.tone.value()}",
                                onchange: move |e: Event<FormData>| {
                                    if let Some(tone) = BlogTone::from_value(&e.value()) {
                                        on_tone_change.call(tone);
                                    }
                                },
                                for tone in BlogTone::variants() {
                                    option { value: "{tone.value()}", "{tone.label()}" }
                                }
                            }
                        }
                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-1",
                                "Length"
                            }
                            select {
                                class: "w-full border border-gray-300 rounded-md px-3 py-2 text-sm",
                                value: "{props.length.value()}",
                                onchange: move |e: Event<FormData>| {
                                    if let Some(length) = BlogLength::from_value(&e.value()) {
                                        on_length_change.call(length);
                                    }
                                },
                                for length in BlogLength::variants() {
                                    option { value: "{length.value()}", "{length.label()}" }
                                }
                            }
                        }
                    }
                    button {
                        class: "px-4 py-2 bg-blue-600 text-white text-sm font-medium rounded-lg hover:bg-blue-700 disabled:opacity-50",
                        disabled: generating,
                        onclick: move |_| on_generate.call(()),
                        if generating { "Generating..." } else { "Generate Blog" }
                    }
                }

                if let Some(draft) = flow.draft.as_ref() {
                    div {
                        class: "mt-6 p-4 bg-gray-50 rounded-lg",
                        div {
                            class: "flex items-center justify-between mb-2",
                            h3 { class: "text-sm font-semibold text-gray-900", "Generated Article" }
                            div {
                                class: "flex items-center gap-2",
                                span { class: "text-xs text-gray-500", "{draft.word_count} words" }
                                CopyButton { text: draft.content.clone() }
                            }
                        }
                        if let Some(summary) = draft.summary.as_ref() {
                            p { class: "text-sm italic text-gray-600 mb-2", "{summary}" }
                        }
                        p { class: "text-sm text-gray-700 whitespace-pre-wrap", "{draft.content}" }
                    }
                }
            }

            // Saved blogs card
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                div {
                    class: "flex items-center justify-between mb-4",
                    h2 { class: "text-lg font-semibold text-gray-900", "Recent Blog Articles" }
                    if saved.is_loading { LoadingDots {} }
                }

                if let Some(error) = saved.error.as_ref() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-3 rounded text-sm mb-3",
                        "Error: {error}"
                    }
                }

                match saved.data.as_ref() {
                    Some(blogs) if !blogs.is_empty() => rsx! {
                        ul {
                            class: "divide-y divide-gray-100",
                            for blog in blogs.iter() {
                                SavedBlogItem { key: "{blog.id}", blog: blog.clone() }
                            }
                        }
                    },
                    Some(_) => rsx! {
                        p { class: "text-sm text-gray-500", "No blog articles for these filters yet." }
                    },
                    None => rsx! {
                        p { class: "text-sm text-gray-400", "Loading blog articles..." }
                    },
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SavedBlogItemProps {
    blog: BlogPost,
}

#[component]
fn SavedBlogItem(props: SavedBlogItemProps) -> Element {
    let blog = props.blog;
    let content = blog.content.clone();

    rsx! {
        li {
            class: "py-3 flex items-start justify-between gap-3",
            div {
                class: "min-w-0",
                p { class: "text-sm font-medium text-gray-900 truncate", "{blog.title}" }
                if let Some(summary) = blog.summary.as_ref() {
                    p { class: "text-sm text-gray-600 line-clamp-2", "{summary}" }
                }
                if let Some(words) = blog.word_count {
                    p { class: "text-xs text-gray-400 mt-0.5", "{words} words" }
                }
            }
            div {
                class: "flex items-center gap-2 shrink-0",
                if blog.is_published {
                    span { class: "px-2 py-0.5 rounded text-xs font-medium bg-green-100 text-green-700", "Published" }
                } else {
                    span { class: "px-2 py-0.5 rounded text-xs font-medium bg-gray-100 text-gray-600", "Draft" }
                }
                CopyButton { text: content }
            }
        }
    }
}
