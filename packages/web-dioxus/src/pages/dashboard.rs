//! Indexing dashboard page

use dioxus::prelude::*;

use portal_client::{CrawlerStatus, DashboardStats, IndexingStats, IndexingStatsResponse};

use crate::api::{fetch_crawler_statuses, fetch_dashboard_stats, fetch_indexing_stats};
use crate::components::{LoadingSpinner, ProgressBar};
use crate::state::use_query_cache;

/// Dashboard with indexing progress and crawler health
#[component]
pub fn Dashboard() -> Element {
    let cache = use_query_cache();

    use_effect({
        let cache = cache.clone();
        move || {
            cache.fetch("indexing-stats", &(), fetch_indexing_stats());
            cache.fetch("dashboard-stats", &(), fetch_dashboard_stats());
            cache.fetch("crawler-statuses", &(), fetch_crawler_statuses());
        }
    });

    let indexing = cache.query::<IndexingStatsResponse>("indexing-stats", &());
    let dashboard = cache.query::<DashboardStats>("dashboard-stats", &());
    let crawlers = cache.query::<Vec<CrawlerStatus>>("crawler-statuses", &());

    let totals = dashboard.data.clone().unwrap_or_default();

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Dashboard" }

            // Stats Grid
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8",

                StatCard {
                    title: "Total Jobs",
                    value: totals.total_jobs.to_string(),
                    icon: "\u{1F4BC}",
                    color: "blue"
                }
                StatCard {
                    title: "Total News",
                    value: totals.total_news.to_string(),
                    icon: "\u{1F4F0}",
                    color: "green"
                }
                StatCard {
                    title: "Indexed Today",
                    value: totals.indexed_today.to_string(),
                    icon: "\u{1F4CA}",
                    color: "amber"
                }
                StatCard {
                    title: "Success Rate",
                    value: format!("{:.1}%", totals.indexing_success_rate),
                    icon: "\u{2705}",
                    color: "orange"
                }
            }

            // Indexing progress per table
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Indexing Status" }

            match (indexing.data.as_ref(), indexing.error.as_ref()) {
                (Some(response), _) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden mb-6",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Table" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Total Records" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Indexed" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Remaining" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Progress" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-gray-200",
                                for (name, stats) in response.stats.iter() {
                                    IndexingRow {
                                        key: "{name}",
                                        name: name.clone(),
                                        stats: stats.clone(),
                                    }
                                }
                            }
                        }
                    }

                    // Overall progress
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-8",
                        div {
                            class: "flex items-center justify-between mb-2",
                            h3 { class: "text-sm font-semibold text-gray-900", "Overall Progress" }
                            span {
                                class: "text-sm text-gray-500",
                                "{response.total_indexed} / {response.total_records} records indexed"
                            }
                        }
                        ProgressBar {
                            percent: response.overall_percentage,
                            complete: response.is_complete(),
                        }
                    }
                },
                (None, Some(error)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-8",
                        "Error loading indexing stats: {error}"
                    }
                },
                (None, None) => rsx! {
                    div { class: "text-center py-12", LoadingSpinner {} }
                },
            }

            // Crawler panel
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Crawlers" }

            match (crawlers.data.as_ref(), crawlers.error.as_ref()) {
                (Some(list), _) if !list.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Crawler" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Last Run" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Next Run" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Records" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Success" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-gray-200",
                                for crawler in list.iter() {
                                    CrawlerRow {
                                        key: "{crawler.name}",
                                        crawler: crawler.clone(),
                                    }
                                }
                            }
                        }
                    }
                },
                (Some(_), _) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No crawlers configured." }
                    }
                },
                (None, Some(error)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading crawlers: {error}"
                    }
                },
                (None, None) => rsx! {
                    div { class: "text-center py-8", "Loading..." }
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: String,
    icon: &'static str,
    color: &'static str,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    let bg_class = match props.color {
        "blue" => "bg-blue-50",
        "amber" => "bg-amber-50",
        "green" => "bg-green-50",
        "orange" => "bg-orange-50",
        _ => "bg-gray-50",
    };

    let text_class = match props.color {
        "blue" => "text-blue-700",
        "amber" => "text-amber-700",
        "green" => "text-green-700",
        "orange" => "text-orange-700",
        _ => "text-gray-700",
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-500", "{props.title}" }
                    p { class: "text-3xl font-bold text-gray-900 mt-1", "{props.value}" }
                }
                div {
                    class: "w-12 h-12 rounded-full {bg_class} {text_class} flex items-center justify-center text-2xl",
                    "{props.icon}"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct IndexingRowProps {
    name: String,
    stats: IndexingStats,
}

#[component]
fn IndexingRow(props: IndexingRowProps) -> Element {
    let stats = &props.stats;
    let display_name = props.name.to_uppercase();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4 text-sm font-medium text-gray-900",
                "{display_name}"
            }
            td { class: "px-6 py-4 text-sm text-gray-500", "{stats.total_records}" }
            td { class: "px-6 py-4 text-sm text-gray-500", "{stats.indexed_records}" }
            td { class: "px-6 py-4 text-sm text-gray-500", "{stats.unindexed_records}" }
            td {
                class: "px-6 py-4 w-64",
                div {
                    class: "flex items-center gap-2",
                    div {
                        class: "flex-1",
                        ProgressBar {
                            percent: stats.index_percentage,
                            complete: stats.is_complete(),
                        }
                    }
                    span {
                        class: "text-xs text-gray-500 w-12 text-right",
                        {format!("{:.1}%", stats.index_percentage)}
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CrawlerRowProps {
    crawler: CrawlerStatus,
}

#[component]
fn CrawlerRow(props: CrawlerRowProps) -> Element {
    let crawler = &props.crawler;

    let status_class = match crawler.status.as_str() {
        "running" => "bg-green-100 text-green-700",
        "scheduled" => "bg-blue-100 text-blue-700",
        "error" => "bg-red-100 text-red-700",
        _ => "bg-gray-100 text-gray-700",
    };

    let last_run = crawler
        .last_run
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "Never".to_string());
    let next_run = crawler
        .next_run
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "Not scheduled".to_string());

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td { class: "px-6 py-4 text-sm font-medium text-gray-900", "{crawler.name}" }
            td {
                class: "px-6 py-4",
                span {
                    class: "px-2 py-1 rounded text-xs font-medium {status_class}",
                    "{crawler.status}"
                }
            }
            td { class: "px-6 py-4 text-sm text-gray-500", "{last_run}" }
            td { class: "px-6 py-4 text-sm text-gray-500", "{next_run}" }
            td { class: "px-6 py-4 text-sm text-gray-500", "{crawler.records_crawled}" }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                {format!("{:.1}%", crawler.success_rate)}
            }
        }
    }
}
