//! Shared source and filter selectors for the content generator

use dioxus::prelude::*;

use portal_client::{FilterOptions, SourceType};

use crate::state::GeneratorFilters;

#[derive(Props, Clone, PartialEq)]
pub struct FilterPanelProps {
    pub filters: GeneratorFilters,
    pub options: FilterOptions,
    pub on_change: EventHandler<GeneratorFilters>,
}

/// Source type selector plus the filters of the active arm. Jobs get a
/// sector dropdown; news get category and source dropdowns.
#[component]
pub fn FilterPanel(props: FilterPanelProps) -> Element {
    let on_change = props.on_change;
    let filters = props.filters.clone();
    let sector_value = filters.sector.clone().unwrap_or_default();
    let category_value = filters.category.clone().unwrap_or_default();
    let source_value = filters.source.clone().unwrap_or_default();

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-3 gap-4",

            div {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "Source Type"
                }
                select {
                    class: "w-full border border-gray-300 rounded-md px-3 py-2 text-sm",
                    value: "{filters.source_type}",
                    onchange: {
                        let filters = filters.clone();
                        move |e: Event<FormData>| {
                            if let Some(source_type) = SourceType::from_value(&e.value()) {
                                let mut next = filters.clone();
                                next.set_source_type(source_type);
                                on_change.call(next);
                            }
                        }
                    },
                    for source_type in SourceType::variants() {
                        option { value: "{source_type}", "{source_type.label()}" }
                    }
                }
            }

            if filters.source_type == SourceType::Jobs {
                div {
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-1",
                        "Sector"
                    }
                    select {
                        class: "w-full border border-gray-300 rounded-md px-3 py-2 text-sm",
                        value: "{sector_value}",
                        onchange: {
                            let filters = filters.clone();
                            move |e: Event<FormData>| {
                                let mut next = filters.clone();
                                next.sector = Some(e.value()).filter(|v| !v.is_empty());
                                on_change.call(next);
                            }
                        },
                        option { value: "", "All Sectors" }
                        for sector in props.options.job_sectors.iter() {
                            option { value: "{sector}", "{sector}" }
                        }
                    }
                }
            } else {
                div {
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-1",
                        "Category"
                    }
                    select {
                        class: "w-full border border-gray-300 rounded-md px-3 py-2 text-sm",
                        value: "{category_value}",
                        onchange: {
                            let filters = filters.clone();
                            move |e: Event<FormData>| {
                                let mut next = filters.clone();
                                next.category = Some(e.value()).filter(|v| !v.is_empty());
                                on_change.call(next);
                            }
                        },
                        option { value: "", "All Categories" }
                        for category in props.options.news_categories.iter() {
                            option { value: "{category}", "{category}" }
                        }
                    }
                }
                div {
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-1",
                        "News Source"
                    }
                    select {
                        class: "w-full border border-gray-300 rounded-md px-3 py-2 text-sm",
                        value: "{source_value}",
                        onchange: {
                            let filters = filters.clone();
                            move |e: Event<FormData>| {
                                let mut next = filters.clone();
                                next.source = Some(e.value()).filter(|v| !v.is_empty());
                                on_change.call(next);
                            }
                        },
                        option { value: "", "All Sources" }
                        for source in props.options.news_sources.iter() {
                            option { value: "{source}", "{source}" }
                        }
                    }
                }
            }
        }
    }
}
