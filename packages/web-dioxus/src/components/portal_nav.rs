//! Portal navigation component

use dioxus::prelude::*;

use crate::routes::Route;

/// Top navigation bar
#[component]
pub fn PortalNav() -> Element {
    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center justify-between max-w-7xl mx-auto",

                // Logo / Brand
                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::Dashboard {},
                        class: "text-xl font-bold text-blue-700",
                        "DigiGrub Portal"
                    }

                    // Nav links
                    div {
                        class: "hidden md:flex items-center gap-1",
                        NavLink { to: Route::Dashboard {}, label: "Dashboard" }
                        NavLink { to: Route::ContentGenerator {}, label: "Content Generator" }
                        NavLink { to: Route::ContentLibrary {}, label: "Content Library" }
                    }
                }

                span {
                    class: "text-sm text-gray-500",
                    "Content Management"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-blue-100 text-blue-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
