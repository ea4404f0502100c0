//! Portal layout wrapper with navigation and the toast viewport

use dioxus::prelude::*;

use super::{PortalNav, ToastViewport};
use crate::routes::Route;

/// Layout component wrapping every page
#[component]
pub fn PortalLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            // Navigation
            PortalNav {}

            // Main content
            main {
                class: "p-6 max-w-7xl mx-auto",
                Outlet::<Route> {}
            }

            // Notifications (floating)
            ToastViewport {}
        }
    }
}
