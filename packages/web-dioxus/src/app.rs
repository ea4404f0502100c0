//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{QueryCacheProvider, ToastProvider};

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Query cache and toast contexts wrap the entire app
        QueryCacheProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
