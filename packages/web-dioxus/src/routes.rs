//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::PortalLayout;
use crate::pages::{ContentGenerator, ContentLibrary, Dashboard};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PortalLayout)]
        #[route("/")]
        Dashboard {},

        #[route("/content")]
        ContentGenerator {},

        #[route("/library")]
        ContentLibrary {},
}
