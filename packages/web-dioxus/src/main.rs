//! DigiGrub Portal - Dioxus Fullstack Web Application
//!
//! Frontend for the DigiGrub content platform: an indexing dashboard plus
//! generation and library screens for AI-produced titles, social media
//! posts, and blog articles. All data comes from the portal backend REST
//! API through server functions.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod routes;
mod state;

fn main() {
    // Load .env before anything reads API_URL
    #[cfg(feature = "server")]
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
