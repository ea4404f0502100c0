//! Reusable UI components

mod clipboard;
mod filter_panel;
mod loading;
mod portal_layout;
mod portal_nav;
mod preview_modal;
mod progress;
mod toast;

pub use clipboard::*;
pub use filter_panel::*;
pub use loading::*;
pub use portal_layout::*;
pub use portal_nav::*;
pub use preview_modal::*;
pub use progress::*;
pub use toast::*;
