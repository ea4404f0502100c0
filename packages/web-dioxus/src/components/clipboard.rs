//! Clipboard helpers

use dioxus::prelude::*;

use crate::state::use_toasts;

/// Copy text to the system clipboard. Outside the browser this is a
/// no-op.
pub fn copy_text(text: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = text;
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CopyButtonProps {
    pub text: String,
}

/// Small copy-to-clipboard button with a confirmation toast
#[component]
pub fn CopyButton(props: CopyButtonProps) -> Element {
    let toasts = use_toasts();
    let text = props.text;

    rsx! {
        button {
            class: "text-xs px-2 py-1 rounded border border-gray-300 text-gray-600 hover:bg-gray-100",
            title: "Copy to clipboard",
            onclick: move |_| {
                copy_text(&text);
                toasts.success("Copied to clipboard!");
            },
            "Copy"
        }
    }
}
