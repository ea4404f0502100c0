//! Toast viewport and cards

use dioxus::prelude::*;

use crate::state::{use_toasts, Toast, ToastKind};

/// Fixed-position stack of active notifications
#[component]
pub fn ToastViewport() -> Element {
    let state = use_toasts();
    let items = state.toasts.read().clone();

    if items.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div {
            class: "fixed top-4 right-4 z-50 flex flex-col gap-2 w-80",
            for toast in items {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ToastCardProps {
    toast: Toast,
}

#[component]
fn ToastCard(props: ToastCardProps) -> Element {
    let state = use_toasts();
    let toast = props.toast;

    let classes = match toast.kind {
        ToastKind::Success => "bg-green-50 border-green-200 text-green-800",
        ToastKind::Error => "bg-red-50 border-red-200 text-red-800",
        ToastKind::Info => "bg-blue-50 border-blue-200 text-blue-800",
        ToastKind::Warning => "bg-amber-50 border-amber-200 text-amber-800",
    };
    let id = toast.id;

    rsx! {
        div {
            class: "flex items-start justify-between gap-3 border rounded-lg shadow-sm px-4 py-3 text-sm {classes}",
            span { "{toast.message}" }
            button {
                class: "font-bold opacity-60 hover:opacity-100",
                onclick: move |_| state.dismiss(id),
                "\u{00D7}"
            }
        }
    }
}
