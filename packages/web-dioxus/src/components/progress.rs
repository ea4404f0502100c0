//! Progress bar for indexing completion

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ProgressBarProps {
    /// 0.0 to 100.0
    pub percent: f64,
    pub complete: bool,
}

/// Horizontal progress bar. Turns green once complete.
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let percent = props.percent.clamp(0.0, 100.0);
    let fill = if props.complete {
        "bg-green-500"
    } else {
        "bg-blue-500"
    };

    rsx! {
        div {
            class: "w-full bg-gray-200 rounded-full h-2.5",
            div {
                class: "h-2.5 rounded-full {fill}",
                style: "width: {percent}%",
            }
        }
    }
}
