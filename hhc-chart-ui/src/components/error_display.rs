//! Start-up failure panel.

use crate::state::PageError;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub error: PageError,
    /// Data file the page was built from, shown so a bad export is easy to spot
    #[props(default = String::new())]
    pub source: String,
}

/// Names the start-up stage that failed, then the error chain.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let headline = props.error.headline();

    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{headline}" }
            if !props.source.is_empty() {
                span {
                    style: "margin-left: 6px; color: #8E2424; font-family: monospace;",
                    "({props.source})"
                }
            }
            pre {
                style: "margin: 6px 0 0 0; white-space: pre-wrap; font-size: 12px;",
                "{props.error.detail}"
            }
        }
    }
}
