//! Placeholder shown while the survey is parsed.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading...".to_string())]
    pub message: String,
    /// Smaller second line, e.g. the data file being read
    #[props(default = String::new())]
    pub detail: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; padding: 40px; color: #666;",
            "{props.message}"
            if !props.detail.is_empty() {
                span {
                    style: "margin-top: 4px; font-size: 11px; color: #999;",
                    "{props.detail}"
                }
            }
        }
    }
}
