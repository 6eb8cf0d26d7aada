//! Page header with title and a short description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Page title
    pub title: String,
    /// One-line description shown under the title
    #[props(default = String::new())]
    pub description: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.description}"
                }
            }
        }
    }
}
