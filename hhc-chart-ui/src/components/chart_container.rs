//! Mount point for D3.js charts.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 appends the chart SVGs to
    pub id: String,
    /// Optional heading above the charts
    #[props(default = String::new())]
    pub heading: String,
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A titled container div that D3.js renders into.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("min-height: {}px; position: relative;", props.min_height);

    rsx! {
        div {
            style: "{style}",
            if !props.heading.is_empty() {
                h4 {
                    style: "margin: 0 0 8px 0; font-size: 14px; color: #333;",
                    "{props.heading}"
                }
            }
            div {
                id: "{props.id}",
            }
        }
    }
}
