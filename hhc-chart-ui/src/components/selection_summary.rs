//! Status line for the time brush with a clear button.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SelectionSummaryProps {
    /// DOM id of the area chart whose brush the button clears
    pub area_mount: String,
}

/// Shows which surveys the bar charts currently count.
#[component]
pub fn SelectionSummary(props: SelectionSummaryProps) -> Element {
    let state = use_context::<AppState>();
    let selection = (state.selection)();
    let count = (state.working_set_len)();

    let text = match selection {
        Some(range) if range.is_empty() => format!("No survey days selected ({} records)", count),
        Some(range) => format!("{} ({} records)", range, count),
        None => format!("All surveys ({} records)", count),
    };

    let mount = props.area_mount.clone();
    // Clearing goes through D3 so the brush overlay and the Rust state stay in step.
    let on_clear = move |_: Event<MouseData>| {
        if let Err(e) = js_bridge::clear_brush(&mount) {
            log::error!("clearing brush failed: {:#}", e);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; font-size: 13px;",
            span { "{text}" }
            if selection.is_some() {
                button {
                    onclick: on_clear,
                    "Clear selection"
                }
            }
        }
    }
}
