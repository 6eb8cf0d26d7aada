//! Shared Dioxus components and D3.js bridge for household survey chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart scripts via `js_sys::eval()`,
//!   plus the brush callbacks from JS back into Rust
//! - `renderer`: `D3Renderer`, the browser implementation of `ChartRenderer`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (containers, headers, selection summary)

pub mod components;
pub mod js_bridge;
pub mod renderer;
pub mod state;
