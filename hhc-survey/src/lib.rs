//! Core types for the household characteristics survey.
//!
//! - `field`: the categorical attributes a bar chart can group by
//! - `record`: one parsed survey row
//! - `selection_range`: an inclusive date range chosen with the time brush
//! - `dataset`: the immutable record collection and its CSV loader

pub mod dataset;
pub mod field;
pub mod record;
pub mod selection_range;

pub use dataset::Dataset;
pub use field::{SurveyField, UNKNOWN_CATEGORY};
pub use record::SurveyRecord;
pub use selection_range::SelectionRange;
