//! View renderers: pure functions from the filtered table and display
//! options to something the UI can draw.
//!
//! Tabular views always produce an artifact. Chart views validate first and
//! return `Ok(None)` when there is nothing to draw.

pub mod charts;
pub mod stats;
pub mod tables;
