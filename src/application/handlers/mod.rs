//! Application handlers.
//!
//! Handlers that orchestrate the export pipeline for host events.

pub mod export;

pub use export::{ExportAnalyzer, ExportError, ANALYZER_NAME};
