//! Export handlers.
//!
//! Handlers that react to host procedure events and export clinical records.

mod export_analyzer;

pub use export_analyzer::{ExportAnalyzer, ExportError, ANALYZER_NAME};
