//! Application layer - Pipeline steps and handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The steps (case number resolution, dispatch) are usable on their own; the
//! handlers chain them into the export run the host triggers.

mod case_id_resolver;
mod dispatcher;
mod settings;

pub mod handlers;

pub use case_id_resolver::{
    CaseIdResolver, ResolutionError, CASE_NUMBER_FIELD, PRIMARY_REFERENCE_FIELD,
};
pub use dispatcher::{DispatchError, Dispatcher, TransportError, JSON_CONTENT_TYPE};
pub use handlers::{ExportAnalyzer, ExportError, ANALYZER_NAME};
pub use settings::ExportSettings;
