//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the export pipeline and the outside world. Adapters implement these ports.
//!
//! - `ProcedureHost` - Host form access (form kind, field values, references)
//! - `ClinicalRecordReader` - Full clinical record by case number
//! - `SettingsProvider` - Named host settings
//! - `ExportTransport` - HTTP POST to the export endpoint
//! - `ProcedureAnalyzer` - Plugin contract the exporter offers to the host

mod clinical_record_reader;
mod export_transport;
mod procedure_analyzer;
mod procedure_host;
mod settings_provider;

pub use clinical_record_reader::{ClinicalRecordReader, RecordFetchError};
pub use export_transport::{ExportTransport, OutboundRequest, TransportFailure, TransportResponse};
pub use procedure_analyzer::{ExportOutcome, ProcedureAnalyzer, SkipReason};
pub use procedure_host::{HostError, ProcedureHost};
pub use settings_provider::{SettingsProvider, EXPORT_URL_SETTING, PAYLOAD_POLICY_SETTING};
