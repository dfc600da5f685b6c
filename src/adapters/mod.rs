//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the export pipeline to external systems:
//! - `http` - Export transport over reqwest
//! - `memory` - In-memory procedure host and record store
//! - `settings` - Map- and config-backed settings providers

pub mod http;
pub mod memory;
pub mod settings;

pub use http::{ReqwestTransport, DEFAULT_TIMEOUT};
pub use memory::{InMemoryProcedureHost, InMemoryRecordStore, StoredProcedure};
pub use settings::{ConfigSettings, StaticSettings};
