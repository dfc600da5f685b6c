//! In-memory adapters for the host-side ports.

mod procedure_host;
mod record_store;

pub use procedure_host::{InMemoryProcedureHost, StoredProcedure};
pub use record_store::InMemoryRecordStore;
