//! Export domain - pure logic of the locked-record export.
//!
//! - `event` - procedure events raised by the host
//! - `record` - clinical record model
//! - `trigger_filter` - which events start an export
//! - `payload_builder` - record to payload transformation and redaction policy
//! - `target` - destination URL and embedded credentials

mod errors;
mod event;
mod payload_builder;
mod record;
mod target;
mod trigger_filter;

pub use errors::ConfigurationError;
pub use event::{
    FieldValue, FormKind, ProcedureEvent, TriggerKind, LINKED_PLAN_FORM_NAME, PRIMARY_FORM_NAME,
};
pub use payload_builder::{
    augmented_patient_id, ExportPayload, PayloadBuilder, PayloadPolicy, PATIENT_ID_SEPARATOR,
};
pub use record::{ClinicalRecord, Coding, Patient};
pub use target::ExportTarget;
pub use trigger_filter::{TriggerFilter, EXPORT_TRIGGERS};
