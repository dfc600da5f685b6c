//! ProcedureHost port - Read access to the host's procedure forms.
//!
//! The host owns all forms; the export only needs to know a form's kind,
//! read single field values, and follow a reference field to another form.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::export::{FieldValue, FormKind};
use crate::domain::foundation::RecordId;

/// Failure talking to the host.
#[derive(Debug, Clone, Error)]
#[error("Host lookup failed: {message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Port for reading host procedures.
///
/// A missing record or field is reported as `Ok(None)`; `Err` is reserved
/// for the host itself failing.
#[async_trait]
pub trait ProcedureHost: Send + Sync {
    /// Kind of the form the record belongs to.
    async fn form_kind(&self, record_id: RecordId) -> Result<Option<FormKind>, HostError>;

    /// Value of a single field of the record.
    async fn field_value(
        &self,
        record_id: RecordId,
        field_name: &str,
    ) -> Result<Option<FieldValue>, HostError>;

    /// Follows the reference stored in `ref_field_name` of `record_id`.
    ///
    /// Returns the id of the referenced record if the reference is set and
    /// the referenced record exists.
    async fn referenced_record(
        &self,
        record_id: RecordId,
        ref_field_name: &str,
    ) -> Result<Option<RecordId>, HostError>;
}
