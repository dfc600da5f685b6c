//! CaseIdResolver - Derives the case number for a procedure event.
//!
//! Clinical history forms carry the case number themselves. Therapy plan
//! forms only reference their clinical history form, so the number is read
//! from the referenced record through the host.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::export::{FieldValue, FormKind, ProcedureEvent};
use crate::domain::foundation::{CaseId, RecordId};
use crate::ports::{HostError, ProcedureHost};

/// Field holding the case number on a clinical history form.
pub const CASE_NUMBER_FIELD: &str = "FallnummerMV";

/// Field on a therapy plan form referencing its clinical history form.
pub const PRIMARY_REFERENCE_FIELD: &str = "ref_dnpm_klinikanamnese";

/// Why no case number could be derived.
#[derive(Debug, Clone, Error)]
pub enum ResolutionError {
    /// The form is not one the export handles. Callers skip these.
    #[error("Cannot handle procedure form '{form}'")]
    UnsupportedForm { form: FormKind },

    #[error("Record {record_id} has no value for field '{field}'")]
    MissingField { record_id: RecordId, field: String },

    #[error("Record {record_id} does not reference a clinical history record via '{field}'")]
    ReferenceNotFound { record_id: RecordId, field: String },

    #[error(transparent)]
    Host(#[from] HostError),
}

impl ResolutionError {
    fn missing_field(record_id: RecordId, field: &str) -> Self {
        ResolutionError::MissingField {
            record_id,
            field: field.to_string(),
        }
    }

    fn reference_not_found(record_id: RecordId, field: &str) -> Self {
        ResolutionError::ReferenceNotFound {
            record_id,
            field: field.to_string(),
        }
    }
}

/// Resolves case numbers, following plan-to-history references via the host.
pub struct CaseIdResolver {
    host: Arc<dyn ProcedureHost>,
}

impl CaseIdResolver {
    pub fn new(host: Arc<dyn ProcedureHost>) -> Self {
        Self { host }
    }

    /// Returns the case number for the event's record.
    ///
    /// # Errors
    ///
    /// - `UnsupportedForm` for forms other than clinical history and therapy plan
    /// - `MissingField` if the case number is absent or blank
    /// - `ReferenceNotFound` if a therapy plan has no valid clinical history reference
    /// - `Host` if the host lookup itself fails
    pub async fn resolve(&self, event: &ProcedureEvent) -> Result<CaseId, ResolutionError> {
        match &event.form_kind {
            FormKind::PrimaryRecord => {
                case_id_from(event.record_id, event.field(CASE_NUMBER_FIELD))
            }
            FormKind::LinkedPlanRecord => self.resolve_via_reference(event.record_id).await,
            other => Err(ResolutionError::UnsupportedForm {
                form: other.clone(),
            }),
        }
    }

    async fn resolve_via_reference(&self, plan_id: RecordId) -> Result<CaseId, ResolutionError> {
        let primary_id = self
            .host
            .referenced_record(plan_id, PRIMARY_REFERENCE_FIELD)
            .await?
            .ok_or_else(|| ResolutionError::reference_not_found(plan_id, PRIMARY_REFERENCE_FIELD))?;

        match self.host.form_kind(primary_id).await? {
            Some(FormKind::PrimaryRecord) => {}
            other => {
                debug!(
                    record_id = %plan_id,
                    referenced_id = %primary_id,
                    referenced_form = ?other,
                    "Referenced record is not a clinical history form"
                );
                return Err(ResolutionError::reference_not_found(
                    plan_id,
                    PRIMARY_REFERENCE_FIELD,
                ));
            }
        }

        let value = self.host.field_value(primary_id, CASE_NUMBER_FIELD).await?;
        case_id_from(primary_id, value.as_ref())
    }
}

fn case_id_from(record_id: RecordId, value: Option<&FieldValue>) -> Result<CaseId, ResolutionError> {
    value
        .and_then(|v| CaseId::new(v.as_text()).ok())
        .ok_or_else(|| ResolutionError::missing_field(record_id, CASE_NUMBER_FIELD))
}
