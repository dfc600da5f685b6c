//! ClinicalRecordReader port - Loads the full clinical record of a case.
//!
//! Backed by the host database in production. Records are fetched fresh for
//! every export and never cached by the caller.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::export::ClinicalRecord;
use crate::domain::foundation::CaseId;

/// Errors from the record store.
#[derive(Debug, Clone, Error)]
pub enum RecordFetchError {
    #[error("No clinical record for case {case_id}")]
    NotFound { case_id: CaseId },

    #[error("Record store failure: {0}")]
    Backend(String),
}

impl RecordFetchError {
    pub fn not_found(case_id: &CaseId) -> Self {
        RecordFetchError::NotFound {
            case_id: case_id.clone(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        RecordFetchError::Backend(message.into())
    }
}

/// Port for fetching clinical records by case number.
#[async_trait]
pub trait ClinicalRecordReader: Send + Sync {
    /// Loads the record of the given case.
    ///
    /// # Errors
    ///
    /// `NotFound` if no such case exists.
    async fn get_by_case_id(&self, case_id: &CaseId) -> Result<ClinicalRecord, RecordFetchError>;
}
