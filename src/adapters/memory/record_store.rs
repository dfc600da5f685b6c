//! In-Memory Record Store
//!
//! ClinicalRecordReader backed by a map of case number to record.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::export::ClinicalRecord;
use crate::domain::foundation::CaseId;
use crate::ports::{ClinicalRecordReader, RecordFetchError};

/// In-memory ClinicalRecordReader.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<HashMap<CaseId, ClinicalRecord>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces the record of a case.
    pub async fn insert(&self, case_id: CaseId, record: ClinicalRecord) {
        self.records.write().await.insert(case_id, record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ClinicalRecordReader for InMemoryRecordStore {
    async fn get_by_case_id(&self, case_id: &CaseId) -> Result<ClinicalRecord, RecordFetchError> {
        let records = self.records.read().await;
        records
            .get(case_id)
            .cloned()
            .ok_or_else(|| RecordFetchError::not_found(case_id))
    }
}
