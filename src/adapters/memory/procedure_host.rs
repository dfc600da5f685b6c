//! In-Memory Procedure Host
//!
//! Holds procedure forms in memory. Used by tests and for running the export
//! pipeline without a host database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::export::{FieldValue, FormKind};
use crate::domain::foundation::RecordId;
use crate::ports::{HostError, ProcedureHost};

/// A stored procedure form.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredProcedure {
    pub form_kind: FormKind,
    pub fields: HashMap<String, FieldValue>,
}

impl StoredProcedure {
    pub fn new(form_kind: FormKind) -> Self {
        Self {
            form_kind,
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// In-memory ProcedureHost.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProcedureHost {
    procedures: Arc<RwLock<HashMap<RecordId, StoredProcedure>>>,
}

impl InMemoryProcedureHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces a procedure.
    pub async fn insert(&self, record_id: RecordId, procedure: StoredProcedure) {
        self.procedures.write().await.insert(record_id, procedure);
    }

    /// Number of stored procedures.
    pub async fn len(&self) -> usize {
        self.procedures.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.procedures.read().await.is_empty()
    }
}

#[async_trait]
impl ProcedureHost for InMemoryProcedureHost {
    async fn form_kind(&self, record_id: RecordId) -> Result<Option<FormKind>, HostError> {
        let procedures = self.procedures.read().await;
        Ok(procedures.get(&record_id).map(|p| p.form_kind.clone()))
    }

    async fn field_value(
        &self,
        record_id: RecordId,
        field_name: &str,
    ) -> Result<Option<FieldValue>, HostError> {
        let procedures = self.procedures.read().await;
        Ok(procedures
            .get(&record_id)
            .and_then(|p| p.fields.get(field_name))
            .cloned())
    }

    async fn referenced_record(
        &self,
        record_id: RecordId,
        ref_field_name: &str,
    ) -> Result<Option<RecordId>, HostError> {
        let procedures = self.procedures.read().await;
        let referenced = procedures
            .get(&record_id)
            .and_then(|p| p.fields.get(ref_field_name))
            .and_then(FieldValue::as_record_id);

        // Dangling references count as unset.
        Ok(referenced.filter(|id| procedures.contains_key(id)))
    }
}
