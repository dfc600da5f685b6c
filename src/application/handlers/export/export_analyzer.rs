//! ExportAnalyzer - Host analyzer that exports locked DNPM records.
//!
//! Listens for lock, edit-lock and reorganisation of the clinical history
//! and therapy plan forms and runs the export pipeline:
//! - resolve the case number (following plan references)
//! - fetch the full clinical record of the case
//! - build the payload under the configured policy
//! - POST it to the configured destination
//!
//! Every failure is logged with the record id and swallowed.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::application::case_id_resolver::{CaseIdResolver, ResolutionError};
use crate::application::dispatcher::{DispatchError, Dispatcher};
use crate::application::settings::ExportSettings;
use crate::domain::export::{
    ConfigurationError, PayloadBuilder, ProcedureEvent, TriggerFilter, TriggerKind,
    EXPORT_TRIGGERS,
};
use crate::domain::foundation::CaseId;
use crate::ports::{
    ClinicalRecordReader, ExportOutcome, ExportTransport, ProcedureAnalyzer, ProcedureHost,
    RecordFetchError, SettingsProvider, SkipReason,
};

/// Name the analyzer registers under.
pub const ANALYZER_NAME: &str = "DNPM-Export-Plugin";

/// Any failure of a single export attempt.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Fetch(#[from] RecordFetchError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Exports DNPM records when their forms get locked.
pub struct ExportAnalyzer {
    resolver: CaseIdResolver,
    records: Arc<dyn ClinicalRecordReader>,
    builder: PayloadBuilder,
    dispatcher: Dispatcher,
    settings: ExportSettings,
}

impl ExportAnalyzer {
    /// Creates a new ExportAnalyzer.
    pub fn new(
        host: Arc<dyn ProcedureHost>,
        records: Arc<dyn ClinicalRecordReader>,
        transport: Arc<dyn ExportTransport>,
        settings: ExportSettings,
    ) -> Self {
        Self {
            resolver: CaseIdResolver::new(host),
            records,
            builder: PayloadBuilder::new(settings.policy()),
            dispatcher: Dispatcher::new(transport),
            settings,
        }
    }

    /// Creates an analyzer with settings read from the host.
    pub fn from_provider(
        provider: &dyn SettingsProvider,
        host: Arc<dyn ProcedureHost>,
        records: Arc<dyn ClinicalRecordReader>,
        transport: Arc<dyn ExportTransport>,
    ) -> Result<Self, ConfigurationError> {
        let settings = ExportSettings::from_provider(provider)?;
        Ok(Self::new(host, records, transport, settings))
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Runs the pipeline for one relevant event.
    pub async fn export(&self, event: &ProcedureEvent) -> Result<CaseId, ExportError> {
        let case_id = self.resolver.resolve(event).await?;
        debug!(record_id = %event.record_id, case_id = %case_id, "Resolved case number");

        let record = self.records.get_by_case_id(&case_id).await?;
        let payload = self.builder.build(&record, &case_id);

        let destination = self.settings.destination()?;
        self.dispatcher.send(destination, &payload).await?;

        Ok(case_id)
    }
}

#[async_trait]
impl ProcedureAnalyzer for ExportAnalyzer {
    fn name(&self) -> &'static str {
        ANALYZER_NAME
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Exports DNPM clinical records (data model 2.1) to an MTB endpoint"
    }

    fn is_synchronous(&self) -> bool {
        false
    }

    fn is_relevant_for_deleted(&self) -> bool {
        false
    }

    fn trigger_events(&self) -> &'static [TriggerKind] {
        &EXPORT_TRIGGERS
    }

    fn is_relevant(&self, event: &ProcedureEvent) -> bool {
        TriggerFilter::is_relevant(event)
    }

    /// Forms other than clinical history and therapy plan are left to the
    /// resolver, which skips them as unsupported.
    async fn analyze(&self, event: &ProcedureEvent) -> ExportOutcome {
        if !TriggerFilter::is_export_trigger(&event.trigger_kind) {
            debug!(
                record_id = %event.record_id,
                form = %event.form_kind,
                trigger = %event.trigger_kind,
                "Event is not export-relevant"
            );
            return ExportOutcome::Skipped(SkipReason::NotRelevant);
        }

        info!(record_id = %event.record_id, "Starting export for procedure");

        match self.export(event).await {
            Ok(case_id) => {
                info!(record_id = %event.record_id, case_id = %case_id, "Export finished");
                ExportOutcome::Exported { case_id }
            }
            Err(ExportError::Resolution(ResolutionError::UnsupportedForm { form })) => {
                info!(record_id = %event.record_id, form = %form, "Cannot handle procedure form");
                ExportOutcome::Skipped(SkipReason::UnsupportedForm)
            }
            Err(err) => {
                error!(
                    record_id = %event.record_id,
                    error = %err,
                    "Could not export data for procedure"
                );
                ExportOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}
