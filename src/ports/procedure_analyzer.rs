//! ProcedureAnalyzer port - The contract a host analyzer plugin fulfils.
//!
//! The host asks each analyzer which triggers it subscribes to and whether a
//! procedure is relevant, then calls `analyze` for every matching event.

use async_trait::async_trait;

use crate::domain::export::{ProcedureEvent, TriggerKind};
use crate::domain::foundation::CaseId;

/// Why an event did not lead to an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Form or trigger is not export-relevant.
    NotRelevant,
    /// The form kind cannot be mapped to a case.
    UnsupportedForm,
}

/// Result of analyzing one event. Failures are already logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported { case_id: CaseId },
    Skipped(SkipReason),
    Failed { reason: String },
}

impl ExportOutcome {
    pub fn is_exported(&self) -> bool {
        matches!(self, ExportOutcome::Exported { .. })
    }
}

/// Host analyzer plugin.
///
/// `analyze` never fails: a problem with one record must not stop the host
/// from delivering further events.
#[async_trait]
pub trait ProcedureAnalyzer: Send + Sync {
    /// Plugin name shown by the host.
    fn name(&self) -> &'static str;

    fn version(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Whether the host must wait for `analyze` before completing the user action.
    fn is_synchronous(&self) -> bool;

    /// Whether deleted procedures are delivered as well.
    fn is_relevant_for_deleted(&self) -> bool;

    /// Triggers the analyzer subscribes to.
    fn trigger_events(&self) -> &'static [TriggerKind];

    /// Whether the event should be analyzed at all.
    fn is_relevant(&self, event: &ProcedureEvent) -> bool;

    /// Processes one event.
    async fn analyze(&self, event: &ProcedureEvent) -> ExportOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ProcedureAnalyzer) {}

    #[test]
    fn only_exported_outcome_reports_export() {
        let exported = ExportOutcome::Exported {
            case_id: CaseId::new("1600012345").unwrap(),
        };
        assert!(exported.is_exported());
        assert!(!ExportOutcome::Skipped(SkipReason::NotRelevant).is_exported());
        assert!(!ExportOutcome::Failed {
            reason: "boom".to_string()
        }
        .is_exported());
    }
}
