//! Decides whether a procedure event should start an export.

use super::event::{ProcedureEvent, TriggerKind};

/// Triggers that start an export. Plain saves never do.
pub static EXPORT_TRIGGERS: [TriggerKind; 3] =
    [TriggerKind::Lock, TriggerKind::EditLock, TriggerKind::Reorg];

/// Stateless relevance check for procedure events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerFilter;

impl TriggerFilter {
    /// True if the event comes from an exportable form and was raised by
    /// a lock, edit-lock or reorganisation.
    pub fn is_relevant(event: &ProcedureEvent) -> bool {
        event.form_kind.is_exportable() && Self::is_export_trigger(&event.trigger_kind)
    }

    /// True if the trigger kind is one of [`EXPORT_TRIGGERS`].
    pub fn is_export_trigger(trigger: &TriggerKind) -> bool {
        EXPORT_TRIGGERS.contains(trigger)
    }
}
