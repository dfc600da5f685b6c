//! Procedure events delivered by the host when a form changes state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::RecordId;

/// Host form name of the clinical history record ("Klinik/Anamnese").
pub const PRIMARY_FORM_NAME: &str = "DNPM Klinik/Anamnese";

/// Host form name of the therapy plan record.
pub const LINKED_PLAN_FORM_NAME: &str = "DNPM Therapieplan";

/// Kind of form a procedure event originates from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormKind {
    /// Clinical history form; carries the case number directly.
    PrimaryRecord,
    /// Therapy plan form; references a primary record.
    LinkedPlanRecord,
    /// Any other host form, identified by its form name.
    Other(String),
}

impl FormKind {
    /// Maps a host form name to its kind.
    pub fn from_form_name(name: &str) -> Self {
        match name {
            PRIMARY_FORM_NAME => FormKind::PrimaryRecord,
            LINKED_PLAN_FORM_NAME => FormKind::LinkedPlanRecord,
            other => FormKind::Other(other.to_string()),
        }
    }

    /// Returns the host form name.
    pub fn form_name(&self) -> &str {
        match self {
            FormKind::PrimaryRecord => PRIMARY_FORM_NAME,
            FormKind::LinkedPlanRecord => LINKED_PLAN_FORM_NAME,
            FormKind::Other(name) => name,
        }
    }

    /// True for the two form kinds that can trigger an export.
    pub fn is_exportable(&self) -> bool {
        matches!(self, FormKind::PrimaryRecord | FormKind::LinkedPlanRecord)
    }
}

impl From<String> for FormKind {
    fn from(name: String) -> Self {
        FormKind::from_form_name(&name)
    }
}

impl From<FormKind> for String {
    fn from(kind: FormKind) -> Self {
        kind.form_name().to_string()
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.form_name())
    }
}

/// Reason the host raised an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerKind {
    Lock,
    EditLock,
    Reorg,
    /// Save, delete or any other host trigger.
    Other(String),
}

impl TriggerKind {
    /// Host name of the trigger.
    pub fn as_str(&self) -> &str {
        match self {
            TriggerKind::Lock => "LOCK",
            TriggerKind::EditLock => "EDIT_LOCK",
            TriggerKind::Reorg => "REORG",
            TriggerKind::Other(name) => name,
        }
    }
}

impl From<String> for TriggerKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "LOCK" => TriggerKind::Lock,
            "EDIT_LOCK" => TriggerKind::EditLock,
            "REORG" => TriggerKind::Reorg,
            _ => TriggerKind::Other(name),
        }
    }
}

impl From<TriggerKind> for String {
    fn from(kind: TriggerKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value of a single form field. Host items hold either text or integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl FieldValue {
    /// Text form of the value; integers render in decimal.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Integer(value) => value.to_string(),
            FieldValue::Text(value) => value.clone(),
        }
    }

    /// Interprets the value as a reference to another host record.
    pub fn as_record_id(&self) -> Option<RecordId> {
        match self {
            FieldValue::Integer(value) => Some(RecordId::new(*value)),
            FieldValue::Text(value) => value.parse().ok(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

/// Event raised by the host for one procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureEvent {
    pub record_id: RecordId,
    pub form_kind: FormKind,
    pub trigger_kind: TriggerKind,
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
}

impl ProcedureEvent {
    /// Creates an event without field values.
    pub fn new(record_id: RecordId, form_kind: FormKind, trigger_kind: TriggerKind) -> Self {
        Self {
            record_id,
            form_kind,
            trigger_kind,
            fields: HashMap::new(),
        }
    }

    /// Adds a field value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Looks up a field value by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}
