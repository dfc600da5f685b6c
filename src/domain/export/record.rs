//! Clinical record (MTB file) as returned by the record store.
//!
//! Only the parts the export pipeline looks at are typed. Episodes of care,
//! diagnoses and metadata are carried as opaque JSON, and any further
//! top-level section is kept in `other_sections` so that a full export can
//! forward it unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A coded value (code system entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coding {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Coding {
    /// Creates a coding with only a code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display: None,
            system: None,
            version: None,
        }
    }
}

/// Patient demographics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Coding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_insurance: Option<Value>,
    /// Address, date of death, managing site, ...
    #[serde(flatten)]
    pub other_attributes: Map<String, Value>,
}

impl Patient {
    /// Creates a patient with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            birth_date: None,
            gender: None,
            health_insurance: None,
            other_attributes: Map::new(),
        }
    }

    /// Copy restricted to id, birth date, gender and health insurance.
    pub fn demographics(&self) -> Self {
        Self {
            id: self.id.clone(),
            birth_date: self.birth_date,
            gender: self.gender.clone(),
            health_insurance: self.health_insurance.clone(),
            other_attributes: Map::new(),
        }
    }
}

/// Full clinical record of one patient case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalRecord {
    pub patient: Patient,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes_of_care: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnoses: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Care plans, therapies, specimens and every other section.
    #[serde(flatten)]
    pub other_sections: Map<String, Value>,
}

impl ClinicalRecord {
    /// Creates a record with a patient and no sections.
    pub fn new(patient: Patient) -> Self {
        Self {
            patient,
            episodes_of_care: Vec::new(),
            diagnoses: Vec::new(),
            metadata: None,
            other_sections: Map::new(),
        }
    }
}
