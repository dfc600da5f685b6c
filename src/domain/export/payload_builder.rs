//! Builds the outbound export payload from a fetched clinical record.

use serde::{Deserialize, Serialize};
use serde_json::Map;
use std::fmt;
use std::str::FromStr;

use super::errors::ConfigurationError;
use super::record::ClinicalRecord;
use crate::domain::foundation::CaseId;

/// Separator between the patient id and the case number in exported ids.
pub const PATIENT_ID_SEPARATOR: &str = "###";

/// Which parts of a clinical record leave the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadPolicy {
    /// The whole record.
    Full,
    /// Patient demographics, episodes of care, diagnoses and metadata only.
    #[default]
    Narrowed,
}

impl PayloadPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadPolicy::Full => "full",
            PayloadPolicy::Narrowed => "narrowed",
        }
    }
}

impl FromStr for PayloadPolicy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(PayloadPolicy::Full),
            "narrowed" => Ok(PayloadPolicy::Narrowed),
            _ => Err(ConfigurationError::InvalidPolicy {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PayloadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Document sent to the external system.
///
/// Serializes exactly like a [`ClinicalRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportPayload(ClinicalRecord);

impl ExportPayload {
    /// The record being exported.
    pub fn record(&self) -> &ClinicalRecord {
        &self.0
    }

    pub fn into_record(self) -> ClinicalRecord {
        self.0
    }

    /// Serializes the payload to UTF-8 JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.0)
    }
}

/// Pure transformation from record to payload under a fixed policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadBuilder {
    policy: PayloadPolicy,
}

impl PayloadBuilder {
    pub fn new(policy: PayloadPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PayloadPolicy {
        self.policy
    }

    /// Builds the payload for `record`. The record itself is left untouched.
    pub fn build(&self, record: &ClinicalRecord, case_id: &CaseId) -> ExportPayload {
        let mut payload = match self.policy {
            PayloadPolicy::Full => record.clone(),
            PayloadPolicy::Narrowed => ClinicalRecord {
                patient: record.patient.demographics(),
                episodes_of_care: record.episodes_of_care.clone(),
                diagnoses: record.diagnoses.clone(),
                metadata: record.metadata.clone(),
                other_sections: Map::new(),
            },
        };
        payload.patient.id = augmented_patient_id(&record.patient.id, case_id);
        ExportPayload(payload)
    }
}

/// Patient id as seen by the receiving system: `<id>###<case id>`.
pub fn augmented_patient_id(patient_id: &str, case_id: &CaseId) -> String {
    format!("{}{}{}", patient_id, PATIENT_ID_SEPARATOR, case_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::export::{Coding, Patient};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn case_id() -> CaseId {
        CaseId::new("1600012345").unwrap()
    }

    fn sample_record() -> ClinicalRecord {
        let mut patient = Patient::new("P-4711");
        patient.birth_date = NaiveDate::from_ymd_opt(1968, 5, 4);
        patient.gender = Some(Coding::new("female"));
        patient.health_insurance = Some(json!({ "type": { "code": "GKV" } }));
        patient
            .other_attributes
            .insert("address".to_string(), json!({ "municipalityCode": "06411" }));

        let mut record = ClinicalRecord::new(patient);
        record.episodes_of_care = vec![json!({ "id": "E-1", "period": { "start": "2024-01-02" } })];
        record.diagnoses = vec![json!({ "id": "D-1", "code": { "code": "C34.1" } })];
        record.metadata = Some(json!({ "type": "initial", "transferTan": "abc" }));
        record
            .other_sections
            .insert("carePlans".to_string(), json!([{ "id": "CP-1" }]));
        record
    }

    #[test]
    fn full_policy_keeps_every_section() {
        let record = sample_record();
        let payload = PayloadBuilder::new(PayloadPolicy::Full).build(&record, &case_id());

        assert_eq!(payload.record().patient.id, "P-4711###1600012345");
        assert!(payload.record().other_sections.contains_key("carePlans"));
        assert!(payload.record().patient.other_attributes.contains_key("address"));
    }

    #[test]
    fn narrowed_policy_drops_undocumented_sections() {
        let record = sample_record();
        let payload = PayloadBuilder::new(PayloadPolicy::Narrowed).build(&record, &case_id());

        let body: Value = serde_json::from_slice(&payload.to_json().unwrap()).unwrap();
        let original = serde_json::to_value(&record).unwrap();

        assert!(body.get("carePlans").is_none());
        assert_eq!(body["episodesOfCare"], original["episodesOfCare"]);
        assert_eq!(body["diagnoses"], original["diagnoses"]);
        assert_eq!(body["metadata"], original["metadata"]);
        assert_eq!(body["patient"]["birthDate"], json!("1968-05-04"));
        assert_eq!(body["patient"]["gender"], json!({ "code": "female" }));
        assert_eq!(body["patient"]["healthInsurance"], original["patient"]["healthInsurance"]);
        assert_eq!(body["patient"]["id"], json!("P-4711###1600012345"));
        assert!(body["patient"].get("address").is_none());
    }

    #[test]
    fn build_does_not_mutate_the_record() {
        let record = sample_record();
        let before = record.clone();

        PayloadBuilder::new(PayloadPolicy::Narrowed).build(&record, &case_id());
        PayloadBuilder::new(PayloadPolicy::Full).build(&record, &case_id());

        assert_eq!(record, before);
    }

    #[test]
    fn payload_round_trips_through_json() {
        let payload = PayloadBuilder::new(PayloadPolicy::Full).build(&sample_record(), &case_id());

        let json = payload.to_json().unwrap();
        let decoded: ExportPayload = serde_json::from_slice(&json).unwrap();

        assert_eq!(decoded, payload);
    }

    #[test]
    fn default_policy_is_narrowed() {
        assert_eq!(PayloadPolicy::default(), PayloadPolicy::Narrowed);
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("FULL".parse::<PayloadPolicy>().unwrap(), PayloadPolicy::Full);
        assert_eq!(" narrowed ".parse::<PayloadPolicy>().unwrap(), PayloadPolicy::Narrowed);
        assert!(matches!(
            "everything".parse::<PayloadPolicy>(),
            Err(ConfigurationError::InvalidPolicy { .. })
        ));
    }

    proptest! {
        #[test]
        fn augmented_id_is_id_separator_case(id in "[A-Za-z0-9-]{1,12}", case in "[0-9]{1,12}") {
            let case_id = CaseId::new(case.clone()).unwrap();
            let augmented = augmented_patient_id(&id, &case_id);
            prop_assert_eq!(augmented, format!("{}###{}", id, case));
        }
    }
}
