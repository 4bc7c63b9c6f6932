use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Status values the backend uses to signal a successful analysis.
pub const SUCCESS_STATUSES: [&str; 2] = ["ok", "success"];

/// Body returned by the analysis endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: Option<Vec<PatientResult>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AnalysisResponse {
    pub fn is_success(&self) -> bool {
        SUCCESS_STATUSES.contains(&self.status.as_str())
    }

    /// Patient results, empty when absent or when the status is not a
    /// success value.
    pub fn results(&self) -> &[PatientResult] {
        match (&self.results, self.is_success()) {
            (Some(results), true) => results,
            _ => &[],
        }
    }
}

/// One patient's analysis as sent by the backend.
///
/// `analysis` and `fused` are typed readings used for rendering. `source`
/// holds the same two sections exactly as received and is what gets
/// exported.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "WirePatientResult")]
pub struct PatientResult {
    pub patient_id: Option<String>,
    pub analysis: Option<AnalysisDetail>,
    pub fused: Option<FusedMeasurements>,
    pub source: ResultSource,
}

/// Untyped `analysis`/`fused` objects exactly as they appeared in the
/// response body. Unknown keys and integer literals are kept and absent
/// lists are not filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fused: Option<Value>,
}

#[derive(Deserialize)]
struct WirePatientResult {
    #[serde(default, deserialize_with = "text_or_number")]
    patient_id: Option<String>,
    #[serde(default)]
    analysis: Option<Value>,
    #[serde(default)]
    fused: Option<Value>,
}

impl TryFrom<WirePatientResult> for PatientResult {
    type Error = serde_json::Error;

    fn try_from(wire: WirePatientResult) -> Result<Self, Self::Error> {
        let analysis = match &wire.analysis {
            Some(value) => Some(AnalysisDetail::deserialize(value)?),
            None => None,
        };
        let fused = match &wire.fused {
            Some(value) => Some(FusedMeasurements::deserialize(value)?),
            None => None,
        };
        Ok(Self {
            patient_id: wire.patient_id,
            analysis,
            fused,
            source: ResultSource {
                analysis: wire.analysis,
                fused: wire.fused,
            },
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub diagnoses: Vec<Diagnosis>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub anomalies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<String>,
    /// Overall model confidence label (`high`, `medium`, `low`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// Numeric summary computed by fusing several modalities.
///
/// Only the two charted measurements are typed; every other fused
/// feature is carried through `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FusedMeasurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tumor_size_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Patient ids derived from spreadsheet rows may arrive as numbers.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => Some(text),
        Some(Raw::Number(n)) => Some(n.to_string()),
        None => None,
    })
}
