use serde::{Deserialize, Serialize};

use serde_json::Value;

use super::response::PatientResult;

/// Downloadable per-patient report.
///
/// `analysis` and `fused_data` are the sections as the backend sent them.
/// Absent sections stay absent rather than being replaced by defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedReport {
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fused_data: Option<Value>,
    pub timestamp: jiff::Timestamp,
}

impl ExportedReport {
    pub fn new(patient_id: &str, result: &PatientResult, timestamp: jiff::Timestamp) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            analysis: result.source.analysis.clone(),
            fused_data: result.source.fused.clone(),
            timestamp,
        }
    }
}
