//! Normalized per-patient view model.
//!
//! Everything the renderer shows is derived here from a raw
//! [`PatientResult`]. Missing optional fields never fail: numbers fall back
//! to `0`, sequences to empty, labels to `Unknown`/`UNKNOWN`. Empty strings
//! count as missing.

use serde::{Deserialize, Serialize};

use super::response::{Diagnosis, PatientResult};
use crate::report_names::synthetic_patient_id;

pub const UNKNOWN_RISK_LEVEL: &str = "UNKNOWN";
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Risk tier selected from the rounded risk percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// `> 70` is high, `41..=70` medium, `<= 40` low.
    pub fn from_percent(percent: i64) -> Self {
        if percent > 70 {
            RiskTier::High
        } else if percent > 40 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RiskTier::Low => "#00ff00",
            RiskTier::Medium => "#ffa500",
            RiskTier::High => "#ff0000",
        }
    }
}

/// `round(probability * 100)`.
pub fn risk_percent(probability: f64) -> i64 {
    (probability * 100.0).round() as i64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisView {
    pub condition: String,
    pub confidence_percent: i64,
    pub evidence: Option<String>,
}

impl From<&Diagnosis> for DiagnosisView {
    fn from(d: &Diagnosis) -> Self {
        Self {
            condition: non_empty(&d.condition)
                .unwrap_or(UNKNOWN_CONDITION)
                .to_string(),
            confidence_percent: risk_percent(d.confidence.unwrap_or(0.0)),
            evidence: non_empty(&d.evidence).map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientView {
    /// 0-based position in the response.
    pub index: usize,
    pub patient_id: String,
    pub risk_percent: i64,
    /// `risk_percent` clamped to the drawable `0..=100` range.
    pub risk_fill: i64,
    pub risk_tier: RiskTier,
    pub risk_color: &'static str,
    pub risk_level: String,
    pub diagnoses: Vec<DiagnosisView>,
    pub anomalies: Vec<String>,
    pub recommendations: Vec<String>,
    pub tumor_size_cm: f64,
    pub growth_rate: f64,
}

impl PatientView {
    pub fn from_result(index: usize, result: &PatientResult) -> Self {
        let analysis = result.analysis.clone().unwrap_or_default();
        let fused = result.fused.clone().unwrap_or_default();

        let risk_percent = risk_percent(analysis.probability.unwrap_or(0.0));
        let risk_tier = RiskTier::from_percent(risk_percent);

        Self {
            index,
            patient_id: display_id(index, result),
            risk_percent,
            risk_fill: risk_percent.clamp(0, 100),
            risk_tier,
            risk_color: risk_tier.color(),
            risk_level: non_empty(&analysis.risk_level)
                .unwrap_or(UNKNOWN_RISK_LEVEL)
                .to_string(),
            diagnoses: analysis.diagnoses.iter().map(DiagnosisView::from).collect(),
            anomalies: analysis.anomalies,
            recommendations: analysis.recommendations,
            tumor_size_cm: fused.tumor_size_cm.unwrap_or(0.0),
            growth_rate: fused.growth_rate.unwrap_or(0.0),
        }
    }

    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }
}

/// The identifier shown for the patient at `index`: the backend's id, or
/// `Patient_<index + 1>` when it sent none.
pub fn display_id(index: usize, result: &PatientResult) -> String {
    non_empty(&result.patient_id)
        .map(str::to_string)
        .unwrap_or_else(|| synthetic_patient_id(index))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
