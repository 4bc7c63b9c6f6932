use medifusion_core::models::response::{AnalysisDetail, Diagnosis, FusedMeasurements, PatientResult};
use medifusion_core::models::view::{PatientView, RiskTier, display_id, risk_percent};

fn with_probability(p: f64) -> PatientResult {
    PatientResult {
        analysis: Some(AnalysisDetail {
            probability: Some(p),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn risk_percent_rounds_probability() {
    assert_eq!(risk_percent(0.85), 85);
    assert_eq!(risk_percent(0.404), 40);
    assert_eq!(risk_percent(0.405), 41);
    assert_eq!(risk_percent(0.0), 0);
    assert_eq!(risk_percent(1.0), 100);
}

#[test]
fn risk_percent_is_deterministic() {
    let result = with_probability(0.6789);
    let first = PatientView::from_result(0, &result);
    let second = PatientView::from_result(0, &result);
    assert_eq!(first, second);
    assert_eq!(first.risk_percent, 68);
}

#[test]
fn tier_boundaries_belong_to_lower_tier() {
    assert_eq!(RiskTier::from_percent(40), RiskTier::Low);
    assert_eq!(RiskTier::from_percent(41), RiskTier::Medium);
    assert_eq!(RiskTier::from_percent(70), RiskTier::Medium);
    assert_eq!(RiskTier::from_percent(71), RiskTier::High);
}

#[test]
fn tier_colors() {
    assert_eq!(RiskTier::Low.color(), "#00ff00");
    assert_eq!(RiskTier::Medium.color(), "#ffa500");
    assert_eq!(RiskTier::High.color(), "#ff0000");
}

#[test]
fn missing_patient_id_gets_positional_label() {
    let result = PatientResult::default();
    assert_eq!(display_id(0, &result), "Patient_1");
    assert_eq!(display_id(4, &result), "Patient_5");

    let empty = PatientResult {
        patient_id: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(display_id(2, &empty), "Patient_3");
}

#[test]
fn backend_patient_id_is_kept() {
    let result = PatientResult {
        patient_id: Some("DEMO_001".to_string()),
        ..Default::default()
    };
    assert_eq!(PatientView::from_result(7, &result).patient_id, "DEMO_001");
}

#[test]
fn empty_result_normalizes_to_safe_defaults() {
    let view = PatientView::from_result(0, &PatientResult::default());
    assert_eq!(view.risk_percent, 0);
    assert_eq!(view.risk_tier, RiskTier::Low);
    assert_eq!(view.risk_level, "UNKNOWN");
    assert!(view.diagnoses.is_empty());
    assert!(!view.has_anomalies());
    assert!(view.recommendations.is_empty());
    assert_eq!(view.tumor_size_cm, 0.0);
    assert_eq!(view.growth_rate, 0.0);
}

#[test]
fn diagnosis_defaults_and_percentages() {
    let result = PatientResult {
        analysis: Some(AnalysisDetail {
            diagnoses: vec![
                Diagnosis {
                    condition: Some("Glioma".to_string()),
                    confidence: Some(0.9),
                    evidence: Some("Tumor size 3.2cm requires monitoring".to_string()),
                },
                Diagnosis {
                    condition: None,
                    confidence: None,
                    evidence: Some(String::new()),
                },
            ],
            ..Default::default()
        }),
        ..Default::default()
    };

    let view = PatientView::from_result(0, &result);
    assert_eq!(view.diagnoses[0].condition, "Glioma");
    assert_eq!(view.diagnoses[0].confidence_percent, 90);
    assert!(view.diagnoses[0].evidence.is_some());
    assert_eq!(view.diagnoses[1].condition, "Unknown");
    assert_eq!(view.diagnoses[1].confidence_percent, 0);
    assert_eq!(view.diagnoses[1].evidence, None);
}

#[test]
fn out_of_range_probability_clamps_fill_only() {
    let view = PatientView::from_result(0, &with_probability(1.3));
    assert_eq!(view.risk_percent, 130);
    assert_eq!(view.risk_fill, 100);
    assert_eq!(view.risk_tier, RiskTier::High);
}

#[test]
fn fused_measurements_feed_chart_values() {
    let result = PatientResult {
        fused: Some(FusedMeasurements {
            tumor_size_cm: Some(3.2),
            growth_rate: Some(0.4),
            ..Default::default()
        }),
        ..Default::default()
    };
    let view = PatientView::from_result(0, &result);
    assert_eq!(view.tumor_size_cm, 3.2);
    assert_eq!(view.growth_rate, 0.4);
}
