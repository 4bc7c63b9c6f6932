use std::path::PathBuf;

use medifusion_cli::cli::{AnalyzeArgs, ConfigSetArgs, OutputArgs, PreviewArgs, RenderArgs};
use medifusion_cli::commands::{apply_config_changes, preview, render, upload_form};
use medifusion_cli::config::MediFusionConfig;
use medifusion_core::models::payload::Modality;
use medifusion_core::models::report::ExportedReport;

const GLIOMA: &str = r#"{
    "status": "ok",
    "results": [
        {
            "analysis": {
                "probability": 0.85,
                "risk_level": "HIGH",
                "diagnoses": [{"condition": "Glioma", "confidence": 0.9}],
                "anomalies": ["unusual growth pattern"]
            },
            "fused": {"tumor_size_cm": 3.2, "growth_rate": 0.4}
        },
        {"patient_id": "DEMO_002", "analysis": {"probability": 0.3}}
    ]
}"#;

fn output(out: PathBuf, export_dir: Option<PathBuf>) -> OutputArgs {
    OutputArgs {
        out: Some(out),
        export_dir,
    }
}

#[test]
fn render_writes_page_and_exports_reports() {
    let dir = tempfile::tempdir().unwrap();
    let response = dir.path().join("response.json");
    std::fs::write(&response, GLIOMA).unwrap();
    let out = dir.path().join("page.html");
    let reports = dir.path().join("reports");

    let page = render(
        RenderArgs {
            response,
            output: output(out.clone(), Some(reports.clone())),
        },
        &MediFusionConfig::default(),
    )
    .unwrap();
    assert_eq!(page, out);

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("Patient: Patient_1"));
    assert!(html.contains("Patient: DEMO_002"));
    assert!(html.contains("width:85%; background: #ff0000"));
    assert!(html.contains("<style>"));

    let first: ExportedReport = serde_json::from_str(
        &std::fs::read_to_string(reports.join("medifusion_report_Patient_1.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(first.patient_id, "Patient_1");
    assert_eq!(first.fused_data.unwrap()["tumor_size_cm"], serde_json::json!(3.2));
    assert!(reports.join("medifusion_report_DEMO_002.json").exists());
}

#[test]
fn render_of_error_response_fails_with_error_page() {
    let dir = tempfile::tempdir().unwrap();
    let response = dir.path().join("response.json");
    std::fs::write(&response, r#"{"status":"error","message":"bad input"}"#).unwrap();
    let out = dir.path().join("page.html");
    let reports = dir.path().join("reports");

    let err = render(
        RenderArgs {
            response,
            output: output(out.clone(), Some(reports.clone())),
        },
        &MediFusionConfig::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("bad input"));

    let html = std::fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches(r#"<div class="result-card"#).count(), 1);
    assert!(html.contains("bad input"));
    assert!(!reports.exists());
}

#[tokio::test]
async fn preview_page_contains_only_images() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("scan.png");
    let txt = dir.path().join("notes.txt");
    std::fs::write(&png, b"png").unwrap();
    std::fs::write(&txt, b"txt").unwrap();
    let out = dir.path().join("preview.html");

    preview(
        PreviewArgs {
            mri: vec![png, txt],
            out: Some(out.clone()),
        },
        &MediFusionConfig::default(),
    )
    .await
    .unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("<img ").count(), 1);
    assert!(html.contains(r#"alt="scan.png""#));
    assert!(!html.contains("notes.txt"));
}

#[test]
fn upload_form_maps_each_flag_to_its_field() {
    let args = AnalyzeArgs {
        structured: vec!["patients.csv".into()],
        genomics: vec![],
        pathology: vec!["path1.txt".into(), "path2.txt".into()],
        mri: vec!["t1.png".into()],
        endpoint: None,
        timeout: None,
        output: OutputArgs {
            out: None,
            export_dir: None,
        },
    };
    let form = upload_form(&args);
    assert_eq!(form.selected(Modality::Structured).len(), 1);
    assert!(form.selected(Modality::Genomics).is_empty());
    let pathology: Vec<&str> = form
        .selected(Modality::Pathology)
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(pathology, vec!["path1.txt", "path2.txt"]);
    assert_eq!(form.selected(Modality::Mri)[0].media_type, "image/png");
}

#[test]
fn config_changes_apply() {
    let mut config = MediFusionConfig {
        request_timeout_secs: Some(10),
        ..Default::default()
    };
    apply_config_changes(
        &mut config,
        ConfigSetArgs {
            endpoint: Some("http://10.0.0.5:5000/upload".to_string()),
            timeout: None,
            clear_timeout: true,
            output_dir: Some("/srv/reports".into()),
        },
    );
    assert_eq!(config.endpoint, "http://10.0.0.5:5000/upload");
    assert_eq!(config.request_timeout_secs, None);
    assert_eq!(config.output_dir(), PathBuf::from("/srv/reports"));
}
