//! Downloadable per-patient JSON reports.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use medifusion_core::models::report::ExportedReport;
use medifusion_core::models::response::PatientResult;
use medifusion_core::report_names::report_file;

use crate::error::ExportError;

pub const REPORT_MEDIA_TYPE: &str = "application/json";

/// A save control bound to one card: the filename and a self-contained
/// `data:` URL holding the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadLink {
    pub filename: String,
    pub href: String,
}

/// Build the report for `result`, stamped with the current time.
///
/// `result` is only read; the report holds its own copies.
pub fn build_report(patient_id: &str, result: &PatientResult) -> ExportedReport {
    ExportedReport::new(patient_id, result, jiff::Timestamp::now())
}

/// Pretty-printed JSON with two-space indentation.
pub fn to_json(report: &ExportedReport) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn download_link(patient_id: &str, result: &PatientResult) -> Result<DownloadLink, ExportError> {
    let json = to_json(&build_report(patient_id, result))?;
    Ok(DownloadLink {
        filename: report_file(patient_id),
        href: format!(
            "data:{REPORT_MEDIA_TYPE};base64,{}",
            STANDARD.encode(json.as_bytes())
        ),
    })
}

/// Save the report for `result` into `dir` as
/// `medifusion_report_<patient_id>.json`.
///
/// The report is staged in a temporary file in `dir` and renamed into
/// place; the temporary file is removed if anything fails before that.
pub fn save_report(
    dir: &Path,
    patient_id: &str,
    result: &PatientResult,
) -> Result<PathBuf, ExportError> {
    let json = to_json(&build_report(patient_id, result))?;
    std::fs::create_dir_all(dir)?;

    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(json.as_bytes())?;
    staged.flush()?;

    let path = dir.join(report_file(patient_id));
    staged.persist(&path).map_err(|e| ExportError::Io(e.error))?;

    tracing::info!(path = %path.display(), patient_id, "report saved");
    Ok(path)
}
