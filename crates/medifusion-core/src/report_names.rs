//! Naming conventions shared by the client and the exporter.
//!
//! Pure string functions. These define the default endpoint, the label
//! given to patients the backend did not name, and the filename of an
//! exported report.

/// Endpoint used when neither the config nor the command line names one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/upload";

/// Label for a patient at 0-based `index` that arrived without an id.
pub fn synthetic_patient_id(index: usize) -> String {
    format!("Patient_{}", index + 1)
}

/// Filename of the downloadable report for `patient_id`.
///
/// Path separators are replaced so the name always stays inside the
/// directory it is saved to.
pub fn report_file(patient_id: &str) -> String {
    let safe: String = patient_id
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("medifusion_report_{safe}.json")
}
