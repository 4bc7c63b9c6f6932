use std::collections::BTreeMap;

use medifusion_core::models::payload::{Modality, SelectedFile, UploadPayload};

use crate::error::ClientError;

/// The four file fields of the upload form.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    fields: BTreeMap<Modality, Vec<SelectedFile>>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection of one field.
    pub fn select(&mut self, modality: Modality, files: impl IntoIterator<Item = SelectedFile>) {
        let files: Vec<SelectedFile> = files.into_iter().collect();
        if files.is_empty() {
            self.fields.remove(&modality);
        } else {
            self.fields.insert(modality, files);
        }
    }

    pub fn selected(&self, modality: Modality) -> &[SelectedFile] {
        self.fields.get(&modality).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn file_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }
}

/// Read every selected file, walking the fields in fixed modality order.
pub async fn read_payload(form: &UploadForm) -> Result<UploadPayload, ClientError> {
    let mut payload = UploadPayload::new();
    for modality in Modality::ALL {
        for file in form.selected(modality) {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|source| ClientError::ReadFile {
                    path: file.path.display().to_string(),
                    source,
                })?;
            payload.push(modality, file.clone().into_upload(bytes));
        }
    }
    tracing::debug!(files = payload.file_count(), "payload assembled");
    Ok(payload)
}
