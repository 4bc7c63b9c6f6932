use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the four categories of patient data accepted by the backend.
///
/// Variant order is the order fields are written into the multipart body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Structured,
    Genomics,
    Pathology,
    Mri,
}

impl Modality {
    pub const ALL: [Modality; 4] = [
        Modality::Structured,
        Modality::Genomics,
        Modality::Pathology,
        Modality::Mri,
    ];

    /// Multipart field name.
    pub fn field_name(self) -> &'static str {
        match self {
            Modality::Structured => "structured",
            Modality::Genomics => "genomics",
            Modality::Pathology => "pathology",
            Modality::Mri => "mri",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for Modality {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modality::ALL
            .into_iter()
            .find(|m| m.field_name() == s)
            .ok_or_else(|| CoreError::UnknownModality(s.to_string()))
    }
}

/// A selected file, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    /// Declared media type, e.g. `image/png`.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Files for one submission, grouped by modality.
///
/// A modality with no selected files has no entry. Files within a
/// modality keep their selection order, and iteration always walks the
/// modalities in [`Modality::ALL`] order.
#[derive(Debug, Clone, Default)]
pub struct UploadPayload {
    files: BTreeMap<Modality, Vec<UploadFile>>,
}

impl UploadPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modality: Modality, file: UploadFile) {
        self.files.entry(modality).or_default().push(file);
    }

    pub fn files(&self, modality: Modality) -> &[UploadFile] {
        self.files.get(&modality).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every (modality, file) pair in multipart order.
    pub fn parts(&self) -> impl Iterator<Item = (Modality, &UploadFile)> {
        self.files
            .iter()
            .flat_map(|(modality, files)| files.iter().map(move |f| (*modality, f)))
    }

    /// Consume the payload, yielding parts in multipart order.
    pub fn into_parts(self) -> impl Iterator<Item = (Modality, UploadFile)> {
        self.files
            .into_iter()
            .flat_map(|(modality, files)| files.into_iter().map(move |f| (modality, f)))
    }

    pub fn modalities(&self) -> impl Iterator<Item = Modality> + '_ {
        self.files.keys().copied()
    }

    pub fn file_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// A file picked for one of the modality fields, before it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: std::path::PathBuf,
    pub name: String,
    /// Declared media type, guessed from the extension.
    pub media_type: String,
}

impl SelectedFile {
    pub fn from_path(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let media_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            path,
            name,
            media_type,
        }
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    pub fn into_upload(self, bytes: Vec<u8>) -> UploadFile {
        UploadFile {
            name: self.name,
            media_type: self.media_type,
            bytes,
        }
    }
}
