//! Inline previews for images selected as imaging files.
//!
//! Each image is decoded on its own task, so previews land in the pane in
//! completion order rather than selection order.

use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use tokio::task::JoinSet;

use medifusion_core::models::payload::SelectedFile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub name: String,
    pub data_url: String,
}

/// The preview container.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PreviewPane {
    previews: Vec<Preview>,
}

impl PreviewPane {
    pub fn append(&mut self, preview: Preview) {
        self.previews.push(preview);
    }

    pub fn previews(&self) -> &[Preview] {
        &self.previews
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }
}

/// Handle a change of the imaging selection.
///
/// Returns a fresh pane holding one preview per image in `files`.
/// Non-image files are skipped silently; images that cannot be read are
/// logged and skipped.
pub async fn preview_selection(files: &[SelectedFile]) -> PreviewPane {
    let mut pane = PreviewPane::default();
    let mut decodes = JoinSet::new();

    for file in files.iter().filter(|f| f.is_image()) {
        decodes.spawn(decode(file.path.clone(), file.name.clone(), file.media_type.clone()));
    }

    while let Some(joined) = decodes.join_next().await {
        match joined {
            Ok(Ok(preview)) => pane.append(preview),
            Ok(Err((name, e))) => {
                tracing::warn!(file = %name, error = %e, "preview skipped");
            }
            Err(e) => {
                tracing::warn!(error = %e, "preview task failed");
            }
        }
    }

    tracing::debug!(previews = pane.len(), selected = files.len(), "previews ready");
    pane
}

async fn decode(
    path: PathBuf,
    name: String,
    media_type: String,
) -> Result<Preview, (String, std::io::Error)> {
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(Preview {
            data_url: format!("data:{media_type};base64,{}", STANDARD.encode(bytes)),
            name,
        }),
        Err(e) => Err((name, e)),
    }
}
