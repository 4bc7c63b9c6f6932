use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use medifusion_export::area::{Rendered, ResultsArea};
use medifusion_export::error::ExportError;
use medifusion_export::preview::PreviewPane;
use medifusion_export::render::ResultRenderer;

/// Results area backed by a standalone HTML page on disk.
///
/// Each replacement rewrites the whole page. The renderer is shared with
/// whoever produces the results HTML, so one template set serves both.
pub struct PageArea {
    path: PathBuf,
    previews: PreviewPane,
    renderer: Arc<ResultRenderer>,
}

impl PageArea {
    pub fn new(
        path: impl Into<PathBuf>,
        previews: PreviewPane,
        renderer: Arc<ResultRenderer>,
    ) -> Self {
        Self {
            path: path.into(),
            previews,
            renderer,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the page with `results_html` in the results container.
    ///
    /// The page is staged in a temporary file next to the target and
    /// renamed into place; the temporary file is removed on failure.
    pub fn write(&self, results_html: &str) -> Result<(), ExportError> {
        let page = self.renderer.page(results_html, &self.previews)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let mut staged = tempfile::NamedTempFile::new_in(&dir)?;
        staged.write_all(page.as_bytes())?;
        staged.flush()?;
        staged
            .persist(&self.path)
            .map_err(|e| ExportError::Io(e.error))?;

        tracing::debug!(path = %self.path.display(), "results page written");
        Ok(())
    }
}

impl ResultsArea for PageArea {
    fn replace(&self, rendered: Rendered) -> Result<(), ExportError> {
        self.write(&rendered.html)
    }
}
