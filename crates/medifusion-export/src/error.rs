use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}

/// A chart that could not be drawn. Never surfaced to the user.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no chart surface named {0}")]
    MissingSurface(String),

    #[error("cannot chart non-finite value {0}")]
    NonFinite(f64),

    #[error("chart backend failed: {0}")]
    Backend(String),
}
