use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown modality: {0}")]
    UnknownModality(String),
}
