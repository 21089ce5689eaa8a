use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// A caller passed a non-positive dimension, an out-of-range
    /// probability, or a similarly unusable value. Raised before any
    /// partial construction happens.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The export collaborator failed; carries the underlying cause.
    /// Already-built tile data is never touched by a failed export.
    #[error("export failed")]
    ExportFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}
