/// Convenience result type used across roiplan.
pub type RoiResult<T> = Result<T, RoiError>;

/// Top-level error taxonomy used at the crate boundary.
///
/// Planning itself never fails: degenerate geometry contributes no rectangles. Errors are only
/// produced while loading region documents, configuring overlays, or encoding images.
#[derive(thiserror::Error, Debug)]
pub enum RoiError {
    /// Invalid user-provided region or overlay data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing documents and plans.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while producing overlay images.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RoiError {
    /// Build a [`RoiError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RoiError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`RoiError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
