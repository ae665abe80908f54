#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    #[error("Invalid scale configuration: {0}")]
    Configuration(String),

    #[error("Domain value not found: {0}")]
    KeyNotFound(String),

    #[error("Scale operation not supported: {0}")]
    UnsupportedOperation(String),
}

impl ScaleError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub(crate) fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedOperation(msg.into())
    }
}
