use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostCallError {
    #[error("host method {path} is not installed")]
    MissingMethod { path: String },
    #[error("host method raised: {message}")]
    Raised { message: String },
}

impl HostCallError {
    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised {
            message: message.into(),
        }
    }
}
