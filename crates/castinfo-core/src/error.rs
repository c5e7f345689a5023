//! Error type for the description builder.
//!
//! Only structural problems are errors. Absent optional keys and
//! unrecognised enum names are skipped, never reported.

/// Errors raised while decoding or building a description.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required top-level key is absent or empty.
    #[error("{0} option is required")]
    MissingRequiredField(&'static str),

    /// A track entry lacks one of its minimum fields.
    #[error("media track {index} is missing required field {field}")]
    MissingTrackField { index: usize, field: &'static str },

    /// The payload does not have the expected shape.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The payload is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
