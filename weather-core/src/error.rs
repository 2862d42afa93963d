use reqwest::StatusCode;
use thiserror::Error;

/// The one message users ever see for a failed lookup.
pub const NOT_FOUND_MESSAGE: &str = "Weather data not found";

/// Everything that can go wrong between submitting a query and holding an
/// [`Observation`](crate::Observation).
///
/// The variants exist for diagnostics only. Callers that show something to
/// the user go through [`LookupError::user_message`].
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("failed to reach weather provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse weather provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("weather provider response contained no condition entries")]
    NoCondition,
}

impl LookupError {
    pub fn user_message(&self) -> &'static str {
        NOT_FOUND_MESSAGE
    }
}
