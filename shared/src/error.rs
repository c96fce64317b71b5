use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Prefix of the single diagnostic emitted when the counter cannot be shown.
pub const UNAVAILABLE_PREFIX: &str = "Visitor counter unavailable:";

/// Every way loading the counter can fail.
///
/// Callers outside the loader only ever see these as "counter unavailable";
/// the variants exist so the diagnostic says which step broke.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CounterError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("bad status {0}")]
    BadStatus(u16),
    #[error("invalid count response: {0}")]
    InvalidCountBody(String),
}

impl CounterError {
    pub fn network(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Network {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// The line written to the diagnostic log.
    pub fn diagnostic(&self) -> String {
        format!("{} {}", UNAVAILABLE_PREFIX, self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
}

pub type Result<T> = std::result::Result<T, CounterError>;
