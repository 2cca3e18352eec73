use std::error::Error as StdError;
use thiserror::Error;

use crate::status::StatusRecord;

/// The forecast could not be obtained.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Request(reqwest::Error),

    #[error("HTTP {status}{}", body_suffix(.body))]
    Status { status: reqwest::StatusCode, body: String },

    #[error("could not read response body")]
    Body(#[source] reqwest::Error),

    #[error("response is not valid JSON")]
    Decode(#[source] serde_json::Error),
}

/// The forecast arrived but does not look like an Open-Meteo payload.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("unexpected payload")]
    Payload(#[source] serde_json::Error),

    #[error("daily.{field} has no value for day {index}")]
    MissingDaily { field: &'static str, index: usize },

    #[error("invalid timestamp {0:?}")]
    Timestamp(String),
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

impl WeatherError {
    /// Fetch failures are fatal for the bar module; a malformed payload is not.
    pub fn exit_code(&self) -> u8 {
        match self {
            WeatherError::Fetch(_) => 1,
            WeatherError::Processing(_) => 0,
        }
    }

    pub fn status_record(&self) -> StatusRecord {
        match self {
            WeatherError::Fetch(err) => StatusRecord::fetch_failure(err),
            WeatherError::Processing(err) => StatusRecord::processing_failure(err),
        }
    }
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() { String::new() } else { format!(": {body}") }
}

/// Display text of `err` followed by each of its sources, joined by `": "`.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}
