use chrono::NaiveDate;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum NbuError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not the JSON shape the API documents.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading user input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A field was present in the response but could not be interpreted.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// User-supplied date text did not describe a calendar date.
    #[error("wrong date entered: {0:?}")]
    InvalidDate(String),

    /// A trend was requested with the start date after the end date.
    #[error("wrong time direction: {start} is after {end}")]
    ReversedRange {
        /// First day of the requested range.
        start: NaiveDate,
        /// Last day of the requested range.
        end: NaiveDate,
    },

    /// No record matched the currency token.
    #[error("no currency found for {token:?}{}", on_day(.date))]
    CurrencyNotFound {
        /// The token as the caller supplied it.
        token: String,
        /// The day that had no match, when the lookup was date-bound.
        date: Option<NaiveDate>,
    },
}

fn on_day(date: &Option<NaiveDate>) -> String {
    date.map(|d| format!(" on {d}")).unwrap_or_default()
}
