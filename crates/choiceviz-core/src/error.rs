//! Error kinds surfaced by the fetch / validate / build pipeline.
//!
//! Every variant is recoverable: the page controller records it, empties the
//! displayed results and stays usable for another attempt.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required input (base URL, month, range bound) was not provided.
    /// No request is sent.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// The base URL is not a well-formed absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The base URL parses but does not use http or https.
    #[error("unsupported URL scheme {scheme:?} in {url:?} (expected http or https)")]
    UnsupportedScheme { url: String, scheme: String },

    /// A date input is not in `YYYY-MM` form or names a month outside 01..12.
    #[error("invalid month {0:?} (expected YYYY-MM)")]
    InvalidDate(String),

    /// The request never produced an HTTP response (DNS, refused, TLS, timeout).
    #[error("network failure: {0}")]
    Network(#[source] curl::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {status_text}")]
    Http { status: u32, status_text: String },

    /// The body was not valid JSON.
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The JSON was valid but lacks the expected `data` array.
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

impl AppError {
    /// Inline message shown to the user in place of results.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingInput(what) => format!("Please enter a valid {what}"),
            AppError::Network(_) => "Connection error: the endpoint could not be reached. \
                Check the URL and that the endpoint accepts requests from this client."
                .to_string(),
            other => format!("Error loading from endpoint: {other}"),
        }
    }

    /// True for failures that happened before any HTTP status was received.
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_carries_status_and_text() {
        let e = AppError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP 404: Not Found");
        assert_eq!(
            e.user_message(),
            "Error loading from endpoint: HTTP 404: Not Found"
        );
        assert!(!e.is_network());
    }

    #[test]
    fn missing_input_message_names_the_field() {
        let e = AppError::MissingInput("base URL");
        assert_eq!(e.user_message(), "Please enter a valid base URL");
    }

    #[test]
    fn network_message_is_distinct_from_http() {
        let e = AppError::Network(curl::Error::new(7));
        assert!(e.is_network());
        assert!(e.user_message().starts_with("Connection error"));
        assert!(!e.user_message().contains("HTTP"));
    }

    #[test]
    fn shape_message() {
        let e = AppError::Shape("response must contain a \"data\" array".to_string());
        assert!(e.user_message().contains("\"data\" array"));
    }
}
