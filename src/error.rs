// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Failures talking to the camera API.
/// The GUI collapses these into generic text; the variants feed logs and the
/// headless helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connection, timeout).
    Transport(String),

    /// The server rejected the `x-api-key` header (401/403).
    Unauthorized,

    /// Any other non-2xx status, with the server's `error`/`detail` text if present.
    Status { code: u16, detail: Option<String> },

    /// The response body was not the JSON shape we expected.
    Decode(String),

    /// A request was refused before being sent (e.g. empty upload).
    InvalidRequest(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "error-api-transport",
            ApiError::Unauthorized => "error-api-unauthorized",
            ApiError::Status { .. } => "error-api-status",
            ApiError::Decode(_) => "error-api-decode",
            ApiError::InvalidRequest(_) => "error-api-invalid-request",
        }
    }

    /// Maps an HTTP status code and optional response detail to an error.
    pub fn from_status(code: u16, detail: Option<String>) -> Self {
        match code {
            401 | 403 => ApiError::Unauthorized,
            _ => ApiError::Status { code, detail },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Unauthorized => write!(f, "API key rejected"),
            ApiError::Status { code, detail: Some(detail) } => {
                write!(f, "HTTP status {}: {}", code, detail)
            }
            ApiError::Status { code, detail: None } => write!(f, "HTTP status {}", code),
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn forbidden_and_unauthorized_collapse_to_unauthorized() {
        assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(403, Some("Could not validate credentials".into())),
            ApiError::Unauthorized
        );
    }

    #[test]
    fn other_statuses_keep_code_and_detail() {
        let err = ApiError::from_status(500, Some("db down".into()));
        assert_eq!(
            err,
            ApiError::Status {
                code: 500,
                detail: Some("db down".into())
            }
        );
        assert_eq!(format!("{}", err), "HTTP status 500: db down");
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn api_error_i18n_keys() {
        assert_eq!(ApiError::Unauthorized.i18n_key(), "error-api-unauthorized");
        assert_eq!(
            ApiError::Transport("refused".into()).i18n_key(),
            "error-api-transport"
        );
        assert_eq!(
            ApiError::Status {
                code: 502,
                detail: None
            }
            .i18n_key(),
            "error-api-status"
        );
    }

    #[test]
    fn api_error_wraps_into_crate_error() {
        let err: Error = ApiError::Unauthorized.into();
        assert_eq!(format!("{}", err), "API Error: API key rejected");
    }
}
