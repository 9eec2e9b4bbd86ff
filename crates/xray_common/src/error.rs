use thiserror::Error;

/// Failure talking to the anatomy REST API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection refused...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status code.
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON shape we expected.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Errors produced by [`OculusTextCodec`](crate::codec::OculusTextCodec).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("received an empty text frame")]
    EmptyFrame,
}

/// Rejected companion configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must start with one of {expected:?}, got `{value}`")]
    InvalidScheme {
        field: &'static str,
        expected: &'static [&'static str],
        value: String,
    },

    #[error("invalid configuration json: {0}")]
    Parse(String),
}

/// A `Set` message named a code that is not in the body-part table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown body part code `{0}`")]
pub struct UnknownPartCode(pub String);
