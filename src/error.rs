//! Error taxonomy for the API gateway client.
//!
//! Three failure classes reach the UI: transport failures (no response at
//! all), API failures (a non-2xx response carrying a message), and decode
//! failures (a 2xx response whose body does not parse). Client-side
//! validation failures never become an `ApiError`; they are caught before any
//! network call is made.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection reset).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("request failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// The server answered 2xx but the body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request could not be assembled (bad body, FormData failure).
    #[error("failed to build request: {0}")]
    Request(String),
}
