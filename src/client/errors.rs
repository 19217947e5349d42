use thiserror::Error;

/// Failures surfaced by the resource client.
///
/// The backend is not trusted to return a useful error body, so non-2xx
/// responses collapse to their status code; user-facing wording is fixed
/// client-side by the screen services.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
