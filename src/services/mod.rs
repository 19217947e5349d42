pub mod deletion;
pub mod listing;
pub mod notify;
pub mod screen;
pub mod search;
pub mod session;

use thiserror::Error;

use crate::client::errors::ClientError;
use crate::forms::FormError;

/// Errors surfaced by screen services. Every variant has already been
/// reported through the notification channel by the time the caller sees
/// it; propagating is for logging and exit codes, not user feedback.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Form(#[from] FormError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
