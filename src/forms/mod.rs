//! Draft forms backing the create/edit modals, one per entity.
//!
//! Each form owns the operator's input until submission succeeds; the
//! screen engine discards nothing on failure, so a rejected draft stays
//! editable.

use thiserror::Error;

pub mod article;
pub mod contact;
pub mod formation;
pub mod mission;
pub mod offering;
pub mod partner;
pub mod payload;

use payload::Payload;

/// Client-side rejections raised before any network call.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("form validation failed: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("image of {size} bytes exceeds the {limit} byte limit")]
    ImageTooLarge { size: usize, limit: usize },
}

/// Converts a validated draft into its multipart payload.
pub trait EntityForm: Send {
    /// Validates the draft and assembles the payload, enforcing the
    /// image size cap uniformly for every entity.
    fn into_payload(self, max_image_bytes: usize) -> Result<Payload, FormError>;
}
