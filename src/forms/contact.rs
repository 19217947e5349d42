use validator::Validate;

use crate::forms::payload::Payload;
use crate::forms::{EntityForm, FormError};

/// Draft state behind the contact create/edit modal. Contacts carry no
/// image; the payload is text-only.
#[derive(Clone, Debug, Default, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1))]
    pub nom: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub sujet: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl EntityForm for ContactForm {
    fn into_payload(self, _max_image_bytes: usize) -> Result<Payload, FormError> {
        self.validate()?;

        Ok(Payload::new()
            .text("nom", self.nom)
            .text("email", self.email)
            .text("sujet", self.sujet)
            .text("message", self.message))
    }
}
