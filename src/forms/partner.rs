use validator::Validate;

use crate::forms::payload::{ImageAttachment, Payload};
use crate::forms::{EntityForm, FormError};

/// Draft state behind the partner create/edit modal.
#[derive(Clone, Debug, Default, Validate)]
pub struct PartnerForm {
    #[validate(length(min = 1))]
    pub nom: String,
    pub description: Option<String>,
    pub image: Option<ImageAttachment>,
}

impl EntityForm for PartnerForm {
    fn into_payload(self, max_image_bytes: usize) -> Result<Payload, FormError> {
        self.validate()?;

        let mut payload = Payload::new()
            .text("nom", self.nom)
            .optional("description", self.description);
        if let Some(image) = self.image {
            payload = payload.image(image, max_image_bytes)?;
        }
        Ok(payload)
    }
}
