use validator::Validate;

use crate::forms::payload::{ImageAttachment, Payload};
use crate::forms::{EntityForm, FormError};

/// Draft state behind the service create/edit modal.
#[derive(Clone, Debug, Default, Validate)]
pub struct OfferingForm {
    #[validate(length(min = 1))]
    pub nom: String,
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub categorie: String,
    pub tarif: String,
    pub duree: String,
    pub image: Option<ImageAttachment>,
}

impl EntityForm for OfferingForm {
    fn into_payload(self, max_image_bytes: usize) -> Result<Payload, FormError> {
        self.validate()?;

        let mut payload = Payload::new()
            .text("nom", self.nom)
            .text("slug", self.slug)
            .text("description", self.description)
            .text("categorie", self.categorie)
            .text("tarif", self.tarif)
            .text("duree", self.duree);
        if let Some(image) = self.image {
            payload = payload.image(image, max_image_bytes)?;
        }
        Ok(payload)
    }
}
