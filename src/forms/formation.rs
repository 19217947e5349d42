use validator::Validate;

use crate::forms::payload::{ImageAttachment, Payload};
use crate::forms::{EntityForm, FormError};

/// Draft state behind the formation create/edit modal.
#[derive(Clone, Debug, Default, Validate)]
pub struct FormationForm {
    #[validate(length(min = 1))]
    pub nom: String,
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub duree: String,
    pub tarif: String,
    pub image: Option<ImageAttachment>,
}

impl EntityForm for FormationForm {
    fn into_payload(self, max_image_bytes: usize) -> Result<Payload, FormError> {
        self.validate()?;

        let mut payload = Payload::new()
            .text("nom", self.nom)
            .text("slug", self.slug)
            .text("description", self.description)
            .text("duree", self.duree)
            .text("tarif", self.tarif);
        if let Some(image) = self.image {
            payload = payload.image(image, max_image_bytes)?;
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> FormationForm {
        FormationForm {
            nom: "Audit qualité".to_string(),
            slug: "audit-qualite".to_string(),
            description: "Trois jours de formation.".to_string(),
            ..FormationForm::default()
        }
    }

    #[test]
    fn optional_display_fields_vanish_when_blank() {
        let payload = draft().into_payload(crate::MAX_IMAGE_BYTES).unwrap();
        assert_eq!(payload.field("nom"), Some("Audit qualité"));
        assert_eq!(payload.field("duree"), None);
        assert_eq!(payload.field("tarif"), None);
        assert!(!payload.has_image());
    }

    #[test]
    fn missing_required_field_never_builds_a_payload() {
        let form = FormationForm {
            nom: String::new(),
            ..draft()
        };
        assert!(matches!(
            form.into_payload(crate::MAX_IMAGE_BYTES),
            Err(FormError::Invalid(_))
        ));
    }

    #[test]
    fn image_cap_applies_here_too() {
        let form = FormationForm {
            image: Some(ImageAttachment::new("big.png", vec![0u8; 64])),
            ..draft()
        };
        assert!(matches!(
            form.into_payload(32),
            Err(FormError::ImageTooLarge { .. })
        ));
    }
}
