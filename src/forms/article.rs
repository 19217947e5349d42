use validator::Validate;

use crate::forms::payload::{ImageAttachment, Payload};
use crate::forms::{EntityForm, FormError};

/// Draft state behind the blog article create/edit modal.
#[derive(Clone, Debug, Default, Validate)]
pub struct ArticleForm {
    /// Author id; zero means "not provided" and is omitted from the
    /// payload.
    pub user_id: i64,
    #[validate(length(min = 1))]
    pub titre: String,
    pub titre_en: Option<String>,
    #[validate(length(min = 1))]
    pub contenu: String,
    pub contenu_en: Option<String>,
    pub meta_titre: Option<String>,
    pub meta_description: Option<String>,
    #[validate(length(min = 1))]
    pub slug: String,
    pub date_publication: Option<String>,
    pub image: Option<ImageAttachment>,
}

impl EntityForm for ArticleForm {
    fn into_payload(self, max_image_bytes: usize) -> Result<Payload, FormError> {
        self.validate()?;

        let mut payload = Payload::new()
            .number("user_id", self.user_id)
            .text("titre", self.titre)
            .optional("titre_en", self.titre_en)
            .text("contenu", self.contenu)
            .optional("contenu_en", self.contenu_en)
            .optional("meta_titre", self.meta_titre)
            .optional("meta_description", self.meta_description)
            .text("slug", self.slug)
            .optional("date_publication", self.date_publication);
        if let Some(image) = self.image {
            payload = payload.image(image, max_image_bytes)?;
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_author_id_is_absent_from_the_wire() {
        let form = ArticleForm {
            titre: "Nouvelle norme ISA".to_string(),
            contenu: "Texte de l'article.".to_string(),
            slug: "nouvelle-norme-isa".to_string(),
            ..ArticleForm::default()
        };
        let payload = form.into_payload(crate::MAX_IMAGE_BYTES).unwrap();
        assert_eq!(payload.field("user_id"), None);
        assert_eq!(payload.field("titre"), Some("Nouvelle norme ISA"));
    }
}
