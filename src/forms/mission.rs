use validator::Validate;

use crate::forms::payload::Payload;
use crate::forms::{EntityForm, FormError};

/// Draft state behind the mission create/edit modal.
#[derive(Clone, Debug, Default, Validate)]
pub struct MissionForm {
    #[validate(length(min = 1))]
    pub titre: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub kind: String,
    pub date_realisation: Option<String>,
}

impl EntityForm for MissionForm {
    fn into_payload(self, _max_image_bytes: usize) -> Result<Payload, FormError> {
        self.validate()?;

        Ok(Payload::new()
            .text("titre", self.titre)
            .text("description", self.description)
            .text("type", self.kind)
            .optional("date_realisation", self.date_realisation))
    }
}
