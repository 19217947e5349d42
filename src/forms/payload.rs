//! Multipart payload assembly shared by every entity form.

use reqwest::multipart::{Form, Part};

use crate::forms::FormError;

/// A locally selected image waiting to be uploaded.
///
/// Client-side an attachment is a file name plus raw bytes; only after
/// persistence does the entity carry an image URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Ordered text fields plus at most one image, ready to be sent as
/// `multipart/form-data`.
///
/// Empty values are omitted entirely rather than transmitted as empty
/// strings: the backend treats an absent field and an untouched field the
/// same way, and an explicit `""` would overwrite stored data. The rule
/// lives here, in one tested place, instead of being re-implemented per
/// form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Payload {
    fields: Vec<(&'static str, String)>,
    image: Option<ImageAttachment>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field, dropping blank values.
    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.fields.push((name, value));
        }
        self
    }

    /// Appends an optional text field; `None` and blank both vanish.
    pub fn optional(self, name: &'static str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    /// Appends a numeric field. Zero is treated as "not provided" and
    /// omitted, matching the empty-string rule for text fields.
    pub fn number(mut self, name: &'static str, value: i64) -> Self {
        if value != 0 {
            self.fields.push((name, value.to_string()));
        }
        self
    }

    /// Attaches the image, rejecting it when it exceeds `max_bytes`.
    pub fn image(
        mut self,
        attachment: ImageAttachment,
        max_bytes: usize,
    ) -> Result<Self, FormError> {
        if attachment.bytes.len() > max_bytes {
            return Err(FormError::ImageTooLarge {
                size: attachment.bytes.len(),
                limit: max_bytes,
            });
        }
        self.image = Some(attachment);
        Ok(self)
    }

    /// Transmitted fields, in insertion order.
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// Value of a single field, when present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Builds the wire form. Consumes the payload; the draft it came from
    /// stays with the caller.
    pub fn into_form(self) -> Form {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        if let Some(image) = self.image {
            form = form.part("image", Part::bytes(image.bytes).file_name(image.file_name));
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_omitted() {
        let payload = Payload::new()
            .text("nom", "Audit interne")
            .text("slug", "")
            .text("description", "   ");

        assert_eq!(payload.fields().len(), 1);
        assert_eq!(payload.field("nom"), Some("Audit interne"));
        assert_eq!(payload.field("slug"), None);
        assert_eq!(payload.field("description"), None);
    }

    #[test]
    fn none_and_blank_optionals_are_equivalent() {
        let a = Payload::new().optional("tarif", None);
        let b = Payload::new().optional("tarif", Some(String::new()));
        assert_eq!(a, b);
        assert!(a.fields().is_empty());
    }

    #[test]
    fn zero_numbers_are_omitted() {
        let payload = Payload::new().number("user_id", 0).number("rang", 3);
        assert_eq!(payload.field("user_id"), None);
        assert_eq!(payload.field("rang"), Some("3"));
    }

    #[test]
    fn oversized_image_is_rejected() {
        let attachment = ImageAttachment::new("large.png", vec![0u8; 11]);
        let err = Payload::new().image(attachment, 10).unwrap_err();
        assert!(matches!(
            err,
            FormError::ImageTooLarge {
                size: 11,
                limit: 10
            }
        ));
    }

    #[test]
    fn image_at_the_cap_is_accepted() {
        let attachment = ImageAttachment::new("ok.png", vec![0u8; 10]);
        let payload = Payload::new().image(attachment, 10).unwrap();
        assert!(payload.has_image());
    }

    #[test]
    fn field_order_is_preserved() {
        let payload = Payload::new().text("b", "2").text("a", "1").text("c", "3");
        let names: Vec<&str> = payload.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }
}
