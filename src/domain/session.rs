//! Admin identity rendered in the back-office chrome.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile shown in the topbar (name, role, avatar URL).
///
/// The stored blob is untrusted: every field degrades independently to a
/// placeholder when missing, blank or of the wrong type. A malformed
/// profile never prevents the back-office from rendering.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminProfile {
    pub name: String,
    pub role: String,
    pub avatar: String,
}

impl Default for AdminProfile {
    fn default() -> Self {
        Self {
            name: "Admin".to_string(),
            role: "Administrateur".to_string(),
            avatar: String::new(),
        }
    }
}

impl AdminProfile {
    /// Parses the persisted profile blob, falling back field by field.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let fallback = Self::default();

        let Some(raw) = raw else {
            return fallback;
        };
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            return fallback;
        };
        if !value.is_object() {
            return fallback;
        }

        Self {
            name: string_field(&value, "name").unwrap_or(fallback.name),
            role: string_field(&value, "role").unwrap_or(fallback.role),
            avatar: string_field(&value, "avatar").unwrap_or(fallback.avatar),
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_blob_yields_placeholders() {
        let profile = AdminProfile::from_stored(None);
        assert_eq!(profile.name, "Admin");
        assert_eq!(profile.role, "Administrateur");
        assert!(profile.avatar.is_empty());
    }

    #[test]
    fn malformed_json_yields_placeholders() {
        let profile = AdminProfile::from_stored(Some("{not json"));
        assert_eq!(profile, AdminProfile::default());
    }

    #[test]
    fn non_object_json_yields_placeholders() {
        let profile = AdminProfile::from_stored(Some("\"just a string\""));
        assert_eq!(profile, AdminProfile::default());
    }

    #[test]
    fn fields_degrade_independently() {
        let profile =
            AdminProfile::from_stored(Some(r#"{"name":"Awa D.","role":"  ","avatar":42}"#));
        assert_eq!(profile.name, "Awa D.");
        assert_eq!(profile.role, "Administrateur");
        assert!(profile.avatar.is_empty());
    }

    #[test]
    fn complete_profile_is_kept() {
        let raw = r#"{"name":"Awa D.","role":"Gérante","avatar":"https://cdn.example/a.png"}"#;
        let profile = AdminProfile::from_stored(Some(raw));
        assert_eq!(profile.name, "Awa D.");
        assert_eq!(profile.role, "Gérante");
        assert_eq!(profile.avatar, "https://cdn.example/a.png");
    }
}
