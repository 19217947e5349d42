use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Resource;

/// A training course offered by the firm.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Formation {
    #[serde(default)]
    pub id: i64,
    pub nom: String,
    pub slug: String,
    pub description: String,
    /// Opaque display string, not a structured duration.
    #[serde(default)]
    pub duree: String,
    /// Opaque display string, not structured money.
    #[serde(default)]
    pub tarif: String,
    /// Image URL once persisted; empty until one is uploaded.
    #[serde(default)]
    pub image: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Formation {
    const PATH: &'static str = "formations";
    const NOUN: &'static str = "formation";

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.nom
    }
}
