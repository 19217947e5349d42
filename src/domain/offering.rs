use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Resource;

/// An audit or advisory service sold by the firm.
///
/// Named `Offering` rather than `Service` to keep it distinct from the
/// crate's services layer; the wire collection is still `/services`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Offering {
    #[serde(default)]
    pub id: i64,
    pub nom: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub categorie: String,
    #[serde(default)]
    pub tarif: String,
    #[serde(default)]
    pub duree: String,
    #[serde(default)]
    pub image: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Offering {
    const PATH: &'static str = "services";
    const NOUN: &'static str = "service";

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.nom
    }
}
