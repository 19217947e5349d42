use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Resource;

/// A partner organization shown on the public site.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Partner {
    #[serde(default)]
    pub id: i64,
    pub nom: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Partner {
    const PATH: &'static str = "partenaires";
    const NOUN: &'static str = "partenaire";

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.nom
    }
}
