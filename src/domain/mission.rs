use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Resource;

/// A completed audit mission listed as a reference.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Mission {
    #[serde(default)]
    pub id: i64,
    pub titre: String,
    pub description: String,
    /// Mission category; `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    /// Realization date as entered, kept opaque.
    pub date_realisation: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Mission {
    const PATH: &'static str = "missions";
    const NOUN: &'static str = "mission";

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.titre
    }
}
