use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Resource;

/// A message submitted through the public contact page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Contact {
    #[serde(default)]
    pub id: i64,
    pub nom: String,
    pub email: String,
    pub sujet: String,
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Contact {
    const PATH: &'static str = "contacts";
    const NOUN: &'static str = "contact";

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.nom
    }
}
