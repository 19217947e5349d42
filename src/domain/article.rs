use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Resource;

/// A blog article, optionally carrying an English translation and SEO
/// metadata.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Article {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub titre: String,
    pub titre_en: Option<String>,
    pub contenu: String,
    pub contenu_en: Option<String>,
    pub meta_titre: Option<String>,
    pub meta_description: Option<String>,
    pub slug: String,
    pub image: Option<String>,
    /// Publication date as entered, kept opaque.
    pub date_publication: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Article {
    const PATH: &'static str = "article-blogs";
    const NOUN: &'static str = "article";

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.titre
    }
}
