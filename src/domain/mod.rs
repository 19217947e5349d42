use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod article;
pub mod contact;
pub mod formation;
pub mod mission;
pub mod offering;
pub mod partner;
pub mod session;

/// A persisted record of one back-office collection.
///
/// Implementors tie an entity struct to its REST collection path and
/// expose the identity and display name the screen machinery needs. A
/// draft that has not been persisted yet has no meaningful id; ids only
/// exist once the server has assigned them.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection segment under the API base URL (`/{PATH}`).
    const PATH: &'static str;

    /// Singular noun used in operator-facing messages.
    const NOUN: &'static str;

    /// Server-assigned identifier.
    fn id(&self) -> i64;

    /// Display name shown when confirming a destructive action.
    fn label(&self) -> &str;
}
