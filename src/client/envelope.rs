//! Response envelope normalization.
//!
//! The backend is inconsistent about how it wraps payloads: most list
//! endpoints return `{"data": [...], "meta": ...}`, the contacts endpoint
//! nests a paginator (`{"data": {"data": [...], "meta": ...}}`), and item
//! endpoints return either `{"data": entity}` or the bare entity. Callers
//! of the client only ever see `Vec<T>` or `T`; the zoo of shapes stops
//! here.

use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NestedPage<T> {
    data: Vec<T>,
}

/// Every collection shape the backend has been observed to produce.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ListEnvelope<T> {
    Nested { data: NestedPage<T> },
    Flat { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            Self::Nested { data } => data.data,
            Self::Flat { data } => data,
            Self::Bare(items) => items,
        }
    }
}

/// Single-entity responses: wrapped in `data` or bare.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ItemEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ItemEnvelope<T> {
    pub(crate) fn into_item(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(item) => item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
        nom: String,
    }

    #[test]
    fn flat_list_with_meta() {
        let raw = r#"{"data":[{"id":1,"nom":"A"}],"meta":{"total":1}}"#;
        let envelope: ListEnvelope<Row> = serde_json::from_str(raw).unwrap();
        let items = envelope.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].nom, "A");
    }

    #[test]
    fn nested_paginator_list() {
        let raw = r#"{"success":true,"data":{"data":[{"id":1,"nom":"A"},{"id":2,"nom":"B"}],"meta":{"total":2}}}"#;
        let envelope: ListEnvelope<Row> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.into_items().len(), 2);
    }

    #[test]
    fn bare_array_list() {
        let raw = r#"[{"id":3,"nom":"C"}]"#;
        let envelope: ListEnvelope<Row> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.into_items()[0].id, 3);
    }

    #[test]
    fn wrapped_and_bare_items() {
        let wrapped = r#"{"data":{"id":1,"nom":"A"}}"#;
        let bare = r#"{"id":1,"nom":"A"}"#;

        let a: ItemEnvelope<Row> = serde_json::from_str(wrapped).unwrap();
        let b: ItemEnvelope<Row> = serde_json::from_str(bare).unwrap();

        assert_eq!(a.into_item(), b.into_item());
    }
}
