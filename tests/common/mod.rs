//! Shared in-memory resource API standing in for the REST backend.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;

use cabinet_admin::client::ResourceApi;
use cabinet_admin::client::errors::{ClientError, ClientResult};
use cabinet_admin::domain::formation::Formation;
use cabinet_admin::forms::payload::Payload;

pub fn formation(id: i64, nom: &str) -> Formation {
    Formation {
        id,
        nom: nom.to_string(),
        slug: nom.to_lowercase(),
        description: format!("Description de {nom}"),
        ..Formation::default()
    }
}

/// Backend double: serves from an in-memory collection, filters searches
/// by substring on `nom`, and can be told to fail any operation.
#[derive(Default)]
pub struct FakeApi {
    items: Mutex<Vec<Formation>>,
    next_id: AtomicI64,
    pub fail_list: AtomicBool,
    pub fail_search: AtomicBool,
    pub fail_save: AtomicBool,
    pub fail_delete: AtomicBool,
    pub list_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub payloads: Mutex<Vec<Payload>>,
}

impl FakeApi {
    pub fn with_items(items: Vec<Formation>) -> Self {
        let next_id = items.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let api = Self::default();
        *api.items.lock().unwrap() = items;
        api.next_id.store(next_id, Ordering::SeqCst);
        api
    }

    pub fn snapshot(&self) -> Vec<Formation> {
        self.items.lock().unwrap().clone()
    }

    fn failing(flag: &AtomicBool) -> ClientResult<()> {
        if flag.load(Ordering::SeqCst) {
            Err(ClientError::Status { status: 500 })
        } else {
            Ok(())
        }
    }

    fn from_payload(&self, id: i64, payload: &Payload) -> Formation {
        Formation {
            id,
            nom: payload.field("nom").unwrap_or_default().to_string(),
            slug: payload.field("slug").unwrap_or_default().to_string(),
            description: payload.field("description").unwrap_or_default().to_string(),
            duree: payload.field("duree").unwrap_or_default().to_string(),
            tarif: payload.field("tarif").unwrap_or_default().to_string(),
            ..Formation::default()
        }
    }
}

#[async_trait]
impl ResourceApi<Formation> for FakeApi {
    async fn list(&self) -> ClientResult<Vec<Formation>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Self::failing(&self.fail_list)?;
        Ok(self.snapshot())
    }

    async fn search(&self, query: &str) -> ClientResult<Vec<Formation>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Self::failing(&self.fail_search)?;
        let needle = query.to_lowercase();
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|f| f.nom.to_lowercase().contains(&needle))
            .collect())
    }

    async fn get(&self, id: i64) -> ClientResult<Formation> {
        self.snapshot()
            .into_iter()
            .find(|f| f.id == id)
            .ok_or(ClientError::Status { status: 404 })
    }

    async fn create(&self, payload: Payload) -> ClientResult<Formation> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Self::failing(&self.fail_save)?;
        let created = self.from_payload(self.next_id.fetch_add(1, Ordering::SeqCst), &payload);
        self.payloads.lock().unwrap().push(payload);
        self.items.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, payload: Payload) -> ClientResult<Formation> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        Self::failing(&self.fail_save)?;
        let updated = self.from_payload(id, &payload);
        self.payloads.lock().unwrap().push(payload);
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|f| f.id == id) {
            Some(slot) => {
                *slot = updated.clone();
                Ok(updated)
            }
            None => Err(ClientError::Status { status: 404 }),
        }
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        Self::failing(&self.fail_delete)?;
        let mut items = self.items.lock().unwrap();
        if !items.iter().any(|f| f.id == id) {
            return Err(ClientError::Status { status: 404 });
        }
        items.retain(|f| f.id != id);
        Ok(())
    }
}
