//! Typed CRUD client for the back-office REST API.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::Resource;
use crate::forms::payload::Payload;

mod envelope;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

use envelope::{ItemEnvelope, ListEnvelope};
use errors::{ClientError, ClientResult};

/// Default per-request deadline. A hung request must never leave a screen
/// in a perpetual loading state.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// CRUD seam between the screen services and the HTTP transport.
///
/// `search` performs a literal server-side call regardless of query
/// emptiness; special-casing a blank query (restore the cached base
/// collection instead of refetching) is the caller's responsibility.
#[async_trait]
pub trait ResourceApi<T: Resource>: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<T>>;
    async fn search(&self, query: &str) -> ClientResult<Vec<T>>;
    async fn get(&self, id: i64) -> ClientResult<T>;
    async fn create(&self, payload: Payload) -> ClientResult<T>;
    async fn update(&self, id: i64, payload: Payload) -> ClientResult<T>;
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// reqwest-backed [`ResourceApi`] for one collection.
///
/// All methods fail fast: no retries, one attempt per user action.
pub struct RestClient<T: Resource> {
    http: reqwest::Client,
    base_url: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> RestClient<T> {
    /// Builds a client rooted at `base_url` with an explicit request
    /// timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            _marker: PhantomData,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, T::PATH)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    async fn parse_list(resp: reqwest::Response) -> ClientResult<Vec<T>> {
        let resp = check_status(resp)?;
        let envelope = resp
            .json::<ListEnvelope<T>>()
            .await
            .map_err(|err| ClientError::Decode(err.to_string()))?;
        Ok(envelope.into_items())
    }

    async fn parse_item(resp: reqwest::Response) -> ClientResult<T> {
        let resp = check_status(resp)?;
        let envelope = resp
            .json::<ItemEnvelope<T>>()
            .await
            .map_err(|err| ClientError::Decode(err.to_string()))?;
        Ok(envelope.into_item())
    }
}

fn check_status(resp: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
        });
    }
    Ok(resp)
}

#[async_trait]
impl<T: Resource> ResourceApi<T> for RestClient<T> {
    async fn list(&self) -> ClientResult<Vec<T>> {
        let resp = self.http.get(self.collection_url()).send().await?;
        Self::parse_list(resp).await
    }

    async fn search(&self, query: &str) -> ClientResult<Vec<T>> {
        let resp = self
            .http
            .get(self.collection_url())
            .query(&[("search", query)])
            .send()
            .await?;
        Self::parse_list(resp).await
    }

    async fn get(&self, id: i64) -> ClientResult<T> {
        let resp = self.http.get(self.item_url(id)).send().await?;
        Self::parse_item(resp).await
    }

    async fn create(&self, payload: Payload) -> ClientResult<T> {
        let resp = self
            .http
            .post(self.collection_url())
            .multipart(payload.into_form())
            .send()
            .await?;
        Self::parse_item(resp).await
    }

    // The backend accepts multipart updates only via POST to the
    // id-suffixed endpoint, not PUT.
    async fn update(&self, id: i64, payload: Payload) -> ClientResult<T> {
        let resp = self
            .http
            .post(self.item_url(id))
            .multipart(payload.into_form())
            .send()
            .await?;
        Self::parse_item(resp).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        let resp = self.http.delete(self.item_url(id)).send().await?;
        check_status(resp)?;
        Ok(())
    }
}
