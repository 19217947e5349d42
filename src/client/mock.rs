//! Mock resource API for isolating screen services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::client::ResourceApi;
use crate::client::errors::ClientResult;
use crate::domain::Resource;
use crate::forms::payload::Payload;

mock! {
    pub Api<T: Resource> {}

    #[async_trait]
    impl<T: Resource> ResourceApi<T> for Api<T> {
        async fn list(&self) -> ClientResult<Vec<T>>;
        async fn search(&self, query: &str) -> ClientResult<Vec<T>>;
        async fn get(&self, id: i64) -> ClientResult<T>;
        async fn create(&self, payload: Payload) -> ClientResult<T>;
        async fn update(&self, id: i64, payload: Payload) -> ClientResult<T>;
        async fn delete(&self, id: i64) -> ClientResult<()>;
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::mission::Mission;

    #[tokio::test]
    async fn mock_api_returns_programmed_list() {
        let mut api = MockApi::<Mission>::new();
        api.expect_list().returning(|| Ok(vec![Mission::default()]));

        let missions = api.list().await.unwrap();
        assert_eq!(missions.len(), 1);
    }
}
