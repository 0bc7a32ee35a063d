use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    /// Base URL of the backend, e.g. `http://localhost:8000`.
    fn backend_origin(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}

/// The HTTP collaborator serving the showcase and contact endpoints.
#[async_trait]
pub trait Backend: Send + Sync {
    /// GET `<origin>/<path>` and return the body of a 2xx response.
    async fn get(&self, path: &str) -> Result<String>;

    /// POST `body` as JSON to `<origin>/<path>`; any 2xx is success.
    async fn post_json<T>(&self, path: &str, body: &T) -> Result<()>
    where
        T: Serialize + Sync;
}
