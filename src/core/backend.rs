use crate::core::{Backend, ConfigProvider};
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// `Backend` over HTTP with a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    origin: String,
    client: Client,
}

impl HttpBackend {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            origin: config.backend_origin().trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.origin, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn get(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            return Err(PortfolioError::Status {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    async fn post_json<T>(&self, path: &str, body: &T) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let url = self.url_for(path);
        tracing::debug!("POST {}", url);

        // `.json()` also sets `Content-Type: application/json`.
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        tracing::debug!("POST {} -> {}", url, status);

        if !status.is_success() {
            return Err(PortfolioError::Status {
                url,
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
