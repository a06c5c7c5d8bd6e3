// HTTP backend for external service data

use crate::ServiceDataSource;
use async_trait::async_trait;
use service_pages_core::{DataSourceConfig, Error, ExternalServiceData, Result};
use std::time::Duration;

/// Fetches `GET {endpoint}/{category}/{slug}`.
///
/// Expects a JSON body like `{"name": "...", "detailedDesc": "..."}`; both
/// fields are optional. One attempt per call, no retries.
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSource {
    pub fn new(config: &DataSourceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(fetch_error)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, category: &str, slug: &str) -> String {
        format!("{}/{}/{}", self.endpoint, category, slug)
    }
}

#[async_trait]
impl ServiceDataSource for HttpSource {
    async fn fetch(&self, category: &str, slug: &str) -> Result<ExternalServiceData> {
        let url = self.url(category, slug);
        let response = self.client.get(&url).send().await.map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ExternalFetch(format!("{} returned {}", url, status)));
        }

        response
            .json::<ExternalServiceData>()
            .await
            .map_err(fetch_error)
    }
}

fn fetch_error(err: reqwest::Error) -> Error {
    Error::ExternalFetch(err.to_string())
}
