//! HTTP transport for the dashboard backend.
//!
//! The backend is consumed behind the `Backend` trait so the event loop does
//! not care where responses come from. Methods return boxed futures for
//! dyn-compatibility.

use std::future::Future;
use std::pin::Pin;

use catalog::{District, Region};
use metrics::MetricsSnapshot;
use protocol::{ApiError, NearestRegion};

/// Type alias for a boxed future that can be sent between threads.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Remote collaborator serving the four dashboard endpoints.
pub trait Backend: Send + Sync {
    fn states(&self) -> BoxFuture<'_, Result<Vec<Region>, ApiError>>;

    fn districts(&self, state_id: &str) -> BoxFuture<'_, Result<Vec<District>, ApiError>>;

    fn metrics(
        &self,
        state_id: &str,
        district_name: &str,
    ) -> BoxFuture<'_, Result<MetricsSnapshot, ApiError>>;

    fn nearest_district(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> BoxFuture<'_, Result<NearestRegion, ApiError>>;
}

pub struct HttpBackend {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| ApiError::Http(e.to_string()))?;
        resp.text().await.map_err(|e| ApiError::Http(e.to_string()))
    }
}

impl Backend for HttpBackend {
    fn states(&self) -> BoxFuture<'_, Result<Vec<Region>, ApiError>> {
        Box::pin(async move {
            let body = self.get_text("/api/states", &[]).await?;
            protocol::parse_states(&body)
        })
    }

    fn districts(&self, state_id: &str) -> BoxFuture<'_, Result<Vec<District>, ApiError>> {
        let state_id = state_id.to_string();
        Box::pin(async move {
            let body = self
                .get_text("/api/districts", &[("state", state_id)])
                .await?;
            protocol::parse_districts(&body)
        })
    }

    fn metrics(
        &self,
        state_id: &str,
        district_name: &str,
    ) -> BoxFuture<'_, Result<MetricsSnapshot, ApiError>> {
        let query = vec![
            ("state", state_id.to_string()),
            ("district", district_name.to_string()),
        ];
        Box::pin(async move {
            let body = self.get_text("/api/mnrega", &query).await?;
            protocol::parse_metrics(&body)
        })
    }

    fn nearest_district(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> BoxFuture<'_, Result<NearestRegion, ApiError>> {
        Box::pin(async move {
            let body = self
                .get_text(
                    "/api/nearest-district",
                    &[("lat", latitude.to_string()), ("lon", longitude.to_string())],
                )
                .await?;
            protocol::parse_nearest(&body)
        })
    }
}
