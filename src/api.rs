use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{
    CsvListing, CustomerAnalysis, CustomerRecommendations, HealthStatus, ImageListing,
    ProductAnalysis, ProductRecommendations, Summary, TemporalAnalysis, TransactionStats,
};

/// Number of recommendations requested when the caller does not ask for a
/// specific count.
pub const DEFAULT_TOP_N: u32 = 10;

/// Shareable client for the analytics backend.
///
/// One instance is constructed at the composition root and handed to every
/// view that needs it; cloning is cheap because the underlying HTTP client is
/// shared. All configuration is immutable after construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// Every request carries the default `Content-Type: application/json`
    /// header. The base URL comes normalized from [`Config`], so endpoint
    /// paths (which all begin with `/`) append without a double slash.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to construct HTTP client")?;

        tracing::info!("API client ready for backend at: {}", config.base_url);

        Ok(ApiClient {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL the client composes every request against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        decode_response(response).await
    }

    async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, u32)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {} (query: {:?})", url, query);

        let response = self.http.get(&url).query(query).send().await?;
        decode_response(response).await
    }

    /// Check that the backend is up and answering.
    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health").await
    }

    /// Executive summary with the headline KPIs.
    pub async fn summary(&self) -> Result<Summary, ApiError> {
        self.get_json("/analytics/summary").await
    }

    /// Daily, weekly, monthly and weekday sales series.
    pub async fn temporal_analysis(&self) -> Result<TemporalAnalysis, ApiError> {
        self.get_json("/analytics/temporal").await
    }

    /// RFM segmentation, purchase frequency and purchase cadence.
    pub async fn customer_analysis(&self) -> Result<CustomerAnalysis, ApiError> {
        self.get_json("/analytics/customers").await
    }

    /// Top products, co-occurrence and association rules.
    pub async fn product_analysis(&self) -> Result<ProductAnalysis, ApiError> {
        self.get_json("/analytics/products").await
    }

    /// Transaction-level statistics.
    pub async fn transaction_stats(&self) -> Result<TransactionStats, ApiError> {
        self.get_json("/analytics/transactions").await
    }

    /// Highest-value customers.
    ///
    /// The backend does not freeze this payload's shape, so it is returned as
    /// raw JSON for the view to interpret.
    pub async fn top_customers(&self) -> Result<JsonValue, ApiError> {
        self.get_json("/analytics/top-customers").await
    }

    /// Recommend products for one customer based on purchase history.
    ///
    /// # Arguments
    /// * `customer_id` - Customer identifier; interpolated into the path
    ///   verbatim, so callers must URL-encode values containing reserved
    ///   characters
    /// * `top_n` - Number of recommendations; `None` means [`DEFAULT_TOP_N`]
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not parse
    pub async fn recommendations_for_customer(
        &self,
        customer_id: &str,
        top_n: Option<u32>,
    ) -> Result<CustomerRecommendations, ApiError> {
        let path = format!("/recommendations/customer/{customer_id}");
        let top_n = top_n.unwrap_or(DEFAULT_TOP_N);

        self.get_json_with_query(&path, &[("top_n", top_n)]).await
    }

    /// Recommend products frequently bought together with one product.
    ///
    /// # Arguments
    /// * `product_id` - Product identifier; interpolated verbatim like
    ///   `customer_id` above
    /// * `top_n` - Number of recommendations; `None` means [`DEFAULT_TOP_N`]
    pub async fn recommendations_for_product(
        &self,
        product_id: &str,
        top_n: Option<u32>,
    ) -> Result<ProductRecommendations, ApiError> {
        let path = format!("/recommendations/product/{product_id}");
        let top_n = top_n.unwrap_or(DEFAULT_TOP_N);

        self.get_json_with_query(&path, &[("top_n", top_n)]).await
    }

    /// List the generated chart images.
    pub async fn list_images(&self) -> Result<ImageListing, ApiError> {
        self.get_json("/reports/images").await
    }

    /// List the generated CSV report files.
    pub async fn list_csv_files(&self) -> Result<CsvListing, ApiError> {
        self.get_json("/reports/csv").await
    }

    /// Absolute URL of a chart image, for direct `<img src>` use.
    ///
    /// Pure string composition; no request is issued. The filename is
    /// interpolated verbatim.
    pub fn image_url(&self, filename: &str) -> String {
        self.url(&format!("/reports/images/{filename}"))
    }

    /// Absolute download URL of a CSV report file.
    ///
    /// Pure string composition; no request is issued. The filename is
    /// interpolated verbatim.
    pub fn csv_download_url(&self, filename: &str) -> String {
        self.url(&format!("/reports/csv/{filename}"))
    }
}

/// Map a completed HTTP exchange onto the client's error contract: non-2xx
/// becomes [`ApiError::Transport`] with the raw body attached, and a 2xx body
/// that does not parse becomes [`ApiError::Decode`].
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::Transport { status, body });
    }

    Ok(serde_json::from_str(&body)?)
}
