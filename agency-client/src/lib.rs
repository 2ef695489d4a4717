/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! REST client for the agency site catalog API.
//!
//! Works on any target [`reqwest`] supports.
//!
//! # Example
//!
//! ```no_run
//! use agency_client::CatalogApiClient;
//!
//! # async fn example() -> Result<(), agency_client::ApiError> {
//! let client = CatalogApiClient::new("http://localhost:5000/api/v1");
//!
//! for blog in client.get_blogs().await? {
//!     println!("{}", blog.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;

pub use agency_types;
pub use config::SiteConfig;
pub use error::ApiError;
pub use forms::{FormSubmissionClient, SubmissionReceipt};

use agency_types::responses::{ErrorBody, OneOrMany};
use agency_types::{ApiResponse, CatalogItem, ResourceRequest};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// A typed REST client for the catalog API.
///
/// Every method unwraps the [`ApiResponse`] envelope and maps failures to
/// [`ApiError`]. The base URL is fixed at construction.
#[derive(Debug, Clone)]
pub struct CatalogApiClient {
    base_url: String,
    http: Client,
}

impl CatalogApiClient {
    /// Create a new client pointing at the given API base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:5000/api/v1"`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a collection or a single item, normalized to a sequence.
    ///
    /// Calls `GET {base}/{resource}` or `GET {base}/{resource}/{id}`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        request: &ResourceRequest,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.url(&request.path());
        log::debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        parse_envelope(response).await
    }

    /// Fetch every item of `T`'s collection.
    pub async fn list<T: CatalogItem + DeserializeOwned>(&self) -> Result<Vec<T>, ApiError> {
        self.fetch(&ResourceRequest::list(T::RESOURCE)).await
    }

    /// Fetch a single item of `T`'s collection by id.
    pub async fn get<T: CatalogItem + DeserializeOwned>(&self, id: &str) -> Result<T, ApiError> {
        self.fetch(&ResourceRequest::item(T::RESOURCE, id))
            .await?
            .into_iter()
            .next()
            .ok_or(ApiError::EmptyPayload)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Parse an [`ApiResponse`] body into its normalized payload.
///
/// The `success` flag is checked before `data` is decoded because failed
/// responses usually carry `data: null`.
pub(crate) async fn parse_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Vec<T>, ApiError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
        log::warn!("catalog request failed with status {status}");
        return Err(ApiError::ServerError {
            status: status.as_u16(),
            message: body.message.filter(|m| !m.is_empty()),
        });
    }

    let head: ErrorBody = serde_json::from_str(&text)?;
    if !head.success {
        return Err(ApiError::Rejected {
            message: head.message.filter(|m| !m.is_empty()),
        });
    }

    let envelope: ApiResponse<OneOrMany<T>> = serde_json::from_str(&text)?;
    Ok(envelope.data.into_vec())
}
