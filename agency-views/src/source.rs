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

//! The seam between view-models and the catalog backend.

use std::future::Future;

use agency_client::{ApiError, CatalogApiClient};
use agency_types::ResourceRequest;
use serde::de::DeserializeOwned;

/// Anything that can fetch a normalized catalog payload.
///
/// Implemented by [`CatalogApiClient`]; tests substitute scripted sources.
///
/// The request is taken by value so a fetch can be started before the
/// caller's borrow of it ends.
pub trait CatalogSource {
    fn fetch_resource<T: DeserializeOwned + Send>(
        &self,
        request: ResourceRequest,
    ) -> impl Future<Output = Result<Vec<T>, ApiError>> + Send;
}

impl CatalogSource for CatalogApiClient {
    fn fetch_resource<T: DeserializeOwned + Send>(
        &self,
        request: ResourceRequest,
    ) -> impl Future<Output = Result<Vec<T>, ApiError>> + Send {
        async move { self.fetch(&request).await }
    }
}
