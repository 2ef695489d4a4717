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

//! Shared API types for the agency site catalog backend.
//!
//! This crate defines the API contract between the catalog backend and its
//! consumers (the REST client, the view layer, integration tests).
//! It is intentionally framework-agnostic: no HTTP client, no UI types.

pub mod catalog;
pub mod requests;
pub mod resource;
pub mod responses;

pub use catalog::{Blog, Career, CaseStudy, CatalogItem, Portfolio, Product, Service};
pub use resource::{Resource, ResourceRequest};
pub use responses::{ApiResponse, OneOrMany};
