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

//! Named catalog endpoints, one pair per collection.

use agency_types::{Blog, Career, CaseStudy, Portfolio, Product, Service};

use crate::error::ApiError;
use crate::CatalogApiClient;

impl CatalogApiClient {
    /// Calls `GET /blogs`.
    pub async fn get_blogs(&self) -> Result<Vec<Blog>, ApiError> {
        self.list().await
    }

    /// Calls `GET /blogs/{id}`.
    pub async fn get_blog_by_id(&self, id: &str) -> Result<Blog, ApiError> {
        self.get(id).await
    }

    /// Calls `GET /portfolio`.
    pub async fn get_portfolios(&self) -> Result<Vec<Portfolio>, ApiError> {
        self.list().await
    }

    /// Calls `GET /portfolio/{id}`.
    pub async fn get_portfolio_by_id(&self, id: &str) -> Result<Portfolio, ApiError> {
        self.get(id).await
    }

    /// Calls `GET /products`.
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        self.list().await
    }

    /// Calls `GET /products/{id}`.
    pub async fn get_product_by_id(&self, id: &str) -> Result<Product, ApiError> {
        self.get(id).await
    }

    /// Calls `GET /services`.
    pub async fn get_services(&self) -> Result<Vec<Service>, ApiError> {
        self.list().await
    }

    /// Calls `GET /services/{id}`.
    pub async fn get_service_by_id(&self, id: &str) -> Result<Service, ApiError> {
        self.get(id).await
    }

    /// Calls `GET /case-studies`.
    pub async fn get_case_studies(&self) -> Result<Vec<CaseStudy>, ApiError> {
        self.list().await
    }

    /// Calls `GET /case-studies/{id}`.
    pub async fn get_case_study_by_id(&self, id: &str) -> Result<CaseStudy, ApiError> {
        self.get(id).await
    }

    /// Calls `GET /careers`.
    pub async fn get_careers(&self) -> Result<Vec<Career>, ApiError> {
        self.list().await
    }

    /// Calls `GET /careers/{id}`.
    pub async fn get_career_by_id(&self, id: &str) -> Result<Career, ApiError> {
        self.get(id).await
    }
}
