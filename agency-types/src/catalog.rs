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

//! Catalog entities returned by the backend.
//!
//! All six entities share the same rough shape (identifier, title, category
//! labels, descriptive text, image, timestamp), which [`CatalogItem`] exposes
//! uniformly so the view layer can filter any of them.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// Uniform read access over every catalog entity.
pub trait CatalogItem {
    /// Collection this item type is served from.
    const RESOURCE: Resource;

    fn id(&self) -> &str;
    fn title(&self) -> &str;
    /// Free text searched alongside the title.
    fn body(&self) -> &str;
    /// Category labels used by category filters. May be empty.
    fn categories(&self) -> &[String];
    fn image(&self) -> Option<&str>;
    fn created_at(&self) -> &str;
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub reading_time: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub technology: Vec<String>,
    #[serde(default)]
    pub active_users: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub live_link: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub pricing: f64,
    #[serde(default)]
    pub demo_link: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Icon key, see the view layer's icon lookup.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    #[serde(rename = "_id")]
    pub id: String,
    pub job_title: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub application_email: String,
    #[serde(default)]
    pub created_at: String,
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

impl CatalogItem for Blog {
    const RESOURCE: Resource = Resource::Blogs;

    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn body(&self) -> &str {
        &self.details
    }
    fn categories(&self) -> &[String] {
        &self.tags
    }
    fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl CatalogItem for Portfolio {
    const RESOURCE: Resource = Resource::Portfolio;

    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn body(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
    fn categories(&self) -> &[String] {
        std::slice::from_ref(&self.category)
    }
    fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl CatalogItem for Product {
    const RESOURCE: Resource = Resource::Products;

    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.name
    }
    fn body(&self) -> &str {
        &self.description
    }
    fn categories(&self) -> &[String] {
        std::slice::from_ref(&self.category)
    }
    fn image(&self) -> Option<&str> {
        self.images.first().map(String::as_str).and_then(non_empty)
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl CatalogItem for Service {
    const RESOURCE: Resource = Resource::Services;

    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn body(&self) -> &str {
        &self.description
    }
    fn categories(&self) -> &[String] {
        self.subcategories.as_deref().unwrap_or_default()
    }
    fn image(&self) -> Option<&str> {
        self.images.first().map(String::as_str).and_then(non_empty)
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl CatalogItem for CaseStudy {
    const RESOURCE: Resource = Resource::CaseStudies;

    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn body(&self) -> &str {
        &self.challenge
    }
    fn categories(&self) -> &[String] {
        std::slice::from_ref(&self.category)
    }
    fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl CatalogItem for Career {
    const RESOURCE: Resource = Resource::Careers;

    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.job_title
    }
    fn body(&self) -> &str {
        &self.description
    }
    fn categories(&self) -> &[String] {
        std::slice::from_ref(&self.job_type)
    }
    fn image(&self) -> Option<&str> {
        None
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
}
