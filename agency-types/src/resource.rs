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

//! Catalog resources exposed by the backend and the paths they live under.

use std::fmt;

/// A named collection on the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Blogs,
    Portfolio,
    Products,
    Services,
    CaseStudies,
    Careers,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Blogs,
        Resource::Portfolio,
        Resource::Products,
        Resource::Services,
        Resource::CaseStudies,
        Resource::Careers,
    ];

    /// Path segment under the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Blogs => "blogs",
            Resource::Portfolio => "portfolio",
            Resource::Products => "products",
            Resource::Services => "services",
            Resource::CaseStudies => "case-studies",
            Resource::Careers => "careers",
        }
    }

    /// Noun for the whole collection in user-facing messages
    /// ("Failed to fetch blogs").
    pub fn label(self) -> &'static str {
        match self {
            Resource::Blogs => "blogs",
            Resource::Portfolio => "portfolio",
            Resource::Products => "products",
            Resource::Services => "services",
            Resource::CaseStudies => "case studies",
            Resource::Careers => "careers",
        }
    }

    /// Noun for a single item's detail page ("Failed to fetch job details").
    pub fn item_label(self) -> &'static str {
        match self {
            Resource::Blogs => "the blog",
            Resource::Portfolio => "the portfolio item",
            Resource::Products => "the product",
            Resource::Services => "service details",
            Resource::CaseStudies => "the case study",
            Resource::Careers => "job details",
        }
    }

    /// Look a resource up by its path segment.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A collection or single-item request against a [`Resource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    pub resource: Resource,
    pub id: Option<String>,
}

impl ResourceRequest {
    pub fn list(resource: Resource) -> Self {
        Self { resource, id: None }
    }

    pub fn item(resource: Resource, id: impl Into<String>) -> Self {
        Self {
            resource,
            id: Some(id.into()),
        }
    }

    /// Relative path, e.g. `/blogs` or `/blogs/65f1c2`. The id is
    /// percent-encoded as a single path segment.
    pub fn path(&self) -> String {
        match &self.id {
            Some(id) => format!("/{}/{}", self.resource.path(), urlencoding::encode(id)),
            None => format!("/{}", self.resource.path()),
        }
    }

    /// What failed, in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self.id {
            Some(_) => self.resource.item_label(),
            None => self.resource.label(),
        }
    }
}
