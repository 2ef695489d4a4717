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

//! Response envelope for the catalog REST API.
//!
//! Every endpoint wraps its payload in an [`ApiResponse`]:
//!
//! ```json
//! { "success": true, "statusCode": 200, "message": "Blogs retrieved", "data": [ ... ] }
//! ```
//!
//! `data` is an array for collection endpoints and a single object for
//! `/{resource}/{id}` endpoints. [`OneOrMany`] accepts both shapes.

use serde::{Deserialize, Serialize};

/// Top-level API response envelope.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    /// HTTP status echoed by the backend. `0` when the field is missing.
    #[serde(default)]
    pub status_code: u16,
    /// Human-readable message. Empty when the field is missing.
    #[serde(default)]
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a successful result.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            status_code: 200,
            message: String::new(),
            data,
        }
    }
}

/// Body shape used when only the failure fields matter.
///
/// Error responses frequently omit `data` or set it to `null`, so every
/// field here is optional.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: Option<String>,
}

/// A payload that is either a single item or a list of items.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// Normalize into a sequence. A single item becomes a list of one.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}
