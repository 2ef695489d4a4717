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

//! Error types for the catalog API client.

use agency_types::ResourceRequest;
use thiserror::Error;

/// Fallback shown when the backend gives no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Errors returned by [`CatalogApiClient`](crate::CatalogApiClient) and
/// [`FormSubmissionClient`](crate::forms::FormSubmissionClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A 2xx response whose envelope reported `success: false`.
    #[error("Request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// A non-2xx response. `message` is the envelope message when the body
    /// could be parsed.
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    ServerError { status: u16, message: Option<String> },

    /// The body was not the expected JSON envelope.
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A single-item request succeeded but carried no item.
    #[error("Response carried no data")]
    EmptyPayload,

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A configuration error (e.g. missing forms endpoint).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Message reported by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message } | ApiError::ServerError { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// Text to render in place of the view that issued `request`.
    ///
    /// The server's message wins when present. Otherwise the fallback depends
    /// on where the request failed.
    pub fn user_message(&self, request: &ResourceRequest) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        match self {
            ApiError::Rejected { .. } | ApiError::EmptyPayload => {
                format!("Failed to fetch {}", request.label())
            }
            ApiError::ServerError { .. } | ApiError::Config(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
            ApiError::Malformed(_) | ApiError::Network(_) => {
                format!("An error occurred while fetching {}", request.label())
            }
        }
    }
}
