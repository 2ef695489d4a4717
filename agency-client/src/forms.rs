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

//! Client for the forms endpoint (newsletter sign-ups, job applications).
//!
//! The endpoint answers with free text rather than the catalog envelope.
//! A body mentioning "already" means the address was subscribed before.

use agency_types::requests::{JobApplicationRequest, NewsletterSubscription};
use base64::Engine;
use reqwest::Client;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::error::ApiError;

/// What the forms endpoint said about an accepted post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub already_subscribed: bool,
}

#[derive(Debug, Clone)]
pub struct FormSubmissionClient {
    endpoint: String,
    http: Client,
}

impl FormSubmissionClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            http: Client::new(),
        }
    }

    /// Build from config. Fails with [`ApiError::Config`] when no forms
    /// endpoint is configured.
    pub fn from_config(config: &SiteConfig) -> Result<Self, ApiError> {
        config
            .forms_endpoint
            .as_deref()
            .map(Self::new)
            .ok_or_else(|| ApiError::Config("FORMS_ENDPOINT_URL is not set".to_string()))
    }

    pub async fn submit_newsletter(
        &self,
        subscription: &NewsletterSubscription,
    ) -> Result<SubmissionReceipt, ApiError> {
        self.post_form(subscription).await
    }

    pub async fn submit_job_application(
        &self,
        application: &JobApplicationRequest,
    ) -> Result<SubmissionReceipt, ApiError> {
        self.post_form(application).await
    }

    async fn post_form<B: Serialize>(&self, body: &B) -> Result<SubmissionReceipt, ApiError> {
        log::debug!("POST {}", self.endpoint);
        let response = self.http.post(&self.endpoint).form(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::ServerError {
                status: status.as_u16(),
                message: Some(text).filter(|t| !t.trim().is_empty()),
            });
        }
        Ok(SubmissionReceipt {
            already_subscribed: text.to_lowercase().contains("already"),
        })
    }
}

/// Encode a file as a `data:` URL, the shape the forms endpoint expects for
/// attachments.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{payload}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_url() {
        assert_eq!(
            encode_data_url("application/pdf", b"hello"),
            "data:application/pdf;base64,aGVsbG8="
        );
        assert_eq!(encode_data_url("text/plain", b""), "data:text/plain;base64,");
    }

    #[test]
    fn test_from_config_requires_endpoint() {
        let err = FormSubmissionClient::from_config(&SiteConfig::default()).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));

        let config = SiteConfig {
            forms_endpoint: Some("http://localhost:9/exec".to_string()),
            ..SiteConfig::default()
        };
        assert!(FormSubmissionClient::from_config(&config).is_ok());
    }
}
