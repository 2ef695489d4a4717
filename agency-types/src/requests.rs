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

//! Form submission bodies.
//!
//! The forms endpoint is a single URL that dispatches on `formType`. Bodies
//! are sent `application/x-www-form-urlencoded`, so every field is a string.

use serde::{Deserialize, Serialize};

/// Body for a newsletter sign-up.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    /// Always `"newsletter"`.
    pub form_type: String,
    pub email: String,
}

impl NewsletterSubscription {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            form_type: "newsletter".to_string(),
            email: email.into(),
        }
    }
}

/// Body for a job application.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationRequest {
    /// Always `"job"`.
    pub form_type: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub portfolio: String,
    pub job_title: String,
    /// Resume as a `data:<mime>;base64,<payload>` URL, or empty when no file
    /// was attached.
    #[serde(default)]
    pub file: String,
}

impl JobApplicationRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        portfolio: impl Into<String>,
        job_title: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            form_type: "job".to_string(),
            name: name.into(),
            email: email.into(),
            portfolio: portfolio.into(),
            job_title: job_title.into(),
            file: file.into(),
        }
    }
}
