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

//! Newsletter and job application form state machines.
//!
//! Both forms move `Idle -> Submitting -> Succeeded | Failed`. Validation
//! happens before any request is made. A failed post is reported as
//! `Failed`, never as success.

use std::future::Future;

use agency_client::forms::encode_data_url;
use agency_client::{ApiError, FormSubmissionClient, SubmissionReceipt};
use agency_types::requests::{JobApplicationRequest, NewsletterSubscription};
use once_cell::sync::Lazy;
use thiserror::Error;

static EMAIL_RE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Loose shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// The seam between forms and the forms endpoint.
pub trait FormSubmitter {
    fn submit_newsletter(
        &self,
        subscription: &NewsletterSubscription,
    ) -> impl Future<Output = Result<SubmissionReceipt, ApiError>> + Send;

    fn submit_job_application(
        &self,
        application: &JobApplicationRequest,
    ) -> impl Future<Output = Result<SubmissionReceipt, ApiError>> + Send;
}

impl FormSubmitter for FormSubmissionClient {
    fn submit_newsletter(
        &self,
        subscription: &NewsletterSubscription,
    ) -> impl Future<Output = Result<SubmissionReceipt, ApiError>> + Send {
        FormSubmissionClient::submit_newsletter(self, subscription)
    }

    fn submit_job_application(
        &self,
        application: &JobApplicationRequest,
    ) -> impl Future<Output = Result<SubmissionReceipt, ApiError>> + Send {
        FormSubmissionClient::submit_job_application(self, application)
    }
}

/// User-facing form failures. The `Display` text is shown verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("This email is already subscribed.")]
    AlreadySubscribed,
    #[error("We couldn't send your submission. Please try again.")]
    SubmissionFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FormError),
}

#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    email: String,
    phase: FormPhase,
    subscribed: bool,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Whether this form has already completed a subscription.
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Edit the address. Clears a previous failure message.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        if matches!(self.phase, FormPhase::Failed(_)) {
            self.phase = FormPhase::Idle;
        }
    }

    /// Close the success notice. The form stays subscribed.
    pub fn dismiss(&mut self) {
        if self.phase == FormPhase::Succeeded {
            self.phase = FormPhase::Idle;
        }
    }

    /// Submit the current address.
    ///
    /// Does nothing once subscribed or while a submission is in flight.
    pub async fn submit<S: FormSubmitter>(&mut self, submitter: &S) -> Result<(), FormError> {
        if self.subscribed || self.phase == FormPhase::Submitting {
            return Ok(());
        }
        if !is_valid_email(&self.email) {
            return self.fail(FormError::InvalidEmail);
        }

        self.phase = FormPhase::Submitting;
        let subscription = NewsletterSubscription::new(self.email.clone());
        match submitter.submit_newsletter(&subscription).await {
            Ok(receipt) if receipt.already_subscribed => self.fail(FormError::AlreadySubscribed),
            Ok(_) => {
                self.subscribed = true;
                self.email.clear();
                self.phase = FormPhase::Succeeded;
                Ok(())
            }
            Err(err) => {
                log::warn!("newsletter submission failed: {err}");
                self.fail(FormError::SubmissionFailed)
            }
        }
    }

    fn fail(&mut self, error: FormError) -> Result<(), FormError> {
        self.phase = FormPhase::Failed(error.clone());
        Err(error)
    }
}

/// A file attached to an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAttachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ResumeAttachment {
    pub fn to_data_url(&self) -> String {
        encode_data_url(&self.mime, &self.bytes)
    }
}

#[derive(Debug, Clone)]
pub struct JobApplicationForm {
    job_title: String,
    pub name: String,
    pub email: String,
    pub portfolio: String,
    resume: Option<ResumeAttachment>,
    phase: FormPhase,
}

impl JobApplicationForm {
    pub fn new(job_title: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            name: String::new(),
            email: String::new(),
            portfolio: String::new(),
            resume: None,
            phase: FormPhase::Idle,
        }
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn resume(&self) -> Option<&ResumeAttachment> {
        self.resume.as_ref()
    }

    pub fn attach_resume(&mut self, resume: ResumeAttachment) {
        self.resume = Some(resume);
    }

    /// Send the application once. Later calls after success are no-ops.
    pub async fn submit<S: FormSubmitter>(&mut self, submitter: &S) -> Result<(), FormError> {
        if matches!(self.phase, FormPhase::Submitting | FormPhase::Succeeded) {
            return Ok(());
        }
        if self.name.trim().is_empty() {
            return self.fail(FormError::MissingField("name"));
        }
        if !is_valid_email(&self.email) {
            return self.fail(FormError::InvalidEmail);
        }

        self.phase = FormPhase::Submitting;
        let application = JobApplicationRequest::new(
            self.name.trim(),
            self.email.clone(),
            self.portfolio.clone(),
            self.job_title.clone(),
            self.resume
                .as_ref()
                .map(ResumeAttachment::to_data_url)
                .unwrap_or_default(),
        );
        match submitter.submit_job_application(&application).await {
            Ok(_) => {
                self.phase = FormPhase::Succeeded;
                Ok(())
            }
            Err(err) => {
                log::warn!("job application for {} failed: {err}", self.job_title);
                self.fail(FormError::SubmissionFailed)
            }
        }
    }

    fn fail(&mut self, error: FormError) -> Result<(), FormError> {
        self.phase = FormPhase::Failed(error.clone());
        Err(error)
    }
}
