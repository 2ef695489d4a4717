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

//! `subscribe` and `apply`.

use std::path::Path;

use agency_client::{CatalogApiClient, FormSubmissionClient, SiteConfig};
use agency_types::{Career, CatalogItem};
use agency_views::forms::{JobApplicationForm, NewsletterForm, ResumeAttachment};
use agency_views::RemoteCollection;
use anyhow::{anyhow, Context};
use tracing::info;

use crate::cli_args::{Apply, Subscribe};
use crate::modes::catalog::ensure_loaded;

pub async fn subscribe(config: &SiteConfig, args: &Subscribe) -> anyhow::Result<()> {
    let submitter = FormSubmissionClient::from_config(config)?;
    let mut form = NewsletterForm::new();
    form.set_email(args.email.as_str());
    form.submit(&submitter).await?;
    println!("Subscribed {}. Thanks!", args.email.trim());
    Ok(())
}

pub async fn apply(
    client: &CatalogApiClient,
    config: &SiteConfig,
    args: &Apply,
) -> anyhow::Result<()> {
    let submitter = FormSubmissionClient::from_config(config)?;

    let listing: RemoteCollection<Career> = RemoteCollection::new();
    listing.load_item(client, &args.job_id).await;
    ensure_loaded(&listing)?;
    let career = listing
        .item()
        .ok_or_else(|| anyhow!("Failed to fetch {}", Career::RESOURCE.item_label()))?;

    let mut form = JobApplicationForm::new(career.title());
    form.name = args.name.clone();
    form.email = args.email.clone();
    form.portfolio = args.portfolio.clone();
    if let Some(path) = &args.resume {
        form.attach_resume(read_resume(path).await?);
    }

    info!("applying for {} ({})", career.title(), career.id());
    form.submit(&submitter).await?;
    println!("Application for {} sent.", career.title());
    Ok(())
}

async fn read_resume(path: &Path) -> anyhow::Result<ResumeAttachment> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(ResumeAttachment {
        mime: mime_for(path).to_string(),
        file_name,
        bytes,
    })
}

/// Content type for a resume file, by extension.
pub fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
