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

//! `list`, `categories` and `show`.

use agency_client::CatalogApiClient;
use agency_types::{Blog, Career, CaseStudy, CatalogItem, Portfolio, Product, Resource, Service};
use agency_views::filter::{self, ALL_CATEGORIES};
use agency_views::{FilterCriteria, Phase, RemoteCollection};
use anyhow::bail;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cli_args::{Categories, List, Show};
use crate::render;

/// Call `$func::<T>` with the item type that belongs to `$resource`.
macro_rules! with_item_type {
    ($resource:expr, $func:ident, $($arg:expr),*) => {
        match $resource {
            Resource::Blogs => $func::<Blog>($($arg),*).await,
            Resource::Portfolio => $func::<Portfolio>($($arg),*).await,
            Resource::Products => $func::<Product>($($arg),*).await,
            Resource::Services => $func::<Service>($($arg),*).await,
            Resource::CaseStudies => $func::<CaseStudy>($($arg),*).await,
            Resource::Careers => $func::<Career>($($arg),*).await,
        }
    };
}

pub async fn list(client: &CatalogApiClient, args: &List) -> anyhow::Result<()> {
    with_item_type!(args.resource.0, list_as, client, args)
}

pub async fn categories(client: &CatalogApiClient, args: &Categories) -> anyhow::Result<()> {
    with_item_type!(args.resource.0, categories_as, client)
}

pub async fn show(client: &CatalogApiClient, args: &Show) -> anyhow::Result<()> {
    with_item_type!(args.resource.0, show_as, client, &args.id)
}

/// Turn a failed or unfinished load into an error carrying the view's
/// message.
pub fn ensure_loaded<T>(page: &RemoteCollection<T>) -> anyhow::Result<()> {
    match page.phase() {
        Phase::Success => Ok(()),
        Phase::Error => bail!(page.error().unwrap_or_default()),
        phase => bail!("request did not complete ({phase:?})"),
    }
}

async fn list_as<T>(client: &CatalogApiClient, args: &List) -> anyhow::Result<()>
where
    T: CatalogItem + DeserializeOwned + Send + Clone,
{
    let page: RemoteCollection<T> = RemoteCollection::new();
    page.load_all(client).await;
    ensure_loaded(&page)?;

    let criteria = FilterCriteria::new(args.category.as_str(), args.query.clone());
    debug!("filtering {} with {criteria:?}", T::RESOURCE);
    let view = page.view(&criteria);
    if view.is_empty() {
        println!("No {} match.", T::RESOURCE.label());
        return Ok(());
    }

    if args.featured {
        let refs: Vec<&T> = view.iter().collect();
        if let Some(item) = filter::featured(&refs) {
            println!("Featured: {}\n", item.title());
        }
    }

    let shown = filter::preview(&view, args.limit.unwrap_or(view.len()));
    for item in shown {
        println!("{}", render::item_line(item));
    }
    if shown.len() < view.len() {
        println!("... and {} more", view.len() - shown.len());
    }
    Ok(())
}

async fn categories_as<T>(client: &CatalogApiClient) -> anyhow::Result<()>
where
    T: CatalogItem + DeserializeOwned + Send + Clone,
{
    let page: RemoteCollection<T> = RemoteCollection::new();
    page.load_all(client).await;
    ensure_loaded(&page)?;

    let counts = page.with_state(|state| filter::category_counts(state.payload()));
    println!("{ALL_CATEGORIES} ({})", page.payload().len());
    for (label, count) in counts {
        println!("{label} ({count})");
    }
    Ok(())
}

async fn show_as<T>(client: &CatalogApiClient, id: &str) -> anyhow::Result<()>
where
    T: CatalogItem + DeserializeOwned + Send + Clone,
{
    let page: RemoteCollection<T> = RemoteCollection::new();
    page.load_item(client, id).await;
    ensure_loaded(&page)?;

    match page.item() {
        Some(item) => print!("{}", render::item_detail(&item)),
        None => bail!("Failed to fetch {}", T::RESOURCE.item_label()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unloaded_collection_is_an_error() {
        let page: RemoteCollection<Blog> = RemoteCollection::new();
        let err = ensure_loaded(&page).unwrap_err();
        assert!(err.to_string().contains("Idle"));
    }
}
