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

use agency_cli::cli_args::{Mode, Opt};
use agency_cli::modes::{catalog, forms, rotate};
use agency_client::{CatalogApiClient, SiteConfig};
use anyhow::anyhow;
use clap::Parser;
use tracing::debug;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `try_init` also forwards the library crates' `log` records.
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install logger: {err}"))?;

    let opt = Opt::parse();

    let mut config = SiteConfig::from_env().map_err(anyhow::Error::msg)?;
    if let Some(url) = opt.api_base_url {
        config.api_base_url = url;
    }
    if let Some(endpoint) = opt.forms_endpoint {
        config.forms_endpoint = Some(endpoint).filter(|e| !e.trim().is_empty());
    }
    debug!("using {config:?}");

    let client = CatalogApiClient::from_config(&config);

    match opt.mode {
        Mode::List(args) => catalog::list(&client, &args).await?,
        Mode::Categories(args) => catalog::categories(&client, &args).await?,
        Mode::Show(args) => catalog::show(&client, &args).await?,
        Mode::Subscribe(args) => forms::subscribe(&config, &args).await?,
        Mode::Apply(args) => forms::apply(&client, &config, &args).await?,
        Mode::Rotate(args) => rotate::rotate(&config, &args).await?,
    };

    Ok(())
}
