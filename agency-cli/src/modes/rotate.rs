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

//! `rotate`: drive a review carousel on the autoplay timer.

use std::time::Duration;

use agency_client::SiteConfig;
use agency_views::autoplay::{self, Autoplay};
use agency_views::{CarouselConfig, RotatingDisplay};
use anyhow::anyhow;
use tokio::time::{self, Instant};
use tracing::debug;

use crate::cli_args::Rotate;

pub async fn rotate(config: &SiteConfig, args: &Rotate) -> anyhow::Result<()> {
    let mut carousel = CarouselConfig::from_site_config(config);
    if let Some(ms) = args.interval_ms {
        carousel.interval = Duration::from_millis(ms);
    }
    let shared_display = autoplay::shared(RotatingDisplay::new(args.items, carousel)?);
    let count = args.items;

    let autoplay = Autoplay::spawn(shared_display.clone());
    let mut index_rx = autoplay.subscribe();
    println!("showing item 1/{count}");

    let deadline = deadline_after(args.seconds)?;
    loop {
        tokio::select! {
            changed = index_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let index = *index_rx.borrow_and_update();
                println!("showing item {}/{count}", index + 1);
            }
            _ = time::sleep_until(deadline) => break,
        }
    }

    debug!(
        "stopping carousel in state {:?}",
        autoplay::lock_display(&shared_display).state()
    );
    Ok(())
}

/// `seconds` from now, or an error if that is past what the clock can
/// represent.
fn deadline_after(seconds: u64) -> anyhow::Result<Instant> {
    Instant::now()
        .checked_add(Duration::from_secs(seconds))
        .ok_or_else(|| anyhow!("--seconds {seconds} is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_is_checked() {
        assert!(deadline_after(20).is_ok());
        let err = deadline_after(u64::MAX).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
