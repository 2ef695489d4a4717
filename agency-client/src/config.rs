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

//! Site configuration loaded from environment variables.
//!
//! Read once at startup and passed by reference into every client; nothing
//! reconfigures it afterwards.

use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1";
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 6000;
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Configuration for the catalog client and view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Catalog API base URL (e.g. "http://localhost:5000/api/v1").
    pub api_base_url: String,
    /// Forms endpoint for newsletter and job application posts.
    /// `None` if `FORMS_ENDPOINT_URL` is unset or empty.
    pub forms_endpoint: Option<String>,
    /// Auto-advance period for review carousels, in milliseconds.
    pub carousel_interval_ms: u64,
    /// Horizontal drag distance, in pixels, that counts as a swipe.
    pub swipe_threshold_px: f32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            forms_endpoint: None,
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `API_BASE_URL` (default: `"http://localhost:5000/api/v1"`)
    /// - `FORMS_ENDPOINT_URL`
    /// - `CAROUSEL_INTERVAL_MS` (default: `"6000"`)
    /// - `SWIPE_THRESHOLD_PX` (default: `"10"`)
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("API_BASE_URL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let forms_endpoint = lookup("FORMS_ENDPOINT_URL").filter(|s| !s.is_empty());
        let carousel_interval_ms = match lookup("CAROUSEL_INTERVAL_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or("CAROUSEL_INTERVAL_MS must be a positive integer")?,
            None => DEFAULT_CAROUSEL_INTERVAL_MS,
        };
        let swipe_threshold_px = match lookup("SWIPE_THRESHOLD_PX") {
            Some(raw) => raw
                .parse::<f32>()
                .ok()
                .filter(|px| px.is_finite() && *px >= 0.0)
                .ok_or("SWIPE_THRESHOLD_PX must be a non-negative number")?,
            None => DEFAULT_SWIPE_THRESHOLD_PX,
        };

        Ok(Self {
            api_base_url,
            forms_endpoint,
            carousel_interval_ms,
            swipe_threshold_px,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("API_BASE_URL", "https://api.example.com/v1"),
            ("FORMS_ENDPOINT_URL", "https://forms.example.com/exec"),
            ("CAROUSEL_INTERVAL_MS", "4000"),
            ("SWIPE_THRESHOLD_PX", "25"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
        assert_eq!(
            config.forms_endpoint.as_deref(),
            Some("https://forms.example.com/exec")
        );
        assert_eq!(config.carousel_interval_ms, 4000);
        assert_eq!(config.swipe_threshold_px, 25.0);
    }

    #[test]
    fn test_empty_forms_endpoint_is_none() {
        let config = SiteConfig::from_lookup(lookup_from(&[("FORMS_ENDPOINT_URL", "")])).unwrap();
        assert!(config.forms_endpoint.is_none());
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        assert!(SiteConfig::from_lookup(lookup_from(&[("CAROUSEL_INTERVAL_MS", "soon")])).is_err());
        assert!(SiteConfig::from_lookup(lookup_from(&[("CAROUSEL_INTERVAL_MS", "0")])).is_err());
        assert!(SiteConfig::from_lookup(lookup_from(&[("SWIPE_THRESHOLD_PX", "-3")])).is_err());
    }
}
