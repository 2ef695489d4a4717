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

use std::path::PathBuf;
use std::str::FromStr;

use agency_types::Resource;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

/// Agency site catalog CLI
///
/// Lists, filters and shows catalog entries from the site's REST API and
/// submits the site's forms.
#[derive(Parser, Debug)]
#[clap(name = "agency")]
pub struct Opt {
    /// Catalog API base URL. Overrides `API_BASE_URL`.
    #[clap(long = "api-base-url", global = true)]
    pub api_base_url: Option<String>,

    /// Forms endpoint URL. Overrides `FORMS_ENDPOINT_URL`.
    #[clap(long = "forms-endpoint", global = true)]
    pub forms_endpoint: Option<String>,

    #[clap(subcommand)]
    pub mode: Mode,
}

/// A catalog collection named on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceArg(pub Resource);

#[derive(Error, Debug)]
pub enum ParseResourceError {
    #[error("Unknown resource: {0} (expected one of blogs, portfolio, products, services, case-studies, careers)")]
    Unknown(String),
}

impl FromStr for ResourceArg {
    type Err = ParseResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let path = match normalized.as_str() {
            "blog" => "blogs",
            "product" => "products",
            "service" => "services",
            "case-study" | "casestudies" | "case_studies" => "case-studies",
            "career" | "jobs" => "careers",
            other => other,
        };
        Resource::from_path(path)
            .map(ResourceArg)
            .ok_or_else(|| ParseResourceError::Unknown(s.to_string()))
    }
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// List a collection, optionally filtered by category and text.
    List(List),

    /// Show the categories present in a collection with item counts.
    Categories(Categories),

    /// Show a single item.
    Show(Show),

    /// Subscribe an email address to the newsletter.
    Subscribe(Subscribe),

    /// Apply for a job listing.
    Apply(Apply),

    /// Run a review carousel on a timer and print every index change.
    Rotate(Rotate),
}

#[derive(Args, Debug, Clone)]
pub struct List {
    pub resource: ResourceArg,

    /// Category label to keep. "All" keeps everything.
    #[clap(long, short = 'c', default_value = "All")]
    pub category: String,

    /// Case-insensitive text to look for in titles and descriptions.
    #[clap(long, short = 'q', default_value = "")]
    pub query: String,

    /// Print at most this many items.
    #[clap(long)]
    pub limit: Option<usize>,

    /// Highlight the first matching item.
    #[clap(long)]
    pub featured: bool,
}

#[derive(Args, Debug, Clone)]
pub struct Categories {
    pub resource: ResourceArg,
}

#[derive(Args, Debug, Clone)]
pub struct Show {
    pub resource: ResourceArg,
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct Subscribe {
    pub email: String,
}

#[derive(Args, Debug, Clone)]
pub struct Apply {
    /// Career listing id.
    pub job_id: String,

    #[clap(long)]
    pub name: String,

    #[clap(long)]
    pub email: String,

    #[clap(long, default_value = "")]
    pub portfolio: String,

    /// Resume file to attach.
    #[clap(long)]
    pub resume: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct Rotate {
    /// Number of items in the carousel.
    #[clap(long, default_value_t = 3)]
    pub items: usize,

    /// How long to run, in seconds.
    #[clap(long, default_value_t = 20)]
    pub seconds: u64,

    /// Auto-advance period in milliseconds. Defaults to `CAROUSEL_INTERVAL_MS`.
    #[clap(long)]
    pub interval_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_aliases() {
        assert_eq!("blogs".parse::<ResourceArg>().unwrap().0, Resource::Blogs);
        assert_eq!("Blog".parse::<ResourceArg>().unwrap().0, Resource::Blogs);
        assert_eq!(
            "case_studies".parse::<ResourceArg>().unwrap().0,
            Resource::CaseStudies
        );
        assert_eq!("jobs".parse::<ResourceArg>().unwrap().0, Resource::Careers);
        assert!("testimonials".parse::<ResourceArg>().is_err());
    }

    #[test]
    fn test_parse_list_command() {
        let opt = Opt::parse_from([
            "agency",
            "--api-base-url",
            "http://localhost:5000/api/v1",
            "list",
            "blogs",
            "-c",
            "Tech",
            "-q",
            "go",
        ]);
        assert_eq!(
            opt.api_base_url.as_deref(),
            Some("http://localhost:5000/api/v1")
        );
        match opt.mode {
            Mode::List(list) => {
                assert_eq!(list.resource.0, Resource::Blogs);
                assert_eq!(list.category, "Tech");
                assert_eq!(list.query, "go");
                assert!(!list.featured);
            }
            other => panic!("unexpected mode: {other:?}"),
        }
    }
}
