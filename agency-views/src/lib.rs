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

//! View-models for the agency site.
//!
//! Every list and detail page follows the same pattern: fetch a collection
//! from the catalog API into a [`RemoteCollection`], then render a derived
//! view of it ([`filter::derive_view`]). Review carousels are driven by a
//! [`RotatingDisplay`] and, optionally, an [`Autoplay`] task.

pub mod autoplay;
pub mod carousel;
pub mod collection;
pub mod disclosure;
pub mod fetch_state;
pub mod filter;
pub mod forms;
pub mod presentation;
pub mod source;

pub use autoplay::{Autoplay, SharedDisplay};
pub use carousel::{
    CarouselConfig, CarouselError, Direction, ManualNavigation, PauseReasons, RotatingDisplay,
    RotationState, SwipeOutcome,
};
pub use collection::{LoadOutcome, RemoteCollection};
pub use fetch_state::{FetchState, Phase};
pub use filter::{CategoryFilter, FilterCriteria, ALL_CATEGORIES};
pub use source::CatalogSource;
