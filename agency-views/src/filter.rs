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

//! Derived views over an already-fetched collection.
//!
//! Everything here is pure: same inputs, same output, no hidden state. Pages
//! recompute their view on every keystroke or category click.

use std::fmt;

use agency_types::CatalogItem;

/// Label of the catch-all category. Always first in category lists.
pub const ALL_CATEGORIES: &str = "All";

/// Category part of [`FilterCriteria`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches<T: CatalogItem>(&self, item: &T) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => item.categories().iter().any(|c| c == name),
        }
    }
}

impl From<&str> for CategoryFilter {
    /// `"All"` and the empty string select everything.
    fn from(label: &str) -> Self {
        if label.is_empty() || label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label.to_string())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

/// What the user has selected on a list page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    /// Free-text query. Empty matches everything.
    pub query: String,
}

impl FilterCriteria {
    pub fn new(category: impl Into<CategoryFilter>, query: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            query: query.into(),
        }
    }

    pub fn category(category: &str) -> Self {
        Self::new(category, "")
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self::new(CategoryFilter::All, query)
    }
}

/// Items matching `criteria`, in their original order.
///
/// An item matches when the category filter accepts one of its labels and
/// the query is a case-insensitive substring of its title or body.
pub fn derive_view<'a, T: CatalogItem>(items: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    let needle = criteria.query.to_lowercase();
    items
        .iter()
        .filter(|item| criteria.category.matches(*item))
        .filter(|item| {
            needle.is_empty()
                || item.title().to_lowercase().contains(&needle)
                || item.body().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Distinct category labels in first-seen order, prefixed with `"All"`.
/// Empty labels are skipped.
pub fn list_available_categories<T: CatalogItem>(items: &[T]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for label in items.iter().flat_map(|item| item.categories()) {
        if !label.is_empty() && !categories.contains(label) {
            categories.push(label.clone());
        }
    }
    categories
}

/// Number of items carrying each label, in first-seen order.
pub fn category_counts<T: CatalogItem>(items: &[T]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in items.iter().flat_map(|item| item.categories()) {
        if label.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(name, _)| name == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label.clone(), 1)),
        }
    }
    counts
}

/// Hero item of a derived view: its first element.
pub fn featured<'a, T>(view: &[&'a T]) -> Option<&'a T> {
    view.first().copied()
}

/// First `limit` items, for menus and teasers.
pub fn preview<T>(items: &[T], limit: usize) -> &[T] {
    &items[..items.len().min(limit)]
}
