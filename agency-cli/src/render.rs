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

//! Plain-text rendering of catalog items.

use std::fmt::Write;

use agency_types::CatalogItem;

fn labels<T: CatalogItem>(item: &T) -> String {
    item.categories()
        .iter()
        .filter(|c| !c.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per item: id, title and category labels.
pub fn item_line<T: CatalogItem>(item: &T) -> String {
    let categories = labels(item);
    if categories.is_empty() {
        format!("{:<26} {}", item.id(), item.title())
    } else {
        format!("{:<26} {} [{}]", item.id(), item.title(), categories)
    }
}

/// Multi-line detail block for a single item.
pub fn item_detail<T: CatalogItem>(item: &T) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", item.title());
    let _ = writeln!(out, "id:         {}", item.id());
    let categories = labels(item);
    if !categories.is_empty() {
        let _ = writeln!(out, "categories: {categories}");
    }
    if let Some(image) = item.image() {
        let _ = writeln!(out, "image:      {image}");
    }
    if !item.created_at().is_empty() {
        let _ = writeln!(out, "created:    {}", item.created_at());
    }
    if !item.body().is_empty() {
        let _ = writeln!(out, "\n{}", item.body());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_types::Portfolio;

    fn portfolio(category: &str) -> Portfolio {
        Portfolio {
            id: "p1".to_string(),
            title: "Bank app".to_string(),
            client: "Acme".to_string(),
            category: category.to_string(),
            technology: vec![],
            active_users: "10k".to_string(),
            image: String::new(),
            live_link: String::new(),
            created_at: String::new(),
            description: Some("Mobile banking".to_string()),
        }
    }

    #[test]
    fn test_item_line() {
        assert!(item_line(&portfolio("Fintech")).ends_with("Bank app [Fintech]"));
        assert!(item_line(&portfolio("")).ends_with("Bank app"));
    }

    #[test]
    fn test_item_detail_skips_empty_fields() {
        let detail = item_detail(&portfolio("Fintech"));
        assert!(detail.starts_with("Bank app\n"));
        assert!(detail.contains("categories: Fintech"));
        assert!(!detail.contains("image:"));
        assert!(detail.ends_with("Mobile banking\n"));
    }
}
