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

//! Single-open expand/collapse panel group (service listings).

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: Option<String>,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `id`, or close it if it is already open. Opening one panel
    /// closes any other.
    pub fn toggle(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }
}
