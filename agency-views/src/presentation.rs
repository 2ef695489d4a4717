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

//! Closed lookup tables for presentation details that the backend keys by
//! free-form strings.

use std::fmt;

/// Icon shown next to a service. Unknown keys fall back to `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceIcon {
    Code,
    Smartphone,
    Globe,
    Cpu,
    Palette,
    BarChart,
    Shield,
    Cloud,
    Generic,
}

impl ServiceIcon {
    pub const KNOWN: [ServiceIcon; 8] = [
        ServiceIcon::Code,
        ServiceIcon::Smartphone,
        ServiceIcon::Globe,
        ServiceIcon::Cpu,
        ServiceIcon::Palette,
        ServiceIcon::BarChart,
        ServiceIcon::Shield,
        ServiceIcon::Cloud,
    ];

    /// Map the backend's icon key. Matching ignores case and surrounding
    /// whitespace.
    pub fn from_key(key: &str) -> Self {
        let key = key.trim().to_ascii_lowercase();
        Self::KNOWN
            .into_iter()
            .find(|icon| icon.key() == key)
            .unwrap_or(ServiceIcon::Generic)
    }

    pub fn key(self) -> &'static str {
        match self {
            ServiceIcon::Code => "code",
            ServiceIcon::Smartphone => "smartphone",
            ServiceIcon::Globe => "globe",
            ServiceIcon::Cpu => "cpu",
            ServiceIcon::Palette => "palette",
            ServiceIcon::BarChart => "bar-chart",
            ServiceIcon::Shield => "shield",
            ServiceIcon::Cloud => "cloud",
            ServiceIcon::Generic => "sparkles",
        }
    }
}

impl fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Gradient pair for a card accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub from: &'static str,
    pub to: &'static str,
}

pub const ACCENTS: [Accent; 4] = [
    Accent { from: "blue-600", to: "indigo-600" },
    Accent { from: "emerald-600", to: "teal-600" },
    Accent { from: "orange-600", to: "red-600" },
    Accent { from: "purple-600", to: "pink-600" },
];

/// Accent for the card at `index`; the palette repeats.
pub fn accent_for(index: usize) -> Accent {
    ACCENTS[index % ACCENTS.len()]
}
