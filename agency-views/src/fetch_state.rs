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

//! Per-view fetch state.

/// Coarse phase of a [`FetchState`], handy for rendering decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// State of one view's fetch.
///
/// Only `Success` carries a payload and only `Error` carries a message, so a
/// view can never show stale data next to an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(Vec<T>),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn phase(&self) -> Phase {
        match self {
            FetchState::Idle => Phase::Idle,
            FetchState::Loading => Phase::Loading,
            FetchState::Success(_) => Phase::Success,
            FetchState::Error(_) => Phase::Error,
        }
    }

    /// The loaded items, or an empty slice in every other phase.
    pub fn payload(&self) -> &[T] {
        match self {
            FetchState::Success(items) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}
