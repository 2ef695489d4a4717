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

//! Remote Collection View-Model.
//!
//! A [`RemoteCollection`] owns the [`FetchState`] of one page (or one
//! component). `load` flips the state to `Loading` as soon as it is called,
//! makes exactly one request, and commits the outcome only if no newer `load` has
//! started and the view has not been unmounted in the meantime. Failures are
//! absorbed into the state; `load` never returns an error.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use agency_types::{CatalogItem, ResourceRequest};
use serde::de::DeserializeOwned;

use crate::fetch_state::{FetchState, Phase};
use crate::filter::{self, FilterCriteria};
use crate::source::CatalogSource;

/// Whether a finished load was written into the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Committed,
    /// A newer load started, or the view was unmounted, before this one
    /// settled.
    Discarded,
}

#[derive(Debug)]
struct Inner<T> {
    state: FetchState<T>,
    generation: u64,
    mounted: bool,
}

/// Fetch state for one view, shareable between the view and its pending
/// request.
#[derive(Debug)]
pub struct RemoteCollection<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for RemoteCollection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for RemoteCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RemoteCollection<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: FetchState::Idle,
                generation: 0,
                mounted: true,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn phase(&self) -> Phase {
        self.lock().state.phase()
    }

    pub fn error(&self) -> Option<String> {
        self.lock().state.error().map(str::to_string)
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        f(&self.lock().state)
    }

    /// Tear the view down. Results of requests still in flight are dropped.
    pub fn unmount(&self) {
        let mut inner = self.lock();
        inner.mounted = false;
        log::debug!("view unmounted at generation {}", inner.generation);
    }

    pub fn is_mounted(&self) -> bool {
        self.lock().mounted
    }

    /// Start a new load: bump the generation and show `Loading`.
    /// Returns `None` once the view is unmounted.
    fn begin(&self) -> Option<u64> {
        let mut inner = self.lock();
        if !inner.mounted {
            return None;
        }
        inner.generation = inner.generation.wrapping_add(1);
        inner.state = FetchState::Loading;
        Some(inner.generation)
    }

    fn commit(&self, generation: u64, state: FetchState<T>) -> LoadOutcome {
        let mut inner = self.lock();
        if !inner.mounted || inner.generation != generation {
            log::debug!(
                "discarding load {generation} (current {}, mounted {})",
                inner.generation,
                inner.mounted
            );
            return LoadOutcome::Discarded;
        }
        inner.state = state;
        LoadOutcome::Committed
    }
}

impl<T: Clone> RemoteCollection<T> {
    pub fn state(&self) -> FetchState<T> {
        self.lock().state.clone()
    }

    /// Snapshot of the loaded items; empty unless the last load succeeded.
    pub fn payload(&self) -> Vec<T> {
        self.lock().state.payload().to_vec()
    }

    /// First loaded item. Detail pages load a list of one.
    pub fn item(&self) -> Option<T> {
        self.lock().state.payload().first().cloned()
    }
}

impl<T: CatalogItem + Clone> RemoteCollection<T> {
    /// Items of the current payload matching `criteria`, in payload order.
    pub fn view(&self, criteria: &FilterCriteria) -> Vec<T> {
        let inner = self.lock();
        filter::derive_view(inner.state.payload(), criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Category labels present in the current payload, `"All"` first.
    pub fn categories(&self) -> Vec<String> {
        filter::list_available_categories(self.lock().state.payload())
    }
}

impl<T: DeserializeOwned + Send> RemoteCollection<T> {
    /// Fetch `request` and store the outcome.
    ///
    /// The state turns `Loading` and the request is issued when this is
    /// called, not when the returned future is first polled, so the most
    /// recently started load is the one that commits. Calling `load` on an
    /// unmounted view makes no request and resolves to
    /// [`LoadOutcome::Discarded`].
    pub fn load<'a, S: CatalogSource>(
        &'a self,
        source: &'a S,
        request: &ResourceRequest,
    ) -> impl Future<Output = LoadOutcome> + Send + 'a
    where
        T: 'a,
    {
        let started = self.begin().map(|generation| {
            log::debug!("loading {} (generation {generation})", request.path());
            (generation, source.fetch_resource::<T>(request.clone()))
        });
        let request = request.clone();

        async move {
            let Some((generation, fetch)) = started else {
                return LoadOutcome::Discarded;
            };
            let state = match fetch.await {
                Ok(items) => FetchState::Success(items),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", request.path());
                    FetchState::Error(err.user_message(&request))
                }
            };
            self.commit(generation, state)
        }
    }
}

impl<T: CatalogItem + DeserializeOwned + Send> RemoteCollection<T> {
    /// Fetch every item of `T`'s collection.
    pub fn load_all<'a, S: CatalogSource>(
        &'a self,
        source: &'a S,
    ) -> impl Future<Output = LoadOutcome> + Send + 'a
    where
        T: 'a,
    {
        self.load(source, &ResourceRequest::list(T::RESOURCE))
    }

    /// Fetch a single item of `T`'s collection; the payload is a list of one.
    pub fn load_item<'a, S: CatalogSource>(
        &'a self,
        source: &'a S,
        id: &str,
    ) -> impl Future<Output = LoadOutcome> + Send + 'a
    where
        T: 'a,
    {
        self.load(source, &ResourceRequest::item(T::RESOURCE, id))
    }
}
