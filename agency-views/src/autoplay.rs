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

//! Timer task that auto-advances a [`RotatingDisplay`].
//!
//! The display is shared with the view through [`SharedDisplay`]; the view
//! forwards pointer and drag events to it directly while this task feeds it
//! elapsed time. Dropping the [`Autoplay`] handle stops the task, the same
//! way a component drops its interval on unmount.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::carousel::RotatingDisplay;

pub type SharedDisplay = Arc<Mutex<RotatingDisplay>>;

/// How often the task samples the clock.
pub const DEFAULT_RESOLUTION: Duration = Duration::from_millis(100);

pub fn shared(display: RotatingDisplay) -> SharedDisplay {
    Arc::new(Mutex::new(display))
}

pub fn lock_display(display: &SharedDisplay) -> MutexGuard<'_, RotatingDisplay> {
    display.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to a running autoplay task. Must be created inside a tokio
/// runtime.
#[derive(Debug)]
pub struct Autoplay {
    task: JoinHandle<()>,
    index_rx: watch::Receiver<usize>,
}

impl Autoplay {
    pub fn spawn(display: SharedDisplay) -> Self {
        Self::spawn_with_resolution(display, DEFAULT_RESOLUTION)
    }

    pub fn spawn_with_resolution(display: SharedDisplay, resolution: Duration) -> Self {
        let initial = lock_display(&display).index();
        let (index_tx, index_rx) = watch::channel(initial);

        let task = tokio::spawn(async move {
            let mut ticker = time::interval(resolution);
            let mut last = Instant::now();
            loop {
                ticker.tick().await;
                let now = Instant::now();
                let index = {
                    let mut display = lock_display(&display);
                    display.advance(now - last);
                    display.index()
                };
                last = now;
                index_tx.send_if_modified(|current| {
                    if *current == index {
                        return false;
                    }
                    *current = index;
                    true
                });
            }
        });

        Self { task, index_rx }
    }

    /// Receiver that sees the display index whenever the task observes a
    /// change, including changes made by manual navigation.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index_rx.clone()
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.task.abort();
    }
}
