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

//! Autoplay driver tests on tokio's paused clock.

use std::time::Duration;

use agency_views::autoplay::{lock_display, shared};
use agency_views::{Autoplay, CarouselConfig, RotatingDisplay, RotationState};

fn config(interval_ms: u64) -> CarouselConfig {
    CarouselConfig {
        interval: Duration::from_millis(interval_ms),
        ..CarouselConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn test_advances_once_per_interval() {
    let display = shared(RotatingDisplay::new(3, config(6000)).unwrap());
    let autoplay = Autoplay::spawn(display.clone());
    let index = autoplay.subscribe();

    tokio::time::sleep(Duration::from_millis(5950)).await;
    assert_eq!(*index.borrow(), 0);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(*index.borrow(), 1);

    tokio::time::sleep(Duration::from_millis(12_000)).await;
    assert_eq!(*index.borrow(), 0, "wraps after the last item");
}

#[tokio::test(start_paused = true)]
async fn test_hover_pauses_auto_advance() {
    let display = shared(RotatingDisplay::new(4, config(4000)).unwrap());
    let autoplay = Autoplay::spawn(display.clone());
    let index = autoplay.subscribe();

    lock_display(&display).pause();
    tokio::time::sleep(Duration::from_secs(20)).await;
    assert_eq!(*index.borrow(), 0);

    lock_display(&display).resume();
    tokio::time::sleep(Duration::from_millis(4050)).await;
    assert_eq!(*index.borrow(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_manual_navigation_is_published_and_halts() {
    let display = shared(RotatingDisplay::new(4, config(4000)).unwrap());
    let autoplay = Autoplay::spawn(display.clone());
    let mut index = autoplay.subscribe();

    lock_display(&display).next();
    index.changed().await.unwrap();
    assert_eq!(*index.borrow_and_update(), 1);
    assert_eq!(lock_display(&display).state(), RotationState::Halted);

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(*index.borrow(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_stops_the_task() {
    let display = shared(RotatingDisplay::new(3, config(1000)).unwrap());
    let autoplay = Autoplay::spawn(display.clone());

    tokio::time::sleep(Duration::from_millis(1050)).await;
    assert_eq!(lock_display(&display).index(), 1);

    drop(autoplay);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(lock_display(&display).index(), 1);
}
