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

//! Rotating Display Controller.
//!
//! Drives review and testimonial carousels: an index into a fixed, non-empty
//! sequence that advances on a timer, pauses while the pointer hovers or a
//! drag is in progress, and can be moved by hand (arrows, dots, swipes).
//!
//! The controller is clock-agnostic. Callers feed it elapsed time through
//! [`RotatingDisplay::advance`] (see [`crate::autoplay`]) or whole intervals
//! through [`RotatingDisplay::tick`].

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("a rotating display needs at least one item")]
    Empty,
    #[error("auto-advance interval must be non-zero")]
    ZeroInterval,
    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// What happens to auto-advance after the user presses next/prev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManualNavigation {
    /// Stop auto-advancing for the rest of the display's life.
    #[default]
    HaltAutoplay,
    /// Keep auto-advancing; the next automatic step is a full interval away.
    RestartCountdown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub interval: Duration,
    /// Drag distance in pixels that must be exceeded to count as a swipe.
    pub swipe_threshold: f32,
    pub manual_navigation: ManualNavigation,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(6),
            swipe_threshold: 10.0,
            manual_navigation: ManualNavigation::HaltAutoplay,
        }
    }
}

impl CarouselConfig {
    pub fn from_site_config(config: &agency_client::SiteConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.carousel_interval_ms),
            swipe_threshold: config.swipe_threshold_px,
            ..Self::default()
        }
    }
}

/// Why a display is paused. Both can hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PauseReasons {
    pub hover: bool,
    pub drag: bool,
}

impl PauseReasons {
    fn any(self) -> bool {
        self.hover || self.drag
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    /// Auto-advancing.
    Running,
    /// Auto-advance suspended until every reason clears.
    Paused(PauseReasons),
    /// Auto-advance switched off by manual navigation. Hover and drag no
    /// longer change the state.
    Halted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Next,
    Previous,
    /// Released inside the threshold; the index did not change.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct RotatingDisplay {
    len: usize,
    index: usize,
    state: RotationState,
    last_direction: Option<Direction>,
    /// Time accumulated towards the next automatic step.
    elapsed: Duration,
    /// Horizontal offset of the drag in progress, if any.
    drag_offset: Option<f32>,
    config: CarouselConfig,
}

impl RotatingDisplay {
    pub fn new(len: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        if config.interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Self {
            len,
            index: 0,
            state: RotationState::Running,
            last_direction: None,
            elapsed: Duration::ZERO,
            drag_offset: None,
            config,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn item_count(&self) -> usize {
        self.len
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RotationState::Running
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    pub fn drag_offset(&self) -> Option<f32> {
        self.drag_offset
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Feed `elapsed` wall time. Steps forward once per full interval while
    /// running and returns how many steps were taken.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if !self.is_running() {
            return 0;
        }
        self.elapsed = self.elapsed.saturating_add(elapsed);
        let interval_ns = self.config.interval.as_nanos();
        let total_ns = self.elapsed.as_nanos();
        let steps = total_ns / interval_ns;
        if steps == 0 {
            return 0;
        }
        // The remainder is below one interval, so it fits in a u64.
        self.elapsed = Duration::from_nanos((total_ns % interval_ns) as u64);
        let len = self.len as u128;
        self.index = ((self.index as u128 + steps % len) % len) as usize;
        usize::try_from(steps).unwrap_or(usize::MAX)
    }

    /// One full interval elapsed. Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        self.advance(self.config.interval) > 0
    }

    /// Pointer entered the display.
    pub fn pause(&mut self) {
        self.update_reasons(|r| r.hover = true);
    }

    /// Pointer left the display.
    pub fn resume(&mut self) {
        self.update_reasons(|r| r.hover = false);
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
        self.after_manual(Direction::Forward);
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
        self.after_manual(Direction::Backward);
    }

    /// Jump straight to `index` (pagination dots). Leaves the rotation state
    /// alone.
    pub fn select_index(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    pub fn drag_start(&mut self) {
        self.drag_offset = Some(0.0);
        self.update_reasons(|r| r.drag = true);
    }

    /// Update the drag's horizontal offset from its start point.
    /// Ignored when no drag is in progress.
    pub fn drag_update(&mut self, offset: f32) {
        if let Some(current) = self.drag_offset.as_mut() {
            *current = offset;
        }
    }

    /// Release the drag. Past `-threshold` moves forward, past `+threshold`
    /// moves back; anything else leaves the index where it was.
    pub fn drag_end(&mut self) -> SwipeOutcome {
        let Some(offset) = self.drag_offset.take() else {
            return SwipeOutcome::Cancelled;
        };
        self.update_reasons(|r| r.drag = false);

        let threshold = self.config.swipe_threshold;
        if offset < -threshold {
            self.next();
            SwipeOutcome::Next
        } else if offset > threshold {
            self.prev();
            SwipeOutcome::Previous
        } else {
            SwipeOutcome::Cancelled
        }
    }

    fn after_manual(&mut self, direction: Direction) {
        self.last_direction = Some(direction);
        match self.config.manual_navigation {
            ManualNavigation::HaltAutoplay => {
                if self.state != RotationState::Halted {
                    log::debug!("manual navigation halted autoplay");
                }
                self.state = RotationState::Halted;
            }
            ManualNavigation::RestartCountdown => self.elapsed = Duration::ZERO,
        }
    }

    fn update_reasons(&mut self, change: impl FnOnce(&mut PauseReasons)) {
        let mut reasons = match self.state {
            RotationState::Halted => return,
            RotationState::Running => PauseReasons::default(),
            RotationState::Paused(reasons) => reasons,
        };
        change(&mut reasons);
        self.state = if reasons.any() {
            RotationState::Paused(reasons)
        } else {
            if self.state != RotationState::Running {
                // A resumed timer starts a fresh interval.
                self.elapsed = Duration::ZERO;
            }
            RotationState::Running
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(len: usize) -> RotatingDisplay {
        RotatingDisplay::new(len, CarouselConfig::default()).unwrap()
    }

    fn restarting(len: usize) -> RotatingDisplay {
        RotatingDisplay::new(
            len,
            CarouselConfig {
                manual_navigation: ManualNavigation::RestartCountdown,
                ..CarouselConfig::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        assert_eq!(
            RotatingDisplay::new(0, CarouselConfig::default()).unwrap_err(),
            CarouselError::Empty
        );
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let config = CarouselConfig {
            interval: Duration::ZERO,
            ..CarouselConfig::default()
        };
        assert_eq!(
            RotatingDisplay::new(3, config).unwrap_err(),
            CarouselError::ZeroInterval
        );
    }

    #[test]
    fn test_initial_state() {
        let d = display(3);
        assert_eq!(d.index(), 0);
        assert_eq!(d.state(), RotationState::Running);
        assert!(d.last_direction().is_none());
    }

    #[test]
    fn test_next_wraps_around() {
        let mut d = display(4);
        d.next();
        d.next();
        d.next();
        assert_eq!(d.index(), 3);
        d.next();
        assert_eq!(d.index(), 0);
        assert_eq!(d.last_direction(), Some(Direction::Forward));
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut d = display(4);
        d.prev();
        assert_eq!(d.index(), 3);
        assert_eq!(d.last_direction(), Some(Direction::Backward));
    }

    #[test]
    fn test_single_item_stays_at_zero() {
        let mut d = display(1);
        d.next();
        d.prev();
        d.tick();
        assert_eq!(d.index(), 0);
    }

    #[test]
    fn test_tick_advances_only_while_running() {
        let mut d = display(3);
        assert!(d.tick());
        assert_eq!(d.index(), 1);

        d.pause();
        assert!(!d.tick());
        assert_eq!(d.index(), 1);

        d.resume();
        assert!(d.tick());
        assert_eq!(d.index(), 2);
    }

    #[test]
    fn test_advance_accumulates_partial_intervals() {
        let mut d = display(5);
        assert_eq!(d.advance(Duration::from_secs(4)), 0);
        assert_eq!(d.advance(Duration::from_secs(4)), 1);
        assert_eq!(d.index(), 1);
        // 2s carried over, 16s more makes 18s: three steps.
        assert_eq!(d.advance(Duration::from_secs(16)), 3);
        assert_eq!(d.index(), 4);
    }

    #[test]
    fn test_resume_starts_a_fresh_interval() {
        let mut d = display(3);
        d.advance(Duration::from_secs(5));
        d.pause();
        d.resume();
        assert_eq!(d.advance(Duration::from_secs(5)), 0);
        assert_eq!(d.advance(Duration::from_secs(1)), 1);
    }

    #[test]
    fn test_manual_navigation_halts_autoplay_by_default() {
        let mut d = display(3);
        d.next();
        assert_eq!(d.state(), RotationState::Halted);
        assert!(!d.tick());
        d.pause();
        d.resume();
        assert_eq!(d.state(), RotationState::Halted);
        assert_eq!(d.index(), 1);
    }

    #[test]
    fn test_manual_navigation_can_restart_countdown() {
        let mut d = restarting(3);
        d.advance(Duration::from_secs(5));
        d.next();
        assert_eq!(d.state(), RotationState::Running);
        assert_eq!(d.advance(Duration::from_secs(5)), 0);
        assert_eq!(d.index(), 1);
        assert_eq!(d.advance(Duration::from_secs(1)), 1);
        assert_eq!(d.index(), 2);
    }

    #[test]
    fn test_select_index_is_bounds_checked() {
        let mut d = display(3);
        d.select_index(2).unwrap();
        assert_eq!(d.index(), 2);
        assert_eq!(
            d.select_index(3),
            Err(CarouselError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(d.index(), 2);
        assert_eq!(d.state(), RotationState::Running);
    }

    #[test]
    fn test_swipe_left_past_threshold_goes_next() {
        let mut d = restarting(3);
        d.drag_start();
        d.drag_update(-15.0);
        assert_eq!(d.drag_end(), SwipeOutcome::Next);
        assert_eq!(d.index(), 1);
        assert_eq!(d.state(), RotationState::Running);
    }

    #[test]
    fn test_small_drag_does_not_navigate() {
        let mut d = display(3);
        d.drag_start();
        d.drag_update(-5.0);
        assert_eq!(d.drag_end(), SwipeOutcome::Cancelled);
        assert_eq!(d.index(), 0);
        assert_eq!(d.state(), RotationState::Running);
    }

    #[test]
    fn test_swipe_right_goes_back() {
        let mut d = display(3);
        d.drag_start();
        d.drag_update(40.0);
        assert_eq!(d.drag_end(), SwipeOutcome::Previous);
        assert_eq!(d.index(), 2);
        assert_eq!(d.state(), RotationState::Halted);
    }

    #[test]
    fn test_offset_equal_to_threshold_is_not_a_swipe() {
        let mut d = display(3);
        d.drag_start();
        d.drag_update(-10.0);
        assert_eq!(d.drag_end(), SwipeOutcome::Cancelled);
    }

    #[test]
    fn test_drag_end_without_start_is_ignored() {
        let mut d = display(3);
        d.drag_update(-50.0);
        assert_eq!(d.drag_end(), SwipeOutcome::Cancelled);
        assert_eq!(d.index(), 0);
    }

    #[test]
    fn test_hover_and_drag_pause_independently() {
        let mut d = display(3);
        d.pause();
        d.drag_start();
        assert_eq!(
            d.state(),
            RotationState::Paused(PauseReasons {
                hover: true,
                drag: true
            })
        );

        d.drag_end();
        assert_eq!(
            d.state(),
            RotationState::Paused(PauseReasons {
                hover: true,
                drag: false
            })
        );
        assert!(!d.tick());

        d.resume();
        assert_eq!(d.state(), RotationState::Running);
    }

    #[test]
    fn test_index_stays_in_range_for_mixed_operations() {
        for len in 1..=6 {
            let mut d = restarting(len);
            for step in 0..200usize {
                match step % 7 {
                    0 | 3 => d.next(),
                    1 => d.prev(),
                    2 => {
                        d.tick();
                    }
                    4 => {
                        d.advance(Duration::from_millis(step as u64 * 97));
                    }
                    5 => {
                        d.drag_start();
                        d.drag_update(if step % 2 == 0 { -30.0 } else { 30.0 });
                        d.drag_end();
                    }
                    _ => {
                        let _ = d.select_index(step % (len + 1));
                    }
                }
                assert!(d.index() < len, "index {} out of range for {len}", d.index());
            }
        }
    }

    #[test]
    fn test_absurd_elapsed_saturates() {
        let mut d = restarting(3);
        d.advance(Duration::from_millis(1));
        let steps = d.advance(Duration::MAX);
        assert!(steps > 0);
        assert!(d.index() < 3);
        assert!(d.is_running());
    }
}
