//! Slide-in animation for carousel changes

use std::time::{Duration, Instant};

/// Which side the incoming card enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    /// Enters from the right (next item)
    #[default]
    Forward,
    /// Enters from the left (previous item)
    Backward,
}

/// Horizontal offset of the current card while it slides into place
#[derive(Debug, Clone, Default)]
pub struct SlideState {
    started_at: Option<Instant>,
    pub direction: SlideDirection,
    /// Signed column offset; 0 when settled
    pub offset: f32,
}

impl SlideState {
    /// Duration of the slide
    pub const DURATION: Duration = Duration::from_millis(500);

    /// Begin a new slide, restarting any slide in progress
    pub fn start(&mut self, direction: SlideDirection, now: Instant) {
        self.started_at = Some(now);
        self.direction = direction;
    }

    /// Recompute the offset for `now` over a card `width` columns wide
    pub fn update(&mut self, now: Instant, width: u16) {
        let Some(started_at) = self.started_at else {
            self.offset = 0.0;
            return;
        };

        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= Self::DURATION {
            self.started_at = None;
            self.offset = 0.0;
            return;
        }

        let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        // cubic ease-out: fast entry, slow settle
        let remaining = 1.0 - simple_easing::cubic_out(progress);
        let sign = match self.direction {
            SlideDirection::Forward => 1.0,
            SlideDirection::Backward => -1.0,
        };
        self.offset = sign * remaining * f32::from(width);
    }

    pub fn is_animating(&self) -> bool {
        self.started_at.is_some()
    }

    /// Offset rounded to whole columns
    pub fn columns(&self) -> i32 {
        self.offset.round() as i32
    }
}
