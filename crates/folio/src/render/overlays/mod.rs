pub mod detail;
pub mod full_gallery;
pub mod viewer;

use std::time::Instant;

/// Two-step overlay activation: the overlay is inserted inactive and marked
/// active two frames later, so the backdrop can animate in from the initial
/// style instead of popping.
pub struct Activation {
    frames: u32,
    activated_at: Option<Instant>,
}

impl Activation {
    const FRAMES: u32 = 2;
    const FADE_SECS: f32 = 0.25;

    pub fn new() -> Self {
        Self {
            frames: 0,
            activated_at: None,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.frames < Self::FRAMES {
            self.frames += 1;
            if self.frames == Self::FRAMES {
                self.activated_at = Some(now);
            }
        }
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        match self.activated_at {
            None => 0.0,
            Some(at) => (now.duration_since(at).as_secs_f32() / Self::FADE_SECS).min(1.0),
        }
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::new()
    }
}
