//! State machine for the image viewer overlay: zoom, pan, wheel-anchored
//! zoom, keyboard pan, swipe classification and gallery navigation with a
//! fade-out/swap/fade-in sequence. Pure state; the overlay renderer in
//! `render::overlays::viewer` feeds input in and draws from it.

use std::time::{Duration, Instant};

use eframe::egui::Vec2;

pub const SCALE_STEP: f32 = 0.2;
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 3.0;
pub const KEY_PAN_STEP: f32 = 20.0;
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Delay between starting the fade-out and swapping the displayed image.
pub const SWAP_DELAY: Duration = Duration::from_millis(200);
/// Duration of the fade-out and fade-in ramps.
pub const FADE_DURATION: Duration = Duration::from_millis(200);
/// Frames between inserting the overlay and marking it active, so the
/// backdrop can transition in from the inactive style.
const ACTIVATION_FRAMES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// Phase of the image swap started by `navigate`/`jump_to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwapPhase {
    Idle,
    /// The previously shown image fades to transparent; the displayed source
    /// stays `prior` until the delay elapses.
    FadeOut { prior: usize, since: Instant },
    /// Source swapped, zoom reset; waiting for the texture to be reported
    /// ready before fading back in.
    AwaitLoad,
    FadeIn { since: Instant },
}

pub struct ViewerSession {
    images: Vec<String>,
    current_index: usize,
    scale: f32,
    pan: Vec2,
    panning: bool,
    pan_anchor: Vec2,
    swipe_start: Option<Vec2>,
    swipe_move_x: f32,
    phase: SwapPhase,
    frames_open: u32,
    activated_at: Option<Instant>,
    closed: bool,
}

impl ViewerSession {
    pub fn new(images: Vec<String>, start_index: usize) -> Self {
        let last = images.len().saturating_sub(1);
        Self {
            current_index: start_index.min(last),
            images,
            scale: 1.0,
            pan: Vec2::ZERO,
            panning: false,
            pan_anchor: Vec2::ZERO,
            swipe_start: None,
            swipe_move_x: 0.0,
            phase: SwapPhase::Idle,
            frames_open: 0,
            activated_at: None,
            closed: false,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The image to draw this frame. During the fade-out half of a swap this
    /// is still the previous image.
    pub fn displayed_index(&self) -> usize {
        match self.phase {
            SwapPhase::FadeOut { prior, .. } => prior,
            _ => self.current_index,
        }
    }

    pub fn displayed_image(&self) -> Option<&str> {
        self.images.get(self.displayed_index()).map(String::as_str)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn is_zoomed(&self) -> bool {
        self.scale > 1.0
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    pub fn has_gallery(&self) -> bool {
        self.images.len() > 1
    }

    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.images.len())
    }

    pub fn can_navigate(&self, direction: NavDirection) -> bool {
        match direction {
            NavDirection::Previous => self.current_index > 0,
            NavDirection::Next => self.current_index + 1 < self.images.len(),
        }
    }

    // --- lifecycle ---

    /// Advance per-frame state: activation counting and swap phase timing.
    pub fn begin_frame(&mut self, now: Instant) {
        if self.frames_open < ACTIVATION_FRAMES {
            self.frames_open += 1;
            if self.frames_open == ACTIVATION_FRAMES {
                self.activated_at = Some(now);
            }
        }

        match self.phase {
            SwapPhase::FadeOut { since, .. } if now.duration_since(since) >= SWAP_DELAY => {
                self.reset_zoom();
                self.phase = SwapPhase::AwaitLoad;
            }
            SwapPhase::FadeIn { since } if now.duration_since(since) >= FADE_DURATION => {
                self.phase = SwapPhase::Idle;
            }
            _ => {}
        }
    }

    pub fn is_active(&self) -> bool {
        self.frames_open >= ACTIVATION_FRAMES
    }

    /// Backdrop/content opacity ramp after activation.
    pub fn backdrop_opacity(&self, now: Instant) -> f32 {
        match self.activated_at {
            None => 0.0,
            Some(at) => (now.duration_since(at).as_secs_f32() / 0.25).min(1.0),
        }
    }

    /// Opacity of the displayed image, factoring in a swap in progress.
    pub fn image_opacity(&self, now: Instant) -> f32 {
        let fade = FADE_DURATION.as_secs_f32();
        match self.phase {
            SwapPhase::Idle => 1.0,
            SwapPhase::FadeOut { since, .. } => {
                1.0 - (now.duration_since(since).as_secs_f32() / fade).min(1.0)
            }
            SwapPhase::AwaitLoad => 0.0,
            SwapPhase::FadeIn { since } => {
                (now.duration_since(since).as_secs_f32() / fade).min(1.0)
            }
        }
    }

    /// Whether a swap is waiting for the renderer to report the new texture.
    pub fn awaiting_load(&self) -> bool {
        self.phase == SwapPhase::AwaitLoad
    }

    /// Report that the texture for the current image is available; begins
    /// the fade-in half of a pending swap.
    pub fn texture_ready(&mut self, now: Instant) {
        if self.phase == SwapPhase::AwaitLoad {
            self.phase = SwapPhase::FadeIn { since: now };
        }
    }

    /// Idempotent close. The owning slot drops the session afterwards, which
    /// is what detaches its input handling.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    // --- zoom ---

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale + SCALE_STEP).min(MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale - SCALE_STEP).max(MIN_SCALE);
    }

    pub fn reset_zoom(&mut self) {
        self.scale = 1.0;
        self.pan = Vec2::ZERO;
    }

    /// Wheel zoom anchored under the cursor. `cursor_from_center` is the
    /// pointer offset from the image center with the current pan applied.
    pub fn zoom_at(&mut self, cursor_from_center: Vec2, zoom_in: bool) {
        let old = self.scale;
        self.scale = if zoom_in {
            (old + SCALE_STEP).min(MAX_SCALE)
        } else {
            (old - SCALE_STEP).max(MIN_SCALE)
        };
        let ratio = self.scale / old;
        self.pan = self.pan * ratio + cursor_from_center * (1.0 - ratio);
    }

    // --- pan ---

    /// Start dragging. Refused when not zoomed in.
    pub fn start_pan(&mut self, pointer: Vec2) -> bool {
        if !self.is_zoomed() {
            return false;
        }
        self.panning = true;
        self.pan_anchor = pointer - self.pan;
        true
    }

    pub fn continue_pan(&mut self, pointer: Vec2) {
        if self.panning {
            self.pan = pointer - self.pan_anchor;
        }
    }

    pub fn end_pan(&mut self) {
        self.panning = false;
    }

    /// Keyboard pan by a fixed step.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    // --- navigation ---

    /// Step through the gallery. No-op for single-image sessions and at the
    /// boundaries (no wraparound).
    pub fn navigate(&mut self, direction: NavDirection, now: Instant) {
        if !self.has_gallery() || !self.can_navigate(direction) {
            return;
        }
        let target = match direction {
            NavDirection::Previous => self.current_index - 1,
            NavDirection::Next => self.current_index + 1,
        };
        self.begin_swap(target, now);
    }

    /// Jump straight to an index (thumbnail strip). Same swap sequence as
    /// `navigate`.
    pub fn jump_to(&mut self, index: usize, now: Instant) {
        if !self.has_gallery() || index >= self.images.len() || index == self.current_index {
            return;
        }
        self.begin_swap(index, now);
    }

    fn begin_swap(&mut self, target: usize, now: Instant) {
        // A swap issued while one is pending retargets it; the fade restarts
        // from whatever opacity the image had.
        let prior = self.displayed_index();
        self.current_index = target;
        self.phase = SwapPhase::FadeOut { prior, since: now };
    }

    // --- swipe ---

    fn swipe_enabled(&self) -> bool {
        !self.is_zoomed() && self.has_gallery()
    }

    pub fn touch_start(&mut self, pos: Vec2) {
        if self.swipe_enabled() {
            self.swipe_start = Some(pos);
            self.swipe_move_x = pos.x;
        }
    }

    pub fn touch_move(&mut self, pos: Vec2) {
        if self.swipe_enabled() && self.swipe_start.is_some() {
            self.swipe_move_x = pos.x;
        }
    }

    /// Classify the finished gesture. Horizontal displacement uses the last
    /// move position, vertical the release position.
    pub fn touch_end(&mut self, pos: Vec2) -> Option<NavDirection> {
        if !self.swipe_enabled() {
            self.swipe_start = None;
            return None;
        }
        let start = self.swipe_start.take()?;
        let dx = start.x - self.swipe_move_x;
        let dy = (start.y - pos.y).abs();
        if dx.abs() > SWIPE_THRESHOLD && dx.abs() > dy {
            Some(if dx > 0.0 {
                NavDirection::Next
            } else {
                NavDirection::Previous
            })
        } else {
            None
        }
    }
}

/// Arena-of-one holder for the active viewer session. Opening always tears
/// down the previous session first, so at most one set of viewer input
/// handlers is ever live.
#[derive(Default)]
pub struct ViewerSlot {
    session: Option<ViewerSession>,
}

impl ViewerSlot {
    pub fn open(&mut self, images: Vec<String>, start_index: usize) -> &mut ViewerSession {
        if let Some(old) = self.session.as_mut() {
            old.close();
        }
        self.session.insert(ViewerSession::new(images, start_index))
    }

    pub fn active_mut(&mut self) -> Option<&mut ViewerSession> {
        self.session.as_mut().filter(|s| !s.is_closed())
    }

    pub fn is_open(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.is_closed())
    }

    /// Drop a session that has been closed this frame.
    pub fn reap(&mut self) {
        if self.session.as_ref().is_some_and(ViewerSession::is_closed) {
            self.session = None;
        }
    }

    pub fn close(&mut self) {
        if let Some(s) = self.session.as_mut() {
            s.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(n: usize, start: usize) -> ViewerSession {
        let images = (0..n).map(|i| format!("img{i}.png")).collect();
        ViewerSession::new(images, start)
    }

    #[test]
    fn scale_stays_clamped_under_any_zoom_sequence() {
        let mut s = session(1, 0);
        for _ in 0..50 {
            s.zoom_in();
        }
        assert_eq!(s.scale(), MAX_SCALE);
        for _ in 0..100 {
            s.zoom_out();
        }
        assert_eq!(s.scale(), MIN_SCALE);
        s.zoom_in();
        assert!(s.scale() >= MIN_SCALE && s.scale() <= MAX_SCALE);
    }

    #[test]
    fn reset_restores_identity_transform() {
        let mut s = session(1, 0);
        s.zoom_in();
        s.zoom_in();
        assert!(s.start_pan(Vec2::new(30.0, 40.0)));
        s.continue_pan(Vec2::new(90.0, 10.0));
        s.end_pan();
        s.zoom_at(Vec2::new(-20.0, 15.0), false);
        s.reset_zoom();
        assert_eq!(s.scale(), 1.0);
        assert_eq!(s.pan(), Vec2::ZERO);
    }

    #[test]
    fn pan_is_refused_at_base_scale() {
        let mut s = session(1, 0);
        assert!(!s.start_pan(Vec2::new(10.0, 10.0)));
        s.continue_pan(Vec2::new(50.0, 50.0));
        assert_eq!(s.pan(), Vec2::ZERO);
    }

    #[test]
    fn pan_follows_the_pointer_relative_to_its_anchor() {
        let mut s = session(1, 0);
        s.zoom_in();
        assert!(s.start_pan(Vec2::new(100.0, 100.0)));
        s.continue_pan(Vec2::new(130.0, 80.0));
        assert_eq!(s.pan(), Vec2::new(30.0, -20.0));
        s.end_pan();
        assert!(!s.is_panning());
    }

    #[test]
    fn wheel_zoom_keeps_the_cursor_point_anchored() {
        let mut s = session(1, 0);
        let cursor = Vec2::new(80.0, -40.0);
        s.zoom_at(cursor, true);
        // scale 1.0 -> 1.2, ratio 1.2: pan = cursor * (1 - 1.2)
        let expected = cursor * (1.0 - 1.2);
        assert!((s.pan() - expected).length() < 1e-4);
    }

    #[test]
    fn wheel_zoom_at_the_clamp_boundary_does_not_move_the_image() {
        let mut s = session(1, 0);
        for _ in 0..20 {
            s.zoom_in();
        }
        let pan_before = s.pan();
        s.zoom_at(Vec2::new(50.0, 50.0), true);
        // ratio is 1.0 at the clamp, so the pan must be unchanged
        assert_eq!(s.pan(), pan_before);
    }

    #[test]
    fn navigate_clamps_at_both_ends() {
        let now = Instant::now();
        let mut s = session(3, 0);
        s.navigate(NavDirection::Previous, now);
        assert_eq!(s.current_index(), 0);
        s.navigate(NavDirection::Next, now);
        assert_eq!(s.current_index(), 1);
        s.navigate(NavDirection::Next, now);
        s.navigate(NavDirection::Next, now);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn navigate_is_inert_for_single_image_sessions() {
        let now = Instant::now();
        let mut s = session(1, 0);
        s.navigate(NavDirection::Next, now);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.image_opacity(now), 1.0);
    }

    #[test]
    fn swap_shows_the_old_image_until_the_delay_elapses() {
        let t0 = Instant::now();
        let mut s = session(3, 1);
        s.zoom_in();
        s.navigate(NavDirection::Next, t0);
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.displayed_index(), 1);
        assert!(s.image_opacity(t0 + Duration::from_millis(100)) < 1.0);

        s.begin_frame(t0 + SWAP_DELAY);
        assert_eq!(s.displayed_index(), 2);
        // zoom resets at the swap point
        assert_eq!(s.scale(), 1.0);
        assert!(s.awaiting_load());
        assert_eq!(s.image_opacity(t0 + SWAP_DELAY), 0.0);

        let t1 = t0 + SWAP_DELAY + Duration::from_millis(5);
        s.texture_ready(t1);
        assert!(s.image_opacity(t1 + Duration::from_millis(100)) > 0.0);
        s.begin_frame(t1 + FADE_DURATION);
        assert_eq!(s.image_opacity(t1 + FADE_DURATION), 1.0);
    }

    #[test]
    fn rapid_navigation_retargets_the_pending_swap() {
        let t0 = Instant::now();
        let mut s = session(5, 0);
        s.navigate(NavDirection::Next, t0);
        s.navigate(NavDirection::Next, t0 + Duration::from_millis(50));
        assert_eq!(s.current_index(), 2);
        // still fading from the image that was on screen
        assert_eq!(s.displayed_index(), 0);
    }

    #[test]
    fn jump_to_current_index_is_a_no_op() {
        let now = Instant::now();
        let mut s = session(4, 2);
        s.jump_to(2, now);
        assert_eq!(s.image_opacity(now), 1.0);
        s.jump_to(0, now);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn activation_takes_two_frames() {
        let t0 = Instant::now();
        let mut s = session(1, 0);
        assert!(!s.is_active());
        assert_eq!(s.backdrop_opacity(t0), 0.0);
        s.begin_frame(t0);
        assert!(!s.is_active());
        s.begin_frame(t0 + Duration::from_millis(16));
        assert!(s.is_active());
        assert!(s.backdrop_opacity(t0 + Duration::from_millis(300)) > 0.5);
    }

    #[test]
    fn swipe_requires_threshold_and_horizontal_dominance() {
        let mut s = session(3, 1);
        s.touch_start(Vec2::new(200.0, 100.0));
        s.touch_move(Vec2::new(130.0, 100.0));
        assert_eq!(
            s.touch_end(Vec2::new(130.0, 110.0)),
            Some(NavDirection::Next)
        );

        s.touch_start(Vec2::new(100.0, 100.0));
        s.touch_move(Vec2::new(160.0, 100.0));
        assert_eq!(
            s.touch_end(Vec2::new(160.0, 95.0)),
            Some(NavDirection::Previous)
        );

        // below threshold
        s.touch_start(Vec2::new(100.0, 100.0));
        s.touch_move(Vec2::new(140.0, 100.0));
        assert_eq!(s.touch_end(Vec2::new(140.0, 100.0)), None);

        // vertical swipe dominates
        s.touch_start(Vec2::new(100.0, 100.0));
        s.touch_move(Vec2::new(30.0, 100.0));
        assert_eq!(s.touch_end(Vec2::new(30.0, 300.0)), None);
    }

    #[test]
    fn swipe_is_disabled_when_zoomed_or_without_a_gallery() {
        let mut zoomed = session(3, 0);
        zoomed.zoom_in();
        zoomed.touch_start(Vec2::new(200.0, 100.0));
        zoomed.touch_move(Vec2::new(50.0, 100.0));
        assert_eq!(zoomed.touch_end(Vec2::new(50.0, 100.0)), None);

        let mut single = session(1, 0);
        single.touch_start(Vec2::new(200.0, 100.0));
        single.touch_move(Vec2::new(50.0, 100.0));
        assert_eq!(single.touch_end(Vec2::new(50.0, 100.0)), None);
    }

    #[test]
    fn close_is_idempotent() {
        let mut s = session(2, 0);
        s.close();
        s.close();
        assert!(s.is_closed());
    }

    #[test]
    fn opening_a_second_session_tears_down_the_first() {
        let mut slot = ViewerSlot::default();
        slot.open(vec!["a.png".into()], 0);
        assert!(slot.is_open());
        slot.open(vec!["b.png".into(), "c.png".into()], 1);
        let s = slot.active_mut().unwrap();
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.images().len(), 2);
        // exactly one session present afterwards
        assert!(slot.is_open());
        slot.close();
        slot.reap();
        assert!(!slot.is_open());
        assert!(slot.active_mut().is_none());
    }

    #[test]
    fn start_index_is_clamped_into_range() {
        let s = session(3, 9);
        assert_eq!(s.current_index(), 2);
    }
}
