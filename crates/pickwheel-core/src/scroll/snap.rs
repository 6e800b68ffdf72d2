//! L3 Molecular Layer: Snapping page scroller
//!
//! Tracks a continuous position along one axis and resolves gestures to a
//! whole page. Positions are kept in page units so the geometry can change
//! (resize) without moving the content.
//!
//! ```text
//! Idle(settled) --begin/drag--> Dragging --end_gesture--> Settling --update--> Idle(settled)
//!                                   ^                         |
//!                                   +-------begin/drag--------+   (animation aborted in place)
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use super::easing::EasingType;
use super::timing::{is_complete_at, lerp, progress_at};
use super::viewport::Viewport;
use crate::config::ScrollConfig;

/// Positions closer than this to a page count as resting on it
const SNAP_EPSILON: f64 = 1e-6;

/// Observable phase of the scroller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    /// Resting exactly on the settled page
    Idle,
    /// Following a gesture
    Dragging,
    /// Animating towards a target page
    Settling,
}

/// In-flight settle animation
#[derive(Debug, Clone)]
struct Settle {
    start: Instant,
    /// Position (in pages) when the animation started
    from: f64,
    to: usize,
    duration: Duration,
    easing: EasingType,
}

#[derive(Debug, Clone)]
enum Motion {
    Idle,
    /// `origin` is the page that was current when the gesture began
    Dragging { origin: usize },
    Settling(Settle),
}

/// Single-axis scroller that always comes to rest on a whole page
///
/// Call the gesture methods from input handlers and `update_at()` once per
/// frame. Every method that can bring the scroller to rest returns
/// `Some(page)` when it does.
#[derive(Debug, Clone)]
pub struct SnapScroller {
    page_count: usize,
    /// Continuous position in pages (page `p` rests at `p as f64`)
    position: f64,
    settled_page: usize,
    motion: Motion,
    /// Pages at each end that can be scrolled into but never settled on
    snap_inset: usize,
    viewport: Viewport,
    config: ScrollConfig,
}

impl SnapScroller {
    /// Create a scroller resting on `start_page` (clamped into range)
    pub fn new(page_count: usize, start_page: usize, viewport: Viewport, config: ScrollConfig) -> Self {
        let start = start_page.min(page_count.saturating_sub(1));
        Self {
            page_count,
            position: start as f64,
            settled_page: start,
            motion: Motion::Idle,
            snap_inset: 0,
            viewport,
            config,
        }
    }

    /// Exclude `inset` pages at each end from settling
    ///
    /// Ignored when fewer than one page would remain. The resting page is
    /// moved into the allowed range.
    pub fn with_snap_inset(mut self, inset: usize) -> Self {
        self.snap_inset = inset;
        let page = self.clamp_to_snap(self.settled_page as f64);
        self.position = page as f64;
        self.settled_page = page;
        self
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    /// Change the axis geometry, keeping the content where it is
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn phase(&self) -> ScrollPhase {
        match self.motion {
            Motion::Idle => ScrollPhase::Idle,
            Motion::Dragging { .. } => ScrollPhase::Dragging,
            Motion::Settling(_) => ScrollPhase::Settling,
        }
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        matches!(self.motion, Motion::Idle)
    }

    /// True while a settle animation needs frames
    #[inline]
    pub fn needs_update(&self) -> bool {
        matches!(self.motion, Motion::Settling(_))
    }

    /// Continuous position in pages
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Continuous offset in axis units
    #[inline]
    pub fn offset(&self) -> f64 {
        self.position * self.viewport.stride()
    }

    /// Nearest whole page to the current position
    pub fn current_page(&self) -> usize {
        let last = self.page_count.saturating_sub(1);
        (self.position.round().max(0.0) as usize).min(last)
    }

    /// Page of the last completed settle
    pub fn settled_page(&self) -> usize {
        self.settled_page
    }

    /// Page the scroller is heading to
    ///
    /// While dragging this is where a zero-velocity release would settle.
    pub fn target_page(&self) -> usize {
        match &self.motion {
            Motion::Idle => self.settled_page,
            Motion::Dragging { .. } => self.clamp_to_snap(self.position.round()),
            Motion::Settling(settle) => settle.to,
        }
    }

    /// Closeness of `page` to the current position: 1 on it, 0 a page or more away
    pub fn proximity(&self, page: usize) -> f32 {
        (1.0 - (self.position - page as f64).abs()).clamp(0.0, 1.0) as f32
    }

    /// Start following a gesture
    ///
    /// An in-flight settle is dropped where it is; the position is not
    /// rolled back and nothing is queued.
    pub fn begin_gesture(&mut self) {
        let origin = match &self.motion {
            Motion::Dragging { .. } => return,
            Motion::Idle => self.settled_page,
            Motion::Settling(settle) => {
                debug!(
                    target_page = settle.to,
                    position = self.position,
                    "Settle interrupted by new gesture"
                );
                self.clamp_to_snap(self.position.round())
            }
        };
        self.motion = Motion::Dragging { origin };
    }

    /// Move by `delta` axis units (positive scrolls towards higher pages)
    pub fn drag_by(&mut self, delta: f64) {
        if !matches!(self.motion, Motion::Dragging { .. }) {
            self.begin_gesture();
        }
        if !delta.is_finite() {
            return;
        }
        let pages = delta / self.viewport.stride();
        self.position = (self.position + pages).clamp(0.0, self.max_position());
    }

    /// Release the gesture with `velocity` in axis units per second
    ///
    /// Picks the nearest page, or for a fling the page the projected motion
    /// reaches (at least one page in the fling direction). The result is
    /// never more than `max_snap_pages` away from the page that was current
    /// when the gesture began. Ignored unless dragging.
    pub fn end_gesture(&mut self, velocity: f64, now: Instant) -> Option<usize> {
        let origin = match self.motion {
            Motion::Dragging { origin } => origin,
            _ => return None,
        };

        let pages_per_sec = if velocity.is_nan() {
            0.0
        } else {
            velocity / self.viewport.stride()
        };

        let raw_target = if pages_per_sec.abs() < self.config.fling_threshold {
            self.position.round()
        } else {
            let projection = Duration::from_millis(self.config.fling_projection_ms).as_secs_f64();
            let projected = (self.position + pages_per_sec * projection).round();
            if pages_per_sec > 0.0 {
                projected.max(self.position.floor() + 1.0)
            } else {
                projected.min(self.position.ceil() - 1.0)
            }
        };

        let target = self.cap_from(origin, raw_target);
        debug!(
            origin,
            target,
            velocity = pages_per_sec,
            position = self.position,
            "Gesture released"
        );
        self.settle_towards(target, now)
    }

    /// Animate to `page` without a gesture (keyboard, wheel)
    ///
    /// Chains from an in-flight settle target and obeys the same snap cap.
    pub fn animate_to_page(&mut self, page: usize, now: Instant) -> Option<usize> {
        let origin = self.target_page();
        let target = self.cap_from(origin, page as f64);
        self.settle_towards(target, now)
    }

    /// Animate `pages` pages forward (negative = back) from the current target
    pub fn step(&mut self, pages: isize, now: Instant) -> Option<usize> {
        let base = self.target_page() as isize;
        let page = base.saturating_add(pages).max(0) as usize;
        self.animate_to_page(page, now)
    }

    /// Animate to `page` clamped only to the snap range
    ///
    /// For explicit jumps such as first / last item, which must reach their
    /// page however far away it is.
    pub fn seek_page(&mut self, page: usize, now: Instant) -> Option<usize> {
        let target = self.clamp_to_snap(page as f64);
        self.settle_towards(target, now)
    }

    /// Land an in-flight settle on its target now
    ///
    /// Returns `None` when nothing was settling.
    pub fn complete_settle(&mut self) -> Option<usize> {
        let to = match &self.motion {
            Motion::Settling(settle) => settle.to,
            _ => return None,
        };
        self.finish_settle(to)
    }

    /// Rest on `page` immediately, dropping any gesture or animation
    pub fn jump_to_page(&mut self, page: usize) -> Option<usize> {
        let page = self.clamp_to_snap(page as f64);
        self.finish_settle(page)
    }

    /// Advance the settle animation to `now`
    pub fn update_at(&mut self, now: Instant) -> Option<usize> {
        let settle = match &self.motion {
            Motion::Settling(settle) => settle.clone(),
            _ => return None,
        };

        if is_complete_at(settle.start, now, settle.duration) {
            return self.finish_settle(settle.to);
        }

        let t = settle.easing.apply(progress_at(settle.start, now, settle.duration));
        self.position = lerp(settle.from, settle.to as f64, t).clamp(0.0, self.max_position());
        None
    }

    /// Advance the settle animation to the current instant
    pub fn update(&mut self) -> Option<usize> {
        self.update_at(Instant::now())
    }

    /// Resize the page list, re-clamping position, settle target and resting page
    ///
    /// Returns `Some(page)` when a resting scroller had to move.
    pub fn set_page_count(&mut self, page_count: usize) -> Option<usize> {
        self.page_count = page_count;
        self.position = self.position.clamp(0.0, self.max_position());

        let settled = self.clamp_to_snap(self.settled_page as f64);
        match self.phase() {
            ScrollPhase::Idle => {
                if settled != self.settled_page || (self.position - settled as f64).abs() > SNAP_EPSILON {
                    debug!(page_count, page = settled, "Page list shrank under resting page");
                    return self.finish_settle(settled);
                }
                None
            }
            ScrollPhase::Dragging => {
                self.settled_page = settled;
                if let Motion::Dragging { origin } = self.motion {
                    let origin = self.clamp_to_snap(origin as f64);
                    self.motion = Motion::Dragging { origin };
                }
                None
            }
            ScrollPhase::Settling => {
                self.settled_page = settled;
                let clamped = self.clamp_to_snap(self.target_page() as f64);
                if let Motion::Settling(settle) = &mut self.motion {
                    if settle.to != clamped {
                        debug!(page_count, from = settle.to, to = clamped, "Settle target re-clamped");
                        settle.to = clamped;
                    }
                }
                None
            }
        }
    }

    fn settle_towards(&mut self, target: usize, now: Instant) -> Option<usize> {
        let smooth = self.config.smooth_enabled && self.config.animation_duration_ms > 0;
        if !smooth || (self.position - target as f64).abs() < SNAP_EPSILON {
            return self.finish_settle(target);
        }

        self.motion = Motion::Settling(Settle {
            start: now,
            from: self.position,
            to: target,
            duration: Duration::from_millis(self.config.animation_duration_ms),
            easing: self.config.easing,
        });
        None
    }

    fn finish_settle(&mut self, page: usize) -> Option<usize> {
        self.position = page as f64;
        self.settled_page = page;
        self.motion = Motion::Idle;
        debug!(page, "Scroller settled");
        Some(page)
    }

    /// Clamp `raw` to the snap cap around `origin` and the snap range
    fn cap_from(&self, origin: usize, raw: f64) -> usize {
        let max = self.config.max_snap_pages as f64;
        let origin = origin as f64;
        let capped = if raw.is_nan() {
            origin
        } else {
            raw.clamp(origin - max, origin + max)
        };
        self.clamp_to_snap(capped)
    }

    fn clamp_to_snap(&self, page: f64) -> usize {
        let (lo, hi) = self.snap_bounds();
        if page.is_nan() || page <= lo as f64 {
            return lo;
        }
        (page.round() as usize).clamp(lo, hi)
    }

    fn snap_bounds(&self) -> (usize, usize) {
        let last = self.page_count.saturating_sub(1);
        if self.page_count > 2 * self.snap_inset {
            (self.snap_inset, last - self.snap_inset)
        } else {
            (0, last)
        }
    }

    fn max_position(&self) -> f64 {
        self.page_count.saturating_sub(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            ..Default::default()
        }
    }

    fn scroller(pages: usize, start: usize) -> SnapScroller {
        SnapScroller::new(pages, start, Viewport::default(), config())
    }

    fn later(now: Instant) -> Instant {
        now + Duration::from_secs(5)
    }

    #[test]
    fn test_start_page_is_clamped() {
        assert_eq!(scroller(5, 99).current_page(), 4);
        assert_eq!(scroller(5, 2).current_page(), 2);
        assert_eq!(scroller(0, 3).current_page(), 0);
        assert!(scroller(5, 99).is_settled());
    }

    #[test]
    fn test_zero_net_drag_returns_to_start() {
        let now = Instant::now();
        let mut s = scroller(10, 4);
        s.drag_by(0.4);
        s.drag_by(-0.7);
        s.drag_by(0.3);
        assert_eq!(s.phase(), ScrollPhase::Dragging);

        let settled = s.end_gesture(0.0, now).or_else(|| s.update_at(later(now)));
        assert_eq!(settled, Some(4));
        assert_eq!(s.current_page(), 4);
        assert!(s.is_settled());
    }

    #[test]
    fn test_release_settles_on_nearest_page() {
        let now = Instant::now();
        let mut s = scroller(10, 4);
        s.drag_by(0.6);
        assert_eq!(s.end_gesture(0.0, now), None);
        assert_eq!(s.phase(), ScrollPhase::Settling);
        assert_eq!(s.target_page(), 5);

        assert_eq!(s.update_at(later(now)), Some(5));
        assert_eq!(s.phase(), ScrollPhase::Idle);
        assert_eq!(s.position(), 5.0);
    }

    #[test]
    fn test_drag_does_not_settle() {
        let mut s = scroller(10, 4);
        s.drag_by(2.2);
        assert_eq!(s.settled_page(), 4);
        assert_eq!(s.current_page(), 6);
        assert_eq!(s.update_at(later(Instant::now())), None);
        assert_eq!(s.phase(), ScrollPhase::Dragging);
    }

    #[test]
    fn test_fling_is_capped_at_ten_pages() {
        let now = Instant::now();
        for velocity in [1e9, f64::INFINITY, -1e9, f64::NEG_INFINITY] {
            let mut s = scroller(100, 50);
            s.drag_by(0.1_f64.copysign(velocity));
            s.end_gesture(velocity, now);
            let target = s.target_page();
            assert!(target.abs_diff(50) <= 10, "velocity {} -> {}", velocity, target);
            assert_eq!(target.abs_diff(50), 10);
        }
    }

    #[test]
    fn test_long_drag_is_capped_too() {
        let now = Instant::now();
        let mut s = scroller(100, 50);
        s.drag_by(25.0);
        s.end_gesture(0.0, now);
        assert_eq!(s.target_page(), 60);
    }

    #[test]
    fn test_fling_moves_at_least_one_page() {
        let now = Instant::now();
        let mut s = scroller(100, 50);
        s.drag_by(0.1);
        // 3 pages/s projected over 300ms lands on 51
        s.end_gesture(3.0, now);
        assert_eq!(s.target_page(), 51);

        let mut s = scroller(100, 50);
        s.drag_by(-0.05);
        s.end_gesture(-2.5, now);
        assert_eq!(s.target_page(), 49);
    }

    #[test]
    fn test_slow_release_ignores_direction() {
        let now = Instant::now();
        let mut s = scroller(100, 50);
        s.drag_by(0.3);
        s.end_gesture(1.0, now);
        assert_eq!(s.target_page(), 50);
    }

    #[test]
    fn test_velocity_is_scaled_by_stride() {
        let now = Instant::now();
        let viewport = Viewport::new(300.0, 0.0);
        let mut s = SnapScroller::new(100, 50, viewport, config());
        s.drag_by(10.0);
        // 150 units/s is 1.5 pages/s, below the fling threshold
        s.end_gesture(150.0, now);
        assert_eq!(s.target_page(), 50);
    }

    #[test]
    fn test_new_gesture_cancels_settle_in_place() {
        let now = Instant::now();
        let mut s = SnapScroller::new(
            20,
            5,
            Viewport::default(),
            ScrollConfig {
                animation_duration_ms: 1000,
                easing: EasingType::Linear,
                ..Default::default()
            },
        );
        s.drag_by(0.6);
        s.end_gesture(0.0, now);
        s.step(3, now);
        assert_eq!(s.target_page(), 9);

        s.update_at(now + Duration::from_millis(500));
        let mid = s.position();
        assert!(mid > 5.6 && mid < 9.0);

        s.begin_gesture();
        assert_eq!(s.phase(), ScrollPhase::Dragging);
        assert_eq!(s.position(), mid);
        assert_eq!(s.update_at(later(now)), None);

        let settled = s.end_gesture(0.0, now).or_else(|| s.update_at(later(now)));
        assert_eq!(settled, Some(mid.round() as usize));
    }

    #[test]
    fn test_proximity() {
        let mut s = scroller(10, 4);
        assert_eq!(s.proximity(4), 1.0);
        assert_eq!(s.proximity(3), 0.0);
        assert_eq!(s.proximity(5), 0.0);

        s.drag_by(0.25);
        assert!((s.proximity(4) - 0.75).abs() < 1e-6);
        assert!((s.proximity(5) - 0.25).abs() < 1e-6);
        assert_eq!(s.proximity(6), 0.0);
    }

    #[test]
    fn test_snap_inset_keeps_sentinels_out() {
        let now = Instant::now();
        let mut s = scroller(7, 0).with_snap_inset(1);
        assert_eq!(s.current_page(), 1);

        s.drag_by(-5.0);
        assert_eq!(s.position(), 0.0);
        let settled = s.end_gesture(0.0, now).or_else(|| s.update_at(later(now)));
        assert_eq!(settled, Some(1));

        s.drag_by(20.0);
        s.end_gesture(0.0, now);
        assert_eq!(s.update_at(later(now)), Some(5));
    }

    #[test]
    fn test_disabled_animation_settles_immediately() {
        let now = Instant::now();
        let mut s = SnapScroller::new(
            10,
            2,
            Viewport::default(),
            ScrollConfig {
                smooth_enabled: false,
                ..Default::default()
            },
        );
        s.drag_by(1.4);
        assert_eq!(s.end_gesture(0.0, now), Some(3));
        assert!(s.is_settled());
    }

    #[test]
    fn test_steps_chain_from_target() {
        let now = Instant::now();
        let mut s = scroller(30, 10);
        s.step(1, now);
        s.step(1, now);
        assert_eq!(s.target_page(), 12);
        s.step(-40, now);
        assert_eq!(s.target_page(), 2);
        assert_eq!(s.update_at(later(now)), Some(2));
    }

    #[test]
    fn test_seek_reaches_far_pages() {
        let now = Instant::now();
        let mut s = scroller(30, 2);
        s.animate_to_page(29, now);
        assert_eq!(s.target_page(), 12);

        assert_eq!(s.seek_page(29, now), None);
        assert_eq!(s.target_page(), 29);
        assert_eq!(s.update_at(later(now)), Some(29));

        s.seek_page(0, now);
        assert_eq!(s.update_at(later(now)), Some(0));
    }

    #[test]
    fn test_complete_settle_lands_on_target() {
        let now = Instant::now();
        let mut s = scroller(30, 10);
        assert_eq!(s.complete_settle(), None);

        s.step(3, now);
        s.update_at(now + Duration::from_millis(20));
        assert!(s.needs_update());
        assert_eq!(s.complete_settle(), Some(13));
        assert!(s.is_settled());
        assert_eq!(s.current_page(), 13);
        assert_eq!(s.update_at(later(now)), None);
    }

    #[test]
    fn test_shrink_while_idle_reclamps() {
        let mut s = scroller(32, 30).with_snap_inset(1);
        assert_eq!(s.set_page_count(29), Some(27));
        assert_eq!(s.current_page(), 27);
        assert_eq!(s.set_page_count(40), None);
        assert_eq!(s.current_page(), 27);
    }

    #[test]
    fn test_shrink_while_settling_reclamps_target() {
        let now = Instant::now();
        let mut s = scroller(33, 28).with_snap_inset(1);
        s.step(3, now);
        assert_eq!(s.target_page(), 31);
        assert_eq!(s.set_page_count(30), None);
        assert_eq!(s.target_page(), 28);
        assert_eq!(s.update_at(later(now)), Some(28));
    }

    #[test]
    fn test_viewport_change_keeps_page() {
        let mut s = scroller(10, 6);
        s.set_viewport(Viewport::new(90.0, 3.0));
        assert_eq!(s.current_page(), 6);
        assert!((s.offset() - 6.0 * 31.0).abs() < 1e-9);
    }

    #[test]
    fn test_end_without_gesture_is_ignored() {
        let mut s = scroller(10, 3);
        assert_eq!(s.end_gesture(50.0, Instant::now()), None);
        assert!(s.is_settled());
        assert_eq!(s.current_page(), 3);
    }

    #[test]
    fn test_empty_scroller_is_inert() {
        let now = Instant::now();
        let mut s = scroller(0, 0);
        s.drag_by(3.0);
        assert_eq!(s.position(), 0.0);
        assert_eq!(s.end_gesture(0.0, now), Some(0));
    }
}
