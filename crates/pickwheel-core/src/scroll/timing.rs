//! L4 Atomic Layer: Time calculation utilities for settle animations

use std::time::{Duration, Instant};

/// Animation progress (0.0 to 1.0) at `now` for an animation started at `start`
///
/// A zero duration is always complete. A `now` before `start` counts as 0.
#[inline]
pub fn progress_at(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation started at `start` has finished by `now`
#[inline]
pub fn is_complete_at(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for `f32` style values (weights, sizes)
#[inline]
pub fn lerp_f32(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
