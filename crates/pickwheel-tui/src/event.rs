use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll interval while a wheel is animating
    animation_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self::with_animation_fps(tick_rate_ms, 60)
    }

    /// Tick faster while animating, at `fps` frames per second
    pub fn with_animation_fps(tick_rate_ms: u64, fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_rate: Duration::from_micros(1_000_000 / u64::from(fps)),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn animation_rate(&self) -> Duration {
        self.animation_rate
    }

    /// Poll for the next event at the idle tick rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at the animation frame rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(Some(AppEvent::Tick));
        }
        let event = match event::read()? {
            // Only handle key press events, ignore release events
            // (crossterm 0.27+ sends release events on some systems)
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        };
        Ok(event)
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse press, drag, release or wheel
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_rate_from_fps() {
        let handler = EventHandler::with_animation_fps(100, 50);
        assert_eq!(handler.tick_rate(), Duration::from_millis(100));
        assert_eq!(handler.animation_rate(), Duration::from_millis(20));
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let handler = EventHandler::with_animation_fps(100, 0);
        assert_eq!(handler.animation_rate(), Duration::from_secs(1));
    }
}
