use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Enter: accept the current value
    Confirm,
    FocusLeft,
    FocusRight,
    NextPanel,
    PrevPanel,
    NextItem,
    PrevItem,
    /// Jump as far as one gesture may (the snap cap)
    FlingForward,
    FlingBack,
    FirstItem,
    LastItem,
    PendingG, // First 'g' press, waiting for second 'g'
    Help,
    ExitMode,
    /// Left button pressed at (column, row)
    Press(u16, u16),
    /// Pointer dragged to (column, row) with the left button held
    Drag(u16, u16),
    Release(u16, u16),
    /// Wheel at (column, row): +1 forward, -1 back
    Wheel(u16, u16, i8),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key closes help
        return Action::ExitMode;
    }

    let binding = KeyBinding::from(key);
    if keymap.is_g_prefix(&binding) {
        return match (app.pending_key, keymap.get_pending_g_action()) {
            (Some('g'), Some(action)) => *action,
            _ => Action::PendingG,
        };
    }

    keymap.lookup(&key).copied().unwrap_or(Action::None)
}

/// Translate a mouse event into a pointer action
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Press(x, y),
        MouseEventKind::Drag(MouseButton::Left) => Action::Drag(x, y),
        MouseEventKind::Up(MouseButton::Left) => Action::Release(x, y),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Action::Wheel(x, y, 1),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => Action::Wheel(x, y, -1),
        _ => Action::None,
    }
}

/// Release velocity estimate from recent drag samples
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: VecDeque<(Instant, f64)>,
    window: Duration,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl VelocityTracker {
    /// Only samples younger than `window` count
    pub fn new(window: Duration) -> Self {
        Self {
            samples: VecDeque::new(),
            window,
        }
    }

    /// Record the cumulative drag distance at `now`
    pub fn push(&mut self, now: Instant, distance: f64) {
        self.samples.push_back((now, distance));
        while let Some(&(at, _)) = self.samples.front() {
            if now.saturating_duration_since(at) > self.window {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Distance per second over the window ending at `now`
    ///
    /// Zero when the pointer rested longer than the window before release.
    pub fn velocity(&self, now: Instant) -> f64 {
        let recent = self
            .samples
            .iter()
            .filter(|(at, _)| now.saturating_duration_since(*at) <= self.window);
        let mut first = None;
        let mut last = None;
        for sample in recent {
            first.get_or_insert(*sample);
            last = Some(*sample);
        }
        match (first, last) {
            (Some((t0, d0)), Some((t1, d1))) => {
                let dt = t1.saturating_duration_since(t0).as_secs_f64();
                if dt > f64::EPSILON {
                    (d1 - d0) / dt
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyModifiers};
    use pickwheel_core::{AppConfig, Date, FixedClock, Time24};

    use crate::theme::Theme;

    fn app() -> App {
        let clock = FixedClock::new(Date::clamped(2024, 1, 31), Time24::clamped(23, 59));
        App::demo(Arc::new(AppConfig::default()), Theme::default(), &clock)
    }

    #[test]
    fn test_mouse_mapping() {
        let event = |kind| MouseEvent {
            kind,
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse_event(event(MouseEventKind::Down(MouseButton::Left))), Action::Press(4, 7));
        assert_eq!(handle_mouse_event(event(MouseEventKind::Drag(MouseButton::Left))), Action::Drag(4, 7));
        assert_eq!(handle_mouse_event(event(MouseEventKind::Up(MouseButton::Left))), Action::Release(4, 7));
        assert_eq!(handle_mouse_event(event(MouseEventKind::ScrollUp)), Action::Wheel(4, 7, -1));
        assert_eq!(handle_mouse_event(event(MouseEventKind::Down(MouseButton::Right))), Action::None);
    }

    #[test]
    fn test_gg_sequence() {
        let keymap = Keymap::default();
        let mut app = app();
        let g = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);

        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::FirstItem);
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        let keymap = Keymap::default();
        let mut app = app();
        app.mode = Mode::Help;
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(q, &app, &keymap), Action::ExitMode);
    }

    #[test]
    fn test_velocity_over_window() {
        let start = Instant::now();
        let mut tracker = VelocityTracker::default();
        tracker.push(start, 0.0);
        tracker.push(start + Duration::from_millis(20), 2.0);
        tracker.push(start + Duration::from_millis(50), 5.0);
        let v = tracker.velocity(start + Duration::from_millis(50));
        assert!((v - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_decays_after_rest() {
        let start = Instant::now();
        let mut tracker = VelocityTracker::default();
        tracker.push(start, 0.0);
        tracker.push(start + Duration::from_millis(10), 3.0);
        assert_eq!(tracker.velocity(start + Duration::from_millis(500)), 0.0);

        tracker.clear();
        assert_eq!(tracker.velocity(start), 0.0);
    }
}
