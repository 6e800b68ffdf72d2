use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Instant;

use pickwheel_core::composite::{Clock, CompositePicker, Date, DatePicker, Time, TimePicker};
use pickwheel_core::config::{Orientation, ScrollConfig};
use pickwheel_core::{AppConfig, ItemPicker, PickerRow, Viewport};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::input::{Action, VelocityTracker};
use crate::theme::Theme;
use crate::widgets::picker_row::column_areas;

/// Value a panel hands back when one of its wheels settles
#[derive(Debug, Clone, PartialEq)]
pub enum PanelValue {
    Item { index: Option<usize>, label: Option<String> },
    Date(Date),
    Time(Time),
}

impl fmt::Display for PanelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelValue::Item { label: Some(label), .. } => f.write_str(label),
            PanelValue::Item { label: None, .. } => f.write_str("(empty)"),
            PanelValue::Date(date) => fmt::Display::fmt(date, f),
            PanelValue::Time(time) => fmt::Display::fmt(time, f),
        }
    }
}

/// What a panel edits
pub enum PanelPicker {
    Single(ItemPicker),
    Date(DatePicker),
    Time(TimePicker),
}

/// One tab of the UI: a titled picker plus its focus and last emitted value
pub struct Panel {
    pub title: String,
    pub picker: PanelPicker,
    /// Focused column (always 0 for a single wheel)
    pub column: usize,
    /// Last value emitted by a settle
    pub last_value: Option<PanelValue>,
}

impl Panel {
    pub fn new(title: impl Into<String>, picker: PanelPicker) -> Self {
        Self {
            title: title.into(),
            picker,
            column: 0,
            last_value: None,
        }
    }

    /// Single wheel over `items`
    pub fn items(title: impl Into<String>, items: Vec<String>, initial_index: usize, config: &AppConfig) -> Self {
        let picker = ItemPicker::new(items, initial_index)
            .with_config(&config.picker)
            .with_scroll_config(config.scroll.clone());
        Self::new(title, PanelPicker::Single(picker))
    }

    /// Single wheel over an integer range
    pub fn range(title: impl Into<String>, range: RangeInclusive<i64>, initial: i64, config: &AppConfig) -> Self {
        let picker = ItemPicker::range(range, initial)
            .with_config(&config.picker)
            .with_scroll_config(config.scroll.clone());
        Self::new(title, PanelPicker::Single(picker))
    }

    pub fn date(title: impl Into<String>, initial: Date, config: &AppConfig) -> Self {
        let mut picker = DatePicker::new(initial, &config.picker);
        apply_scroll_config(picker.row_mut(), &config.scroll);
        Self::new(title, PanelPicker::Date(picker))
    }

    pub fn time(title: impl Into<String>, initial: Time, config: &AppConfig) -> Self {
        let mut picker = TimePicker::new(initial, &config.picker);
        apply_scroll_config(picker.row_mut(), &config.scroll);
        Self::new(title, PanelPicker::Time(picker))
    }

    pub fn columns(&self) -> usize {
        match self.picker {
            PanelPicker::Single(_) => 1,
            PanelPicker::Date(_) | PanelPicker::Time(_) => 3,
        }
    }

    pub fn wheel(&self, column: usize) -> Option<&ItemPicker> {
        match &self.picker {
            PanelPicker::Single(picker) => (column == 0).then_some(picker),
            PanelPicker::Date(picker) => picker.row().picker(column),
            PanelPicker::Time(picker) => picker.row().picker(column),
        }
    }

    fn wheel_mut(&mut self, column: usize) -> Option<&mut ItemPicker> {
        match &mut self.picker {
            PanelPicker::Single(picker) => (column == 0).then_some(picker),
            PanelPicker::Date(picker) => picker.row_mut().picker_mut(column),
            PanelPicker::Time(picker) => picker.row_mut().picker_mut(column),
        }
    }

    /// Current value, whether or not it was emitted yet
    pub fn value(&self) -> PanelValue {
        match &self.picker {
            PanelPicker::Single(picker) => PanelValue::Item {
                index: picker.selected_index(),
                label: picker.selected_label().map(str::to_string),
            },
            PanelPicker::Date(picker) => PanelValue::Date(picker.value()),
            PanelPicker::Time(picker) => PanelValue::Time(picker.value()),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.wheel(0).map(ItemPicker::orientation).unwrap_or_default()
    }

    pub fn needs_update(&self) -> bool {
        match &self.picker {
            PanelPicker::Single(picker) => picker.needs_update(),
            PanelPicker::Date(picker) => picker.needs_update(),
            PanelPicker::Time(picker) => picker.needs_update(),
        }
    }

    pub fn set_viewport(&mut self, column: usize, viewport: Viewport) {
        if let Some(wheel) = self.wheel_mut(column) {
            wheel.set_viewport(viewport);
        }
    }

    pub fn begin_gesture(&mut self, column: usize) {
        match &mut self.picker {
            PanelPicker::Single(picker) if column == 0 => picker.begin_gesture(),
            PanelPicker::Single(_) => {}
            PanelPicker::Date(picker) => picker.begin_gesture(column),
            PanelPicker::Time(picker) => picker.begin_gesture(column),
        }
    }

    pub fn drag_by(&mut self, column: usize, delta: f64) {
        match &mut self.picker {
            PanelPicker::Single(picker) if column == 0 => picker.drag_by(delta),
            PanelPicker::Single(_) => {}
            PanelPicker::Date(picker) => picker.drag_by(column, delta),
            PanelPicker::Time(picker) => picker.drag_by(column, delta),
        }
    }

    pub fn end_gesture(&mut self, column: usize, velocity: f64, now: Instant) -> Option<PanelValue> {
        let value = match &mut self.picker {
            PanelPicker::Single(picker) if column == 0 => picker.end_gesture(velocity, now).map(|_| ()),
            PanelPicker::Single(_) => None,
            PanelPicker::Date(picker) => picker.end_gesture(column, velocity, now).map(|_| ()),
            PanelPicker::Time(picker) => picker.end_gesture(column, velocity, now).map(|_| ()),
        };
        self.record(value)
    }

    pub fn step(&mut self, column: usize, items: isize, now: Instant) -> Option<PanelValue> {
        let value = match &mut self.picker {
            PanelPicker::Single(picker) if column == 0 => picker.step(items, now).map(|_| ()),
            PanelPicker::Single(_) => None,
            PanelPicker::Date(picker) => picker.step(column, items, now).map(|_| ()),
            PanelPicker::Time(picker) => picker.step(column, items, now).map(|_| ()),
        };
        self.record(value)
    }

    pub fn animate_to(&mut self, column: usize, index: usize, now: Instant) -> Option<PanelValue> {
        let value = match &mut self.picker {
            PanelPicker::Single(picker) if column == 0 => picker.animate_to(index, now).map(|_| ()),
            PanelPicker::Single(_) => None,
            PanelPicker::Date(picker) => picker.animate_to(column, index, now).map(|_| ()),
            PanelPicker::Time(picker) => picker.animate_to(column, index, now).map(|_| ()),
        };
        self.record(value)
    }

    /// Animate `column` to `index` however far away it is
    pub fn seek(&mut self, column: usize, index: usize, now: Instant) -> Option<PanelValue> {
        let value = match &mut self.picker {
            PanelPicker::Single(picker) if column == 0 => picker.seek(index, now).map(|_| ()),
            PanelPicker::Single(_) => None,
            PanelPicker::Date(picker) => picker.seek(column, index, now).map(|_| ()),
            PanelPicker::Time(picker) => picker.seek(column, index, now).map(|_| ()),
        };
        self.record(value)
    }

    /// Land every settling wheel on its target
    pub fn complete_settles(&mut self) -> Option<PanelValue> {
        let value = match &mut self.picker {
            PanelPicker::Single(picker) => picker.complete_settle().map(|_| ()),
            PanelPicker::Date(picker) => picker.complete_settles().map(|_| ()),
            PanelPicker::Time(picker) => picker.complete_settles().map(|_| ()),
        };
        self.record(value)
    }

    pub fn update_at(&mut self, now: Instant) -> Option<PanelValue> {
        let value = match &mut self.picker {
            PanelPicker::Single(picker) => picker.update_at(now).map(|_| ()),
            PanelPicker::Date(picker) => picker.update_at(now).map(|_| ()),
            PanelPicker::Time(picker) => picker.update_at(now).map(|_| ()),
        };
        self.record(value)
    }

    fn record(&mut self, changed: Option<()>) -> Option<PanelValue> {
        changed?;
        let value = self.value();
        debug!(panel = %self.title, value = %value, "Panel value changed");
        self.last_value = Some(value.clone());
        Some(value)
    }
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Help overlay
    Help,
}

/// Screen area of one wheel, refreshed every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    pub area: Rect,
    pub column: usize,
}

/// Pointer gesture in progress
#[derive(Debug, Clone)]
struct DragState {
    column: usize,
    /// Last pointer coordinate along the wheel axis
    last: u16,
    /// Accumulated drag distance
    distance: f64,
    tracker: VelocityTracker,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub panels: Vec<Panel>,
    /// Index of the visible panel
    pub active: usize,
    pub mode: Mode,
    pub should_quit: bool,
    /// Quit on Enter and remember that the value was accepted
    pub exit_on_confirm: bool,
    pub confirmed: bool,
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Wheel areas of the active panel from the last layout
    pub hit_areas: Vec<HitArea>,
    drag: Option<DragState>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, panels: Vec<Panel>) -> Self {
        Self {
            config,
            theme,
            panels,
            active: 0,
            mode: Mode::Normal,
            should_quit: false,
            exit_on_confirm: false,
            confirmed: false,
            status_message: None,
            pending_key: None,
            hit_areas: Vec::new(),
            drag: None,
        }
    }

    /// App around a single panel that exits on Enter
    pub fn one_shot(config: Arc<AppConfig>, theme: Theme, panel: Panel) -> Self {
        let mut app = Self::new(config, theme, vec![panel]);
        app.exit_on_confirm = true;
        app
    }

    /// Every picker kind side by side, starting from the clock's date and time
    pub fn demo(config: Arc<AppConfig>, theme: Theme, clock: &dyn Clock) -> Self {
        let now = clock.now_24h();
        let fruits = DEMO_FRUITS.iter().map(|s| s.to_string()).collect();

        let panels = vec![
            Panel::range("Number", 0..=100, 42, &config),
            Panel::items("Fruit", fruits, 3, &config),
            Panel::time("Time (12h)", Time::Twelve(now.to_12h()), &config),
            Panel::time("Time (24h)", Time::TwentyFour(now), &config),
            Panel::date("Date", clock.today(), &config),
        ];
        info!(panels = panels.len(), "Demo app created");
        Self::new(config, theme, panels)
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.panels.get(self.active)
    }

    fn panel_mut(&mut self) -> Option<&mut Panel> {
        self.panels.get_mut(self.active)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// True while any wheel is animating
    pub fn needs_update(&self) -> bool {
        self.panels.iter().any(Panel::needs_update)
    }

    /// Lay the active panel's wheels out in `body` and resize their scrollers
    pub fn update_layout(&mut self, body: Rect) {
        let gap = self.config.picker.item_spacing;
        let Some(panel) = self.panels.get_mut(self.active) else {
            self.hit_areas.clear();
            return;
        };

        let areas = column_areas(body, panel.columns(), gap);
        let orientation = panel.orientation();
        self.hit_areas = areas
            .iter()
            .enumerate()
            .map(|(column, &area)| HitArea { area, column })
            .collect();
        for hit in &self.hit_areas {
            panel.set_viewport(hit.column, wheel_viewport(hit.area, orientation));
        }
    }

    /// Apply an action at `now`
    pub fn apply(&mut self, action: Action, now: Instant) {
        if action != Action::PendingG {
            self.clear_pending_key();
        }
        let max_jump = self.config.scroll.max_snap_pages as isize;

        let changed = match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::Confirm => {
                self.confirm();
                None
            }
            Action::FocusLeft => {
                if let Some(panel) = self.panel_mut() {
                    panel.column = panel.column.saturating_sub(1);
                }
                None
            }
            Action::FocusRight => {
                if let Some(panel) = self.panel_mut() {
                    panel.column = (panel.column + 1).min(panel.columns() - 1);
                }
                None
            }
            Action::NextPanel => {
                self.cycle_panel(1);
                None
            }
            Action::PrevPanel => {
                self.cycle_panel(-1);
                None
            }
            Action::NextItem => self.step_focused(1, now),
            Action::PrevItem => self.step_focused(-1, now),
            Action::FlingForward => self.step_focused(max_jump, now),
            Action::FlingBack => self.step_focused(-max_jump, now),
            Action::FirstItem => self.panel_mut().and_then(|p| p.seek(p.column, 0, now)),
            Action::LastItem => self.panel_mut().and_then(|p| {
                let last = p.wheel(p.column).map_or(0, |w| w.len().saturating_sub(1));
                p.seek(p.column, last, now)
            }),
            Action::PendingG => {
                self.pending_key = Some('g');
                None
            }
            Action::Help => {
                self.mode = Mode::Help;
                None
            }
            Action::ExitMode => {
                self.mode = Mode::Normal;
                None
            }
            Action::Press(x, y) => {
                self.press(x, y);
                None
            }
            Action::Drag(x, y) => {
                self.drag_to(x, y, now);
                None
            }
            Action::Release(x, y) => self.release(x, y, now),
            Action::Wheel(x, y, delta) => self.hit(x, y).and_then(|column| {
                let panel = self.panel_mut()?;
                panel.column = column;
                panel.step(column, isize::from(delta), now)
            }),
            Action::None => None,
        };

        if let Some(value) = changed {
            self.report(value);
        }
    }

    /// Advance every animating wheel
    pub fn tick(&mut self, now: Instant) {
        let mut changes = Vec::new();
        for panel in self.panels.iter_mut().filter(|p| p.needs_update()) {
            if let Some(value) = panel.update_at(now) {
                changes.push(format!("{}: {}", panel.title, value));
            }
        }
        if let Some(last) = changes.pop() {
            self.set_status(last);
        }
    }

    fn report(&mut self, value: PanelValue) {
        let title = self.panel().map(|p| p.title.clone()).unwrap_or_default();
        self.set_status(format!("{}: {}", title, value));
    }

    fn confirm(&mut self) {
        let Some(panel) = self.panel_mut() else {
            return;
        };
        // Wheels still gliding are confirmed at their target
        panel.complete_settles();
        let value = panel.value();
        let title = panel.title.clone();
        info!(panel = %title, value = %value, "Value confirmed");
        if self.exit_on_confirm {
            self.confirmed = true;
            self.should_quit = true;
        } else {
            self.set_status(format!("Confirmed {}: {}", title, value));
        }
    }

    fn cycle_panel(&mut self, delta: isize) {
        if self.panels.is_empty() {
            return;
        }
        let len = self.panels.len() as isize;
        self.active = (self.active as isize + delta).rem_euclid(len) as usize;
        self.drag = None;
        self.hit_areas.clear();
    }

    fn step_focused(&mut self, items: isize, now: Instant) -> Option<PanelValue> {
        let panel = self.panel_mut()?;
        panel.step(panel.column, items, now)
    }

    fn hit(&self, x: u16, y: u16) -> Option<usize> {
        self.hit_areas
            .iter()
            .find(|hit| {
                x >= hit.area.x
                    && x < hit.area.x.saturating_add(hit.area.width)
                    && y >= hit.area.y
                    && y < hit.area.y.saturating_add(hit.area.height)
            })
            .map(|hit| hit.column)
    }

    fn axis_coord(&self, x: u16, y: u16) -> u16 {
        match self.panel().map(Panel::orientation).unwrap_or_default() {
            Orientation::Vertical => y,
            Orientation::Horizontal => x,
        }
    }

    fn press(&mut self, x: u16, y: u16) {
        let Some(column) = self.hit(x, y) else {
            return;
        };
        let last = self.axis_coord(x, y);
        if let Some(panel) = self.panel_mut() {
            panel.column = column;
            panel.begin_gesture(column);
        }
        self.drag = Some(DragState {
            column,
            last,
            distance: 0.0,
            tracker: VelocityTracker::default(),
        });
    }

    fn drag_to(&mut self, x: u16, y: u16, now: Instant) {
        let coord = self.axis_coord(x, y);
        let Some(mut drag) = self.drag.take() else {
            return;
        };
        // Pulling the content up (or left) reveals later items
        let delta = f64::from(drag.last) - f64::from(coord);
        drag.last = coord;
        drag.distance += delta;
        drag.tracker.push(now, drag.distance);
        let column = drag.column;
        self.drag = Some(drag);

        if let Some(panel) = self.panel_mut() {
            panel.drag_by(column, delta);
        }
    }

    fn release(&mut self, x: u16, y: u16, now: Instant) -> Option<PanelValue> {
        self.drag_to(x, y, now);
        let drag = self.drag.take()?;
        let velocity = drag.tracker.velocity(now);
        self.panel_mut()?.end_gesture(drag.column, velocity, now)
    }
}

const DEMO_FRUITS: [&str; 8] = [
    "Apple", "Banana", "Cherry", "Date", "Elderberry", "Fig", "Grape", "Honeydew",
];

fn apply_scroll_config(row: &mut PickerRow, config: &ScrollConfig) {
    for picker in row.pickers_mut() {
        picker.set_scroll_config(config.clone());
    }
}

/// Scroller geometry of a wheel drawn in `area`
pub fn wheel_viewport(area: Rect, orientation: Orientation) -> Viewport {
    let axis = match orientation {
        Orientation::Vertical => area.height,
        Orientation::Horizontal => area.width,
    };
    Viewport::new(f64::from(axis), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use pickwheel_core::{FixedClock, Meridiem, Time12, Time24};

    fn demo() -> App {
        let clock = FixedClock::new(
            Date::new(2024, 1, 31).unwrap(),
            Time24::new(23, 59).unwrap(),
        );
        App::demo(Arc::new(AppConfig::default()), Theme::default(), &clock)
    }

    fn settle(app: &mut App, now: Instant) {
        app.tick(now + Duration::from_secs(5));
    }

    #[test]
    fn test_demo_panels() {
        let app = demo();
        let titles: Vec<&str> = app.panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Number", "Fruit", "Time (12h)", "Time (24h)", "Date"]);
        assert_eq!(app.panels[0].value().to_string(), "42");
        assert_eq!(app.panels[1].value().to_string(), "Date");
        assert_eq!(
            app.panels[2].value(),
            PanelValue::Time(Time::Twelve(Time12::clamped(11, 59, Meridiem::Pm)))
        );
        assert_eq!(app.panels[3].value().to_string(), "23:59");
        assert_eq!(app.panels[4].value().to_string(), "2024-01-31");
    }

    #[test]
    fn test_keyboard_step_settles_and_reports() {
        let now = Instant::now();
        let mut app = demo();
        app.apply(Action::NextItem, now);
        assert!(app.needs_update());
        settle(&mut app, now);
        assert!(!app.needs_update());
        assert_eq!(app.panels[0].last_value.as_ref().map(|v| v.to_string()).as_deref(), Some("43"));
        assert_eq!(app.status_message.as_deref(), Some("Number: 43"));
    }

    #[test]
    fn test_focus_and_panel_cycling() {
        let mut app = demo();
        let now = Instant::now();
        app.apply(Action::FocusRight, now);
        assert_eq!(app.panels[0].column, 0);

        app.apply(Action::PrevPanel, now);
        assert_eq!(app.active, 4);
        app.apply(Action::FocusRight, now);
        app.apply(Action::FocusRight, now);
        app.apply(Action::FocusRight, now);
        assert_eq!(app.panels[4].column, 2);
        app.apply(Action::NextPanel, now);
        assert_eq!(app.active, 0);
    }

    #[test]
    fn test_month_step_on_date_panel() {
        let now = Instant::now();
        let mut app = demo();
        app.active = 4;
        app.apply(Action::FocusRight, now);
        for _ in 0..3 {
            app.apply(Action::NextItem, now);
        }
        settle(&mut app, now);
        assert_eq!(app.panels[4].value().to_string(), "2024-04-30");
    }

    #[test]
    fn test_mouse_drag_moves_focused_column() {
        let now = Instant::now();
        let mut app = demo();
        app.update_layout(Rect::new(0, 0, 30, 9));
        let hit = app.hit_areas[0];
        let x = hit.area.x + 1;

        // One page is three rows; pull up by four rows and hold still
        app.apply(Action::Press(x, 6), now);
        app.apply(Action::Drag(x, 4), now + Duration::from_millis(10));
        app.apply(Action::Drag(x, 2), now + Duration::from_millis(20));
        app.apply(Action::Release(x, 2), now + Duration::from_millis(400));
        settle(&mut app, now + Duration::from_millis(400));
        assert_eq!(app.panels[0].value().to_string(), "43");
    }

    #[test]
    fn test_wheel_over_column_steps() {
        let now = Instant::now();
        let mut app = demo();
        app.active = 3;
        app.update_layout(Rect::new(0, 0, 60, 9));
        let minute = app.hit_areas[1].area;
        app.apply(Action::Wheel(minute.x + 1, minute.y + 1, -1), now);
        assert_eq!(app.panels[3].column, 1);
        settle(&mut app, now);
        assert_eq!(app.panels[3].value().to_string(), "23:58");
    }

    #[test]
    fn test_confirm_in_one_shot_mode() {
        let mut app = App::one_shot(
            Arc::new(AppConfig::default()),
            Theme::default(),
            Panel::items("Pick", vec!["a".into(), "b".into()], 1, &AppConfig::default()),
        );
        app.apply(Action::Confirm, Instant::now());
        assert!(app.confirmed);
        assert!(app.should_quit);
        assert_eq!(
            app.panels[0].value(),
            PanelValue::Item {
                index: Some(1),
                label: Some("b".to_string())
            }
        );
    }

    #[test]
    fn test_gg_and_last_item() {
        let now = Instant::now();
        let mut app = demo();
        app.active = 1;
        app.apply(Action::LastItem, now);
        settle(&mut app, now);
        assert_eq!(app.panels[1].value().to_string(), "Honeydew");
        app.apply(Action::PendingG, now);
        assert_eq!(app.pending_key, Some('g'));
        app.apply(Action::FirstItem, now);
        assert_eq!(app.pending_key, None);
        settle(&mut app, now);
        assert_eq!(app.panels[1].value().to_string(), "Apple");

        // Far ends of a long wheel are reached in one go
        app.active = 0;
        app.apply(Action::LastItem, now);
        settle(&mut app, now);
        assert_eq!(app.panels[0].value().to_string(), "100");
        app.apply(Action::PendingG, now);
        app.apply(Action::FirstItem, now);
        settle(&mut app, now);
        assert_eq!(app.panels[0].value().to_string(), "0");
    }

    #[test]
    fn test_confirm_while_settling_uses_target() {
        let now = Instant::now();
        let config = Arc::new(AppConfig::default());
        let panel = Panel::date("Date", Date::new(2024, 1, 31).unwrap(), &config);
        let mut app = App::one_shot(config, Theme::default(), panel);

        app.apply(Action::FocusRight, now);
        app.apply(Action::NextItem, now);
        assert!(app.needs_update());
        app.apply(Action::Confirm, now + Duration::from_millis(20));

        assert!(app.confirmed);
        assert!(!app.needs_update());
        assert_eq!(app.panels[0].value().to_string(), "2024-02-29");
    }

    #[test]
    fn test_confirm_in_browse_mode_reports_target() {
        let now = Instant::now();
        let mut app = demo();
        app.apply(Action::NextItem, now);
        app.apply(Action::Confirm, now + Duration::from_millis(20));
        assert!(!app.should_quit);
        assert_eq!(app.status_message.as_deref(), Some("Confirmed Number: 43"));
    }
}
