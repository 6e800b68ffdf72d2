use pickwheel_core::config::{DividerStyle, Orientation};
use pickwheel_core::picker::{ColorRole, Slot};
use pickwheel_core::ItemPicker;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Font weight at or above which a label is drawn bold
const BOLD_WEIGHT: f32 = 600.0;
/// Font weight below which a label is drawn dim
const DIM_WEIGHT: f32 = 350.0;

/// Draws one wheel: three slots along its axis with dividers around the centre
pub struct WheelWidget;

impl WheelWidget {
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        picker: &ItemPicker,
        divider: &DividerStyle,
        theme: &Theme,
        focused: bool,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bg = if focused { theme.bg_focus } else { theme.bg };
        buf.set_style(area, Style::default().bg(bg));

        let orientation = picker.orientation();
        render_dividers(buf, area, orientation, divider, theme.divider);

        for slot in picker.visible_slots() {
            if slot.index.is_some() {
                render_slot(buf, area, orientation, &slot, theme);
            }
        }
    }
}

/// Length of one slot along the axis, in cells
fn slot_length(area: Rect, orientation: Orientation) -> f64 {
    let axis = match orientation {
        Orientation::Vertical => area.height,
        Orientation::Horizontal => area.width,
    };
    f64::from(axis) / 3.0
}

fn render_slot(buf: &mut Buffer, area: Rect, orientation: Orientation, slot: &Slot<'_>, theme: &Theme) {
    let length = slot_length(area, orientation);
    // Centre of the slot measured from the start of the axis
    let centre = (slot.distance + 1.5) * length;
    if centre < 0.0 {
        return;
    }
    let centre = centre as u16;

    let style = label_style(slot, theme);
    let label_width = slot.label.width() as u16;

    match orientation {
        Orientation::Vertical => {
            if centre >= area.height {
                return;
            }
            let width = label_width.min(area.width);
            let x = area.x + (area.width - width) / 2;
            buf.set_stringn(x, area.y + centre, slot.label, usize::from(width), style);
        }
        Orientation::Horizontal => {
            let start = centre.saturating_sub(label_width / 2);
            if start >= area.width {
                return;
            }
            let width = label_width.min(area.width - start);
            let y = area.y + area.height / 2;
            buf.set_stringn(area.x + start, y, slot.label, usize::from(width), style);
        }
    }
}

/// Terminal rendering of an interpolated slot style
fn label_style(slot: &Slot<'_>, theme: &Theme) -> Style {
    let fg = match slot.style.color {
        ColorRole::Selected => theme.selected,
        ColorRole::Unselected => theme.unselected,
    };
    let style = Style::default().fg(fg);
    if slot.style.font_weight >= BOLD_WEIGHT {
        style.add_modifier(Modifier::BOLD)
    } else if slot.style.font_weight < DIM_WEIGHT {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

fn render_dividers(buf: &mut Buffer, area: Rect, orientation: Orientation, divider: &DividerStyle, color: Color) {
    if divider.thickness == 0 {
        return;
    }
    let length = slot_length(area, orientation);
    // Dividers need a blank cell on each side of the centre label
    if length < 3.0 {
        return;
    }

    let first = length.floor() as u16;
    let second = (2.0 * length).ceil() as u16 - 1;
    let style = Style::default().fg(color);

    match orientation {
        Orientation::Vertical => {
            let symbol = if divider.thickness >= 2 { "━" } else { "─" };
            for row in [first, second] {
                for x in area.left()..area.right() {
                    buf[(x, area.y + row)].set_symbol(symbol).set_style(style);
                }
            }
        }
        Orientation::Horizontal => {
            let symbol = if divider.thickness >= 2 { "┃" } else { "│" };
            for column in [first, second] {
                for y in area.top()..area.bottom() {
                    buf[(area.x + column, y)].set_symbol(symbol).set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, area: Rect, y: u16) -> String {
        (area.left()..area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
    }

    fn render(picker: &ItemPicker, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        WheelWidget::render(&mut buf, area, picker, &DividerStyle::default(), &Theme::default(), false);
        buf
    }

    #[test]
    fn test_vertical_wheel_shows_neighbours() {
        let picker = ItemPicker::numbers(["one", "two", "three"], 1);
        let area = Rect::new(0, 0, 9, 9);
        let buf = render(&picker, area);

        assert_eq!(row_text(&buf, area, 1).trim(), "one");
        assert_eq!(row_text(&buf, area, 4).trim(), "two");
        assert_eq!(row_text(&buf, area, 7).trim(), "three");
        assert_eq!(row_text(&buf, area, 3), "─".repeat(9));
        assert_eq!(row_text(&buf, area, 5), "─".repeat(9));
    }

    #[test]
    fn test_first_item_leaves_sentinel_blank() {
        let picker = ItemPicker::numbers(["a", "b"], 0);
        let area = Rect::new(0, 0, 5, 9);
        let buf = render(&picker, area);

        assert_eq!(row_text(&buf, area, 1).trim(), "");
        assert_eq!(row_text(&buf, area, 4).trim(), "a");
        assert_eq!(row_text(&buf, area, 7).trim(), "b");
    }

    #[test]
    fn test_centre_label_is_bold_and_selected() {
        let picker = ItemPicker::numbers(["x", "y", "z"], 1);
        let area = Rect::new(0, 0, 3, 9);
        let buf = render(&picker, area);
        let theme = Theme::default();

        let centre = &buf[(1, 4)];
        assert_eq!(centre.symbol(), "y");
        assert_eq!(centre.fg, theme.selected);
        assert!(centre.modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(1, 1)].fg, theme.unselected);
    }

    #[test]
    fn test_short_wheel_has_no_dividers() {
        let picker = ItemPicker::numbers(["x", "y", "z"], 1);
        let area = Rect::new(0, 0, 3, 3);
        let buf = render(&picker, area);
        assert_eq!(row_text(&buf, area, 1).trim(), "y");
        assert!(!row_text(&buf, area, 0).contains('─'));
    }

    #[test]
    fn test_horizontal_wheel() {
        let picker = ItemPicker::numbers(["1", "2", "3"], 1).with_orientation(Orientation::Horizontal);
        let area = Rect::new(0, 0, 9, 3);
        let buf = render(&picker, area);
        assert_eq!(row_text(&buf, area, 1), " 1 │2│ 3 ");
    }
}
