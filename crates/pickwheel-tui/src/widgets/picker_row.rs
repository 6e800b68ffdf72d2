use pickwheel_core::picker::{row_layout, ROW_CHILDREN};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::wheel::WheelWidget;
use crate::app::App;

/// Width of a lone wheel
const SINGLE_WIDTH: u16 = 24;

/// Split `area` into one rectangle per wheel
///
/// Three wheels share the width the way a picker row lays out its children;
/// a single wheel is centred.
pub fn column_areas(area: Rect, columns: usize, gap: u16) -> Vec<Rect> {
    match columns {
        0 => Vec::new(),
        ROW_CHILDREN => match row_layout(u32::from(area.width), u32::from(gap), columns) {
            Ok(cells) => cells
                .iter()
                .map(|cell| {
                    // Gaps alone can overrun a narrow area; keep cells inside it
                    let x = area.x.saturating_add(cell.offset as u16).min(area.right());
                    let width = (cell.length as u16).min(area.right() - x);
                    Rect::new(x, area.y, width, area.height)
                })
                .collect(),
            Err(_) => Vec::new(),
        },
        _ => {
            let width = SINGLE_WIDTH.min(area.width);
            let x = area.x + (area.width - width) / 2;
            vec![Rect::new(x, area.y, width, area.height)]
        }
    }
}

/// Bordered panel with the active picker's wheels
pub struct PickerRowWidget;

impl PickerRowWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.clone();
        let title = app.panel().map(|p| p.title.clone()).unwrap_or_default();

        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Last line shows the current value
        let value_area = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, inner.height.min(1));
        let wheels_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));

        app.update_layout(wheels_area);

        let Some(panel) = app.panel() else {
            return;
        };
        let divider = &app.config.picker.divider;
        let buf = frame.buffer_mut();
        for hit in &app.hit_areas {
            if let Some(wheel) = panel.wheel(hit.column) {
                let focused = panel.columns() > 1 && hit.column == panel.column;
                WheelWidget::render(buf, hit.area, wheel, divider, &theme, focused);
            }
        }

        let value = Paragraph::new(Line::styled(
            panel.value().to_string(),
            Style::default().fg(theme.muted),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(value, value_area);
    }
}
