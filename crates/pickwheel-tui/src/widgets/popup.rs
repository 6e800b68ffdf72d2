use pickwheel_core::config::KeymapConfig;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

pub struct HelpPopupWidget;

impl HelpPopupWidget {
    /// Render the key binding overview over the current screen
    pub fn render(frame: &mut Frame, keymap: &KeymapConfig, theme: &Theme) {
        let entries = help_entries(keymap);
        let area = frame.area();

        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg_focus));

        let mut lines: Vec<Line> = entries
            .into_iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>10}  ", key),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description, Style::default().fg(theme.fg)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::styled("any key to close", Style::default().fg(theme.muted)).alignment(Alignment::Center));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// (key, description) rows in display order
fn help_entries(keymap: &KeymapConfig) -> Vec<(String, &'static str)> {
    vec![
        (format!("{}/{}", keymap.next_item, keymap.prev_item), "next / previous item"),
        (format!("{}/{}", keymap.fling_forward, keymap.fling_back), "jump forward / back"),
        (format!("{}/{}", keymap.first_item, keymap.last_item), "first / last item"),
        (format!("{}/{}", keymap.focus_left, keymap.focus_right), "focus column left / right"),
        (format!("{}/{}", keymap.next_panel, keymap.prev_panel), "next / previous panel"),
        (keymap.confirm.clone(), "confirm value"),
        ("mouse".to_string(), "drag, fling or scroll a wheel"),
        (keymap.help.clone(), "this help"),
        (keymap.quit.clone(), "quit"),
    ]
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
