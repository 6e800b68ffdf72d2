use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let status_text = match (&app.status_message, app.panel()) {
            (Some(msg), _) => format!(" {}", msg),
            (None, Some(panel)) => format!(
                " {} | {} | column {}/{}",
                mode_str,
                panel.title,
                panel.column + 1,
                panel.columns()
            ),
            (None, None) => format!(" {}", mode_str),
        };

        let help_hint = " q:quit h/l:column j/k:item <Tab>:panel ?:help ";
        let padding_len = area
            .width
            .saturating_sub(status_text.width() as u16 + help_hint.width() as u16) as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg).bg(theme.status_bg)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.status_bg)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.status_bg)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
