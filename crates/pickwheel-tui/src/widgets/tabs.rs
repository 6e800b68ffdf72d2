use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Tabs,
    Frame,
};

use crate::app::App;

/// One tab per panel, the active one highlighted
pub struct PanelTabsWidget;

impl PanelTabsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let titles: Vec<String> = app.panels.iter().map(|p| format!(" {} ", p.title)).collect();

        let tabs = Tabs::new(titles)
            .select(app.active)
            .style(Style::default().fg(theme.muted).bg(theme.bg))
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");

        frame.render_widget(tabs, area);
    }
}
