use std::sync::Arc;

use anyhow::Result;

use pickwheel_core::{AppConfig, SystemClock};
use pickwheel_tui::App;

use super::run::run_app;
use super::theme_for;

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    let theme = theme_for(&config);
    let app = App::demo(config, theme, &SystemClock);
    let app = run_app(app)?;

    // Leave the last value of every panel on the terminal
    for panel in &app.panels {
        if let Some(value) = &panel.last_value {
            println!("{}: {}", panel.title, value);
        }
    }
    Ok(())
}
