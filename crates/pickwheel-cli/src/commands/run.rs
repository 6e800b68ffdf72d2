use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tracing::info;

use pickwheel_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    keymap::Keymap,
    widgets::{HelpPopupWidget, PanelTabsWidget, PickerRowWidget, StatusBarWidget},
};

/// Run `app` on the terminal until it quits, handing the final state back
pub fn run_app(mut app: App) -> Result<App> {
    // Create keymap from config
    let keymap = Keymap::from_config(&app.config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("pickwheel"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result?;
    info!(confirmed = app.confirmed, "UI closed");
    Ok(app)
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, keymap: &Keymap) -> Result<()> {
    // Create event handler with animation FPS support
    let event_handler = EventHandler::with_animation_fps(app.config.ui.tick_rate_ms, app.config.scroll.animation_fps);

    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = false;

    loop {
        terminal.draw(|frame| draw(frame, app))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    app.apply(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    if app.mode == Mode::Normal {
                        app.apply(handle_mouse_event(mouse), now);
                    }
                }
                // Layout is recomputed on every draw
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        app.tick(Instant::now());
        needs_fast_update = app.needs_update();

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Tabs + wheels + status bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    PanelTabsWidget::render(frame, layout[0], app);
    PickerRowWidget::render(frame, layout[1], app);
    StatusBarWidget::render(frame, layout[2], app);

    if app.mode == Mode::Help {
        HelpPopupWidget::render(frame, &app.config.keymap, &app.theme);
    }
}
