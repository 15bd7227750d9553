use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context as _, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::instrument;

use crate::profile::Profile;
use crate::tui::app::App;

pub mod app;
pub mod list;

/// Run the interactive profile browser until the user quits.
#[instrument(skip(profiles))]
pub fn run(profiles: Vec<Profile>) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;

    // leave the shell usable if we panic mid-draw
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to initialise the terminal")?;

    let mut app = App::new(profiles);

    // seed the listing dimensions; later resizes arrive as events
    let size = terminal.size().context("Failed to read terminal size")?;
    app.handle_event(&Event::Resize(size.width, size.height));

    let result = event_loop(&mut terminal, &mut app);
    restore_terminal()?;
    result
}

/// One event processed to completion per iteration, then a redraw.
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal
            .draw(|frame| app.render(frame))
            .context("Failed to draw the interface")?;
        let event = event::read().context("Failed to read terminal event")?;
        app.handle_event(&event);
    }
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    Ok(())
}
