//! Terminal interface over the extractor.
//!
//! A blocking key-read loop drives the [`App`] state machine. Each key event
//! is handled to completion (including the article fetch behind the confirm
//! key) before the next one is read, and the screen is fully redrawn after
//! every state-affecting key.

pub mod input;
pub mod render;
pub mod state;

pub use render::RenderTheme;
pub use state::{App, Mode};

use std::io;

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::scraper;
use state::Action;

/// Restores the terminal on drop so the cursor reappears and raw mode ends
/// on every exit path, error returns and unwinds included.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the interface over an already-fetched headline list until quit.
///
/// `open_first` immediately opens the headline at that index, as if the user
/// had selected it and pressed confirm.
pub async fn run(
    headlines: Vec<scraper::Headline>,
    limit: usize,
    theme: RenderTheme,
    open_first: Option<usize>,
) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut app = App::new(headlines, limit, cols as usize, rows as usize);

    let _guard = TerminalGuard::acquire()?;
    let mut stdout = io::stdout();

    if let Some(index) = open_first {
        app.select(index);
        open_selected(&mut app).await;
    }
    render::draw(&mut stdout, &app, &theme)?;

    while !app.should_exit {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = input::action_for(app.mode, key.code) else {
            continue;
        };

        match action {
            Action::Open if app.mode == Mode::List => open_selected(&mut app).await,
            action => app.apply(action),
        }
        render::draw(&mut stdout, &app, &theme)?;
    }
    Ok(())
}

/// Fetch and show the selected article; a failure becomes a status message
/// and the interface stays in list mode.
async fn open_selected(app: &mut App) {
    let Some(url) = app.selected_headline().map(|h| h.url.clone()) else {
        return;
    };
    match scraper::fetch_article(&url).await {
        Ok(blocks) => app.show_article(blocks),
        Err(err) => app.set_status(format!("could not open article: {}", err)),
    }
}
