//! Full-redraw rendering over crossterm.
//!
//! Every draw clears the screen and reprints from current state; there is no
//! differential rendering.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal::{Clear, ClearType},
};

use crate::scraper::{BlockKind, TextBlock};

use super::state::{App, Mode};

/// Colours for the selected list row, passed in rather than read from globals
#[derive(Debug, Clone, Copy)]
pub struct RenderTheme {
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Default for RenderTheme {
    fn default() -> Self {
        Self {
            highlight_fg: Color::Black,
            highlight_bg: Color::White,
        }
    }
}

/// Clear the screen and redraw the current view
pub fn draw(out: &mut impl Write, app: &App, theme: &RenderTheme) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    match app.mode {
        Mode::List => draw_list(out, app, theme)?,
        Mode::Article => draw_article(out, app)?,
    }
    out.flush()
}

fn draw_list(out: &mut impl Write, app: &App, theme: &RenderTheme) -> io::Result<()> {
    for (row, headline) in app.visible_headlines().iter().enumerate() {
        queue!(out, MoveTo(0, row as u16))?;
        if row == app.selected() {
            queue!(
                out,
                SetColors(Colors::new(theme.highlight_fg, theme.highlight_bg)),
                Print(headline.display_title()),
                ResetColor
            )?;
        } else {
            queue!(out, Print(headline.display_title()))?;
        }
    }

    if let Some(message) = &app.status {
        queue!(out, MoveTo(0, app.visible_count() as u16 + 1), Print(message))?;
    }
    Ok(())
}

fn draw_article(out: &mut impl Write, app: &App) -> io::Result<()> {
    let on_screen = app
        .article_lines
        .iter()
        .skip(app.scroll)
        .take(app.view_rows());

    for (row, (kind, line)) in on_screen.enumerate() {
        queue!(out, MoveTo(0, row as u16))?;
        match kind {
            BlockKind::Heading => queue!(
                out,
                SetAttribute(Attribute::Bold),
                Print(line),
                SetAttribute(Attribute::Reset)
            )?,
            BlockKind::Paragraph => queue!(out, Print(line))?,
        }
    }
    Ok(())
}

/// Wrap article blocks into display lines, one blank line between blocks.
/// Each wrapped line keeps the kind of the block it came from.
pub fn layout_article(blocks: &[TextBlock], width: usize) -> Vec<(BlockKind, String)> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for block in blocks {
        for line in textwrap::wrap(&block.text, width) {
            lines.push((block.kind, line.into_owned()));
        }
        lines.push((block.kind, String::new()));
    }
    // No separator after the last block
    if lines.last().is_some_and(|(_, line)| line.is_empty()) {
        lines.pop();
    }
    lines
}
