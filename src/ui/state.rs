//! Interface state: selection, mode and article viewport.
//!
//! `App` is the single owner of all mutable interface state. Every
//! transition is a pure in-memory change so the whole state machine is
//! testable without a terminal or a network.

use crate::scraper::{BlockKind, Headline, TextBlock};
use crate::ui::render;

/// What the interface is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the headline list
    List,
    /// Reading an opened article
    Article,
}

/// Semantic user operations, produced by the input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveDown,
    MoveUp,
    GotoTop,
    GotoBottom,
    /// Open the selected headline; handled by the event loop since it fetches
    Open,
    Back,
    Quit,
}

pub struct App {
    pub headlines: Vec<Headline>,
    pub mode: Mode,
    pub should_exit: bool,
    /// Message shown under the list, e.g. a failed article fetch
    pub status: Option<String>,
    /// Wrapped display lines of the opened article, with their block kind
    pub article_lines: Vec<(BlockKind, String)>,
    /// First article line currently on screen
    pub scroll: usize,
    selected: usize,
    limit: usize,
    view_cols: usize,
    view_rows: usize,
}

impl App {
    pub fn new(headlines: Vec<Headline>, limit: usize, view_cols: usize, view_rows: usize) -> Self {
        Self {
            headlines,
            mode: Mode::List,
            should_exit: false,
            status: None,
            article_lines: Vec::new(),
            scroll: 0,
            selected: 0,
            limit,
            view_cols,
            view_rows,
        }
    }

    /// Number of headlines actually shown (listing length capped by the limit)
    pub fn visible_count(&self) -> usize {
        self.headlines.len().min(self.limit)
    }

    /// The headlines on screen, in page order
    pub fn visible_headlines(&self) -> &[Headline] {
        &self.headlines[..self.visible_count()]
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_headline(&self) -> Option<&Headline> {
        self.visible_headlines().get(self.selected)
    }

    pub fn view_rows(&self) -> usize {
        self.view_rows
    }

    /// Move the selection, clamped to the visible range
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.visible_count().saturating_sub(1));
    }

    /// Apply one action. `Open` is a no-op here: the event loop performs the
    /// fetch and calls [`App::show_article`] or [`App::set_status`].
    pub fn apply(&mut self, action: Action) {
        self.status = None;

        match action {
            Action::Quit => self.should_exit = true,
            Action::MoveDown => self.move_down(),
            Action::MoveUp => self.move_up(),
            Action::GotoTop => self.goto_top(),
            Action::GotoBottom => self.goto_bottom(),
            Action::Back => self.go_back(),
            Action::Open => {}
        }
    }

    /// Switch to article mode with freshly fetched text
    pub fn show_article(&mut self, blocks: Vec<TextBlock>) {
        self.article_lines = render::layout_article(&blocks, self.view_cols);
        self.scroll = 0;
        self.status = None;
        self.mode = Mode::Article;
    }

    pub fn set_status(&mut self, message: String) {
        self.status = Some(message);
    }

    fn move_down(&mut self) {
        match self.mode {
            Mode::List => {
                if self.selected + 1 < self.visible_count() {
                    self.selected += 1;
                }
            }
            Mode::Article => {
                if self.scroll < self.max_scroll() {
                    self.scroll += 1;
                }
            }
        }
    }

    fn move_up(&mut self) {
        match self.mode {
            Mode::List => self.selected = self.selected.saturating_sub(1),
            Mode::Article => self.scroll = self.scroll.saturating_sub(1),
        }
    }

    fn goto_top(&mut self) {
        match self.mode {
            Mode::List => self.selected = 0,
            Mode::Article => self.scroll = 0,
        }
    }

    fn goto_bottom(&mut self) {
        match self.mode {
            Mode::List => self.selected = self.visible_count().saturating_sub(1),
            Mode::Article => self.scroll = self.max_scroll(),
        }
    }

    /// Discard the article view; the list selection is untouched
    fn go_back(&mut self) {
        if self.mode != Mode::Article {
            return;
        }
        self.mode = Mode::List;
        self.article_lines.clear();
        self.scroll = 0;
    }

    fn max_scroll(&self) -> usize {
        self.article_lines.len().saturating_sub(self.view_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headlines(count: usize) -> Vec<Headline> {
        (0..count)
            .map(|i| Headline {
                title: format!("Kop {}", i),
                relative_date: "1 uur geleden".to_string(),
                url: format!("https://nos.nl/artikel/{}", i),
            })
            .collect()
    }

    fn blocks(count: usize) -> Vec<TextBlock> {
        (0..count)
            .map(|i| TextBlock {
                kind: BlockKind::Paragraph,
                text: format!("Alinea {}.", i),
            })
            .collect()
    }

    #[test]
    fn selection_stays_within_the_visible_range() {
        let mut app = App::new(headlines(5), 3, 80, 24);

        for _ in 0..20 {
            app.apply(Action::MoveDown);
        }
        assert_eq!(app.selected(), 2);

        for _ in 0..20 {
            app.apply(Action::MoveUp);
        }
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn short_lists_clamp_to_the_list_length() {
        let mut app = App::new(headlines(2), 10, 80, 24);

        for _ in 0..5 {
            app.apply(Action::MoveDown);
        }
        assert_eq!(app.selected(), 1);
        assert_eq!(app.visible_count(), 2);
    }

    #[test]
    fn goto_top_and_bottom_jump_the_selection() {
        let mut app = App::new(headlines(8), 10, 80, 24);

        app.apply(Action::GotoBottom);
        assert_eq!(app.selected(), 7);
        app.apply(Action::GotoTop);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn back_returns_to_the_list_with_selection_intact() {
        let mut app = App::new(headlines(5), 10, 80, 24);
        app.apply(Action::MoveDown);
        app.apply(Action::MoveDown);

        app.show_article(blocks(3));
        assert_eq!(app.mode, Mode::Article);

        app.apply(Action::Back);
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.selected(), 2);
        assert!(app.article_lines.is_empty());
    }

    #[test]
    fn back_is_ignored_in_list_mode() {
        let mut app = App::new(headlines(3), 10, 80, 24);
        app.apply(Action::MoveDown);

        app.apply(Action::Back);
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn quit_sets_the_exit_flag_in_both_modes() {
        let mut app = App::new(headlines(3), 10, 80, 24);
        app.apply(Action::Quit);
        assert!(app.should_exit);

        let mut app = App::new(headlines(3), 10, 80, 24);
        app.show_article(blocks(2));
        app.apply(Action::Quit);
        assert!(app.should_exit);
        assert_eq!(app.mode, Mode::Article);
    }

    #[test]
    fn article_scroll_clamps_at_both_ends() {
        // 30 one-line paragraphs plus separators, 10 rows on screen
        let mut app = App::new(headlines(3), 10, 80, 10);
        app.show_article(blocks(30));
        let max = app.article_lines.len() - 10;

        app.apply(Action::MoveUp);
        assert_eq!(app.scroll, 0);

        for _ in 0..1000 {
            app.apply(Action::MoveDown);
        }
        assert_eq!(app.scroll, max);

        app.apply(Action::GotoTop);
        assert_eq!(app.scroll, 0);
        app.apply(Action::GotoBottom);
        assert_eq!(app.scroll, max);
    }

    #[test]
    fn short_articles_never_scroll() {
        let mut app = App::new(headlines(3), 10, 80, 24);
        app.show_article(blocks(2));

        for _ in 0..10 {
            app.apply(Action::MoveDown);
        }
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn status_message_clears_on_the_next_action() {
        let mut app = App::new(headlines(3), 10, 80, 24);
        app.set_status("could not open article".to_string());
        assert!(app.status.is_some());

        app.apply(Action::MoveDown);
        assert_eq!(app.status, None);
    }

    #[test]
    fn select_clamps_out_of_range_indices() {
        let mut app = App::new(headlines(4), 10, 80, 24);
        app.select(99);
        assert_eq!(app.selected(), 3);
    }
}
