//! Keyboard event mapping (key -> Action).
//!
//! Keys arrive from crossterm as tagged `KeyCode` variants, so character and
//! special keys are distinguished at this boundary rather than downstream.

use crossterm::event::KeyCode;

use super::state::{Action, Mode};

/// Map a key press to an action for the current mode; unknown keys are ignored
pub fn action_for(mode: Mode, key: KeyCode) -> Option<Action> {
    match mode {
        Mode::List => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('g') => Some(Action::GotoTop),
            KeyCode::Char('G') => Some(Action::GotoBottom),
            KeyCode::Enter => Some(Action::Open),
            _ => None,
        },
        Mode::Article => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('g') => Some(Action::GotoTop),
            KeyCode::Char('G') => Some(Action::GotoBottom),
            KeyCode::Char('b') | KeyCode::Esc => Some(Action::Back),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_mode_maps_navigation_and_confirm() {
        assert_eq!(action_for(Mode::List, KeyCode::Char('j')), Some(Action::MoveDown));
        assert_eq!(action_for(Mode::List, KeyCode::Down), Some(Action::MoveDown));
        assert_eq!(action_for(Mode::List, KeyCode::Char('k')), Some(Action::MoveUp));
        assert_eq!(action_for(Mode::List, KeyCode::Enter), Some(Action::Open));
        assert_eq!(action_for(Mode::List, KeyCode::Char('q')), Some(Action::Quit));
    }

    #[test]
    fn back_only_exists_in_article_mode() {
        assert_eq!(action_for(Mode::List, KeyCode::Char('b')), None);
        assert_eq!(action_for(Mode::Article, KeyCode::Char('b')), Some(Action::Back));
        assert_eq!(action_for(Mode::Article, KeyCode::Esc), Some(Action::Back));
    }

    #[test]
    fn confirm_only_exists_in_list_mode() {
        assert_eq!(action_for(Mode::Article, KeyCode::Enter), None);
    }

    #[test]
    fn unknown_keys_map_to_nothing() {
        assert_eq!(action_for(Mode::List, KeyCode::Char('x')), None);
        assert_eq!(action_for(Mode::Article, KeyCode::Backspace), None);
    }
}
