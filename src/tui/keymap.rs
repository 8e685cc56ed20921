//! Key bindings for the catalog browser

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::types::Collection;

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    List,
    Search,
    Confirm,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    FocusSearch,
    LeaveSearch,
    ClearSearch,
    SubmitSearch,
    Up,
    Down,
    Top,
    Bottom,
    CycleSort,
    Favorite,
    RequestDelete,
    ConfirmYes,
    ConfirmNo,
    CloseError,
}

pub fn map_key(
    mode: Mode,
    collection: Collection,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Option<KeyAction> {
    if code == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(KeyAction::Quit);
    }

    match mode {
        // Printable keys belong to the text input
        Mode::Search => match code {
            KeyCode::Enter => Some(KeyAction::SubmitSearch),
            KeyCode::Tab | KeyCode::Down => Some(KeyAction::LeaveSearch),
            KeyCode::Esc => Some(KeyAction::ClearSearch),
            _ => None,
        },
        Mode::Confirm => match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(KeyAction::ConfirmYes),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(KeyAction::ConfirmNo),
            _ => None,
        },
        Mode::Error => match code {
            KeyCode::Esc | KeyCode::Enter => Some(KeyAction::CloseError),
            _ => None,
        },
        Mode::List => match code {
            KeyCode::Char('q') => Some(KeyAction::Quit),
            KeyCode::Char('/') => Some(KeyAction::FocusSearch),
            KeyCode::Esc => Some(KeyAction::ClearSearch),
            KeyCode::Char('j') | KeyCode::Down => Some(KeyAction::Down),
            KeyCode::Char('k') | KeyCode::Up => Some(KeyAction::Up),
            KeyCode::Char('g') | KeyCode::Home => Some(KeyAction::Top),
            KeyCode::Char('G') | KeyCode::End => Some(KeyAction::Bottom),
            KeyCode::Char('s') => Some(KeyAction::CycleSort),
            KeyCode::Char('f') if collection == Collection::Movies => Some(KeyAction::Favorite),
            KeyCode::Char('d') | KeyCode::Delete => Some(KeyAction::RequestDelete),
            _ => None,
        },
    }
}
