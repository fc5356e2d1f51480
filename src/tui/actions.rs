//! Pure action determination for the main viewer keys.
//!
//! `determine_viewer_action` maps a key to a user intent without touching
//! app state; `navigation` executes the intent.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered from the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Quit the application.
    Quit,

    /// Open the file picker (the "Select a JSON file" button).
    OpenFile,

    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    /// Show help overlay.
    ShowHelp,
}

/// Context needed to decide whether scrolling keys do anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerActionContext {
    /// Whether a report is displayed
    pub has_report: bool,
}

/// Pure function: determine which action a key triggers in the main view.
///
/// Returns `None` for unbound keys and for scrolling while nothing is loaded.
pub fn determine_viewer_action(key: KeyEvent, ctx: ViewerActionContext) -> Option<ViewerAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(ViewerAction::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => ViewerAction::Quit,
        KeyCode::Char('o') | KeyCode::Enter => ViewerAction::OpenFile,
        KeyCode::Char('?') => ViewerAction::ShowHelp,
        KeyCode::Up | KeyCode::Char('k') => ViewerAction::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => ViewerAction::ScrollDown,
        KeyCode::PageUp => ViewerAction::PageUp,
        KeyCode::PageDown | KeyCode::Char(' ') => ViewerAction::PageDown,
        KeyCode::Home | KeyCode::Char('g') => ViewerAction::ScrollToTop,
        KeyCode::End | KeyCode::Char('G') => ViewerAction::ScrollToBottom,
        _ => return None,
    };

    if action.is_scroll() && !ctx.has_report {
        return None;
    }
    Some(action)
}

impl ViewerAction {
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            Self::ScrollUp
                | Self::ScrollDown
                | Self::PageUp
                | Self::PageDown
                | Self::ScrollToTop
                | Self::ScrollToBottom
        )
    }
}
