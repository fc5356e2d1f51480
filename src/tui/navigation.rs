//! Keyboard navigation handling.
//!
//! Key-to-action mapping is pure (`actions::determine_viewer_action`,
//! `picker::determine_picker_action`); this module is the imperative shell
//! that executes the chosen action against [`ViewerApp`].

use super::actions::{determine_viewer_action, ViewerAction, ViewerActionContext};
use super::app::{ViewMode, ViewerApp};
use super::picker::determine_picker_action;
use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

/// Handle keyboard input and return true if should quit
pub fn handle_key(app: &mut ViewerApp, key: KeyEvent) -> Result<bool> {
    // Ignore release/repeat events reported by some terminals
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    match app.view_mode() {
        ViewMode::Main => handle_main_key(app, key),
        ViewMode::Picker => handle_picker_key(app, key),
        ViewMode::Help => {
            app.set_view_mode(ViewMode::Main);
            Ok(false)
        }
    }
}

fn handle_main_key(app: &mut ViewerApp, key: KeyEvent) -> Result<bool> {
    let ctx = ViewerActionContext {
        has_report: app.has_report(),
    };

    let Some(action) = determine_viewer_action(key, ctx) else {
        return Ok(false);
    };

    execute_viewer_action(app, action)
}

/// Execute a main-view action (imperative shell).
fn execute_viewer_action(app: &mut ViewerApp, action: ViewerAction) -> Result<bool> {
    let total = app.list_len();
    let viewport = app.list_viewport();
    let page = viewport.max(1) as isize;

    match action {
        ViewerAction::Quit => return Ok(true),
        ViewerAction::OpenFile => app.request_load(),
        ViewerAction::ShowHelp => app.set_view_mode(ViewMode::Help),
        ViewerAction::ScrollUp => app.scroll_mut().scroll_by(-1, total, viewport),
        ViewerAction::ScrollDown => app.scroll_mut().scroll_by(1, total, viewport),
        ViewerAction::PageUp => app.scroll_mut().scroll_by(-page, total, viewport),
        ViewerAction::PageDown => app.scroll_mut().scroll_by(page, total, viewport),
        ViewerAction::ScrollToTop => app.scroll_mut().scroll_to_top(),
        ViewerAction::ScrollToBottom => app.scroll_mut().scroll_to_bottom(total, viewport),
    }

    Ok(false)
}

fn handle_picker_key(app: &mut ViewerApp, key: KeyEvent) -> Result<bool> {
    let Some(action) = determine_picker_action(key) else {
        return Ok(false);
    };

    let viewport = app.picker_viewport();
    let selection = match app.picker_mut() {
        Some(picker) => picker.apply(action, viewport),
        None => {
            // Picker state lost; fall back to the main view
            app.set_view_mode(ViewMode::Main);
            return Ok(false);
        }
    };

    if let Some(selection) = selection {
        app.finish_selection(selection);
    }
    Ok(false)
}
