//! Keyboard Input Handler
//!
//! Dispatches key events to navigation, copy, preview and quit actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{navigation, App};
use crate::model::Pane;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // The preview popup swallows input until it is closed
    if app.model.ui.preview.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_preview(),
            KeyCode::Char('c') => app.copy_selected(),
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.model.ui.should_quit = true;
        }

        KeyCode::Tab => {
            app.model.dashboard.focus = match app.model.dashboard.focus {
                Pane::Folders => Pane::Images,
                Pane::Images => Pane::Folders,
            };
        }

        KeyCode::Down | KeyCode::Char('j') => match app.model.dashboard.focus {
            Pane::Folders => app.model.dashboard.move_folder_selection(true),
            Pane::Images => {
                let columns = app.grid_columns;
                app.model.dashboard.move_image_selection_vertical(columns, true);
            }
        },

        KeyCode::Up | KeyCode::Char('k') => match app.model.dashboard.focus {
            Pane::Folders => app.model.dashboard.move_folder_selection(false),
            Pane::Images => {
                let columns = app.grid_columns;
                app.model.dashboard.move_image_selection_vertical(columns, false);
            }
        },

        KeyCode::Right | KeyCode::Char('l') => {
            if app.model.dashboard.focus == Pane::Images {
                app.model.dashboard.move_image_selection_horizontal(true);
            }
        }

        KeyCode::Left | KeyCode::Char('h') => {
            if app.model.dashboard.focus == Pane::Images {
                app.model.dashboard.move_image_selection_horizontal(false);
            }
        }

        KeyCode::Enter => match app.model.dashboard.focus {
            Pane::Folders => navigation::enter_selected_folder(&mut app.model, &app.api_tx),
            Pane::Images => app.open_preview(),
        },

        KeyCode::Backspace => navigation::go_to_parent(&mut app.model, &app.api_tx),

        // Breadcrumb bar: 0 is the Home control, 1..9 select a segment
        KeyCode::Char('0') | KeyCode::Home => navigation::go_home(&mut app.model, &app.api_tx),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            navigation::select_breadcrumb(&mut app.model, &app.api_tx, index);
        }

        KeyCode::Char('r') => app.refresh(),

        KeyCode::Char('c') => app.copy_selected(),

        KeyCode::Char('d') => app.model.ui.cycle_display_mode(),

        _ => {}
    }

    Ok(())
}
