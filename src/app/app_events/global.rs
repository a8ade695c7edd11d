use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;

/// Keys that work regardless of which document is active.
/// Returns true if the key was consumed.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            return true;
        }
        KeyCode::F(2) => {
            app.toggle_stats_popup();
            return true;
        }
        KeyCode::Esc => {
            if app.stats_popup_visible {
                app.stats_popup_visible = false;
            } else {
                app.notification.dismiss();
            }
            return true;
        }
        _ => {}
    }

    // The popup swallows everything else while open
    if app.stats_popup_visible {
        return true;
    }

    match key.code {
        KeyCode::Char('n') if ctrl => {
            app.new_document();
        }
        KeyCode::Char('w') if ctrl => app.close_active(),
        KeyCode::Char('o') if ctrl => app.open_open_prompt(),
        KeyCode::Char('s') if ctrl => app.open_save_prompt(),
        KeyCode::Char('r') if ctrl => app.open_rename_prompt(),
        KeyCode::PageDown if ctrl => app.select_next_tab(),
        KeyCode::PageUp if ctrl => app.select_previous_tab(),
        KeyCode::Right if alt => app.select_next_tab(),
        KeyCode::Left if alt => app.select_previous_tab(),
        _ => return false,
    }

    true
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
