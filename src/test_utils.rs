//! Shared test utilities for wordtab
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::files::OpenedFile;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::path::PathBuf;

    /// Sample document used across statistics tests
    pub const SAMPLE_TEXT: &str = "Hello world. Hello again.\n\nNew paragraph here!";

    /// App with default config and one empty untitled document
    pub fn test_app() -> App {
        App::new(&Config::default(), Vec::new())
    }

    /// App with one document per text, named `doc1.txt`, `doc2.txt`, ...
    /// The last document is active.
    pub fn app_with_documents(texts: &[&str]) -> App {
        let files = texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let name = format!("doc{}.txt", i + 1);
                OpenedFile {
                    path: PathBuf::from(&name),
                    name,
                    text: text.to_string(),
                }
            })
            .collect();
        App::new(&Config::default(), files)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn ctrl(c: char) -> KeyEvent {
        key_with_mods(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Type text key by key, `'\n'` as Enter
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            app.handle_key_event(key(code));
        }
    }

    /// Tab strip and registry agree on the active document
    pub fn assert_in_sync(app: &App) {
        assert_eq!(app.tabs.selected(), app.registry.active_id());
        assert_eq!(app.tabs.len(), app.registry.len());
        assert_eq!(app.editors.len(), app.registry.len());
    }
}
