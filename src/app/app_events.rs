use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

use super::app_state::App;
use crate::prompt::{PromptAction, PromptKind};

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.notification.clear_if_expired();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.paste(&text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.prompt.is_visible() {
            self.handle_prompt_key(key);
            return;
        }

        if global::handle_global_keys(self, key) {
            return;
        }

        self.handle_edit_key(key);
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match self.prompt.handle_key(key) {
            PromptAction::Submit(PromptKind::Open, input) => self.open_path(&input),
            PromptAction::Submit(PromptKind::SaveAs, input) => self.save_active_to(&input),
            PromptAction::Submit(PromptKind::Rename, input) => self.rename_active(&input),
            PromptAction::Cancel | PromptAction::Continue => {}
        }
    }

    /// Forward a key to the active editor and push changed text to the registry
    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(id) = self.registry.active_id() else {
            return;
        };

        if let Some(text) = self.editors.input(id, key) {
            self.registry.update_text(id, &text);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
