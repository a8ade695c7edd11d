use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    SaveAs,
    Rename,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Open => "Open: ",
            PromptKind::SaveAs => "Save as: ",
            PromptKind::Rename => "Rename: ",
        }
    }
}

/// Outcome of a key press while the prompt is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Submit(PromptKind, String),
    Cancel,
    Continue,
}

pub struct PromptState {
    kind: Option<PromptKind>,
    textarea: TextArea<'static>,
}

impl Default for PromptState {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptState {
    pub fn new() -> Self {
        Self {
            kind: None,
            textarea: new_textarea(""),
        }
    }

    /// Show the prompt with `initial` text and the cursor at its end
    pub fn open(&mut self, kind: PromptKind, initial: &str) {
        self.textarea = new_textarea(initial);
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
        self.kind = Some(kind);
    }

    pub fn close(&mut self) {
        self.kind = None;
        self.textarea = new_textarea("");
    }

    pub fn is_visible(&self) -> bool {
        self.kind.is_some()
    }

    pub fn kind(&self) -> Option<PromptKind> {
        self.kind
    }

    pub fn value(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Enter submits, Esc cancels, everything else edits the line.
    /// The prompt closes itself on submit and cancel.
    pub fn handle_key(&mut self, key: KeyEvent) -> PromptAction {
        let Some(kind) = self.kind else {
            return PromptAction::Continue;
        };

        match key.code {
            KeyCode::Esc => {
                self.close();
                PromptAction::Cancel
            }
            KeyCode::Enter => {
                let value = self.value().to_string();
                self.close();
                PromptAction::Submit(kind, value)
            }
            // Ctrl+M and Ctrl+J insert a newline in TextArea
            KeyCode::Char('m') | KeyCode::Char('j')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                PromptAction::Continue
            }
            _ => {
                self.textarea.input(key);
                PromptAction::Continue
            }
        }
    }

    /// Paste into the prompt, dropping line breaks
    pub fn paste(&mut self, text: &str) {
        if !self.is_visible() {
            return;
        }
        let single_line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.textarea.insert_str(single_line);
    }
}

fn new_textarea(initial: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![initial.to_string()]);
    textarea.set_max_histories(0);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea.set_style(Style::default().fg(theme::prompt::TEXT).bg(theme::prompt::BG));
    textarea
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_str(prompt: &mut PromptState, text: &str) {
        for c in text.chars() {
            prompt.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_hidden_by_default() {
        let prompt = PromptState::new();
        assert!(!prompt.is_visible());
        assert_eq!(prompt.kind(), None);
        assert_eq!(prompt.value(), "");
    }

    #[test]
    fn test_open_with_initial_text_appends_at_end() {
        let mut prompt = PromptState::new();
        prompt.open(PromptKind::SaveAs, "notes");
        type_str(&mut prompt, ".txt");

        assert_eq!(prompt.value(), "notes.txt");
        assert_eq!(prompt.kind(), Some(PromptKind::SaveAs));
    }

    #[test]
    fn test_enter_submits_and_closes() {
        let mut prompt = PromptState::new();
        prompt.open(PromptKind::Open, "");
        type_str(&mut prompt, "a.txt");

        let action = prompt.handle_key(key(KeyCode::Enter));
        assert_eq!(action, PromptAction::Submit(PromptKind::Open, "a.txt".to_string()));
        assert!(!prompt.is_visible());
        assert_eq!(prompt.value(), "");
    }

    #[test]
    fn test_esc_cancels() {
        let mut prompt = PromptState::new();
        prompt.open(PromptKind::Open, "x");

        assert_eq!(prompt.handle_key(key(KeyCode::Esc)), PromptAction::Cancel);
        assert!(!prompt.is_visible());
    }

    #[test]
    fn test_backspace_edits() {
        let mut prompt = PromptState::new();
        prompt.open(PromptKind::Open, "abc");
        prompt.handle_key(key(KeyCode::Backspace));
        assert_eq!(prompt.value(), "ab");
    }

    #[test]
    fn test_ctrl_m_does_not_split_line() {
        let mut prompt = PromptState::new();
        prompt.open(PromptKind::Open, "ab");
        let action = prompt.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL));

        assert_eq!(action, PromptAction::Continue);
        assert_eq!(prompt.textarea().lines().len(), 1);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut prompt = PromptState::new();
        prompt.open(PromptKind::Open, "");
        prompt.paste("dir/\r\nfile.txt\n");
        assert_eq!(prompt.value(), "dir/file.txt");
    }

    #[test]
    fn test_keys_ignored_when_hidden() {
        let mut prompt = PromptState::new();
        assert_eq!(prompt.handle_key(key(KeyCode::Enter)), PromptAction::Continue);
        prompt.paste("ignored");
        assert_eq!(prompt.value(), "");
    }
}
