use std::collections::HashMap;

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::documents::DocumentId;
use crate::theme;

/// One `TextArea` per open document
///
/// The registry owns the canonical text; these buffers own cursor and
/// viewport state and hand the full text back after every change.
pub struct EditorBuffers {
    buffers: HashMap<DocumentId, TextArea<'static>>,
    placeholder: String,
}

impl EditorBuffers {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            buffers: HashMap::new(),
            placeholder: placeholder.into(),
        }
    }

    /// Create the buffer for a document, replacing any existing one
    pub fn open(&mut self, id: DocumentId, text: &str) {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let mut textarea = TextArea::new(lines);

        // Undo/redo is not offered
        textarea.set_max_histories(0);
        textarea.set_placeholder_text(self.placeholder.as_str());
        textarea.set_placeholder_style(Style::default().fg(theme::editor::PLACEHOLDER));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::palette::CURSOR);

        self.buffers.insert(id, textarea);
    }

    pub fn close(&mut self, id: DocumentId) {
        self.buffers.remove(&id);
    }

    pub fn get(&self, id: DocumentId) -> Option<&TextArea<'static>> {
        self.buffers.get(&id)
    }

    pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut TextArea<'static>> {
        self.buffers.get_mut(&id)
    }

    /// Full text of a buffer, lines joined with `'\n'`
    pub fn text(&self, id: DocumentId) -> Option<String> {
        self.buffers.get(&id).map(|t| t.lines().join("\n"))
    }

    /// Feed a key to a buffer. Returns the new text if the content changed.
    pub fn input(&mut self, id: DocumentId, key: KeyEvent) -> Option<String> {
        let textarea = self.buffers.get_mut(&id)?;
        if textarea.input(key) {
            Some(textarea.lines().join("\n"))
        } else {
            None
        }
    }

    /// Insert text at the cursor. Returns the new text if anything was inserted.
    pub fn insert_str(&mut self, id: DocumentId, text: &str) -> Option<String> {
        let textarea = self.buffers.get_mut(&id)?;
        if textarea.insert_str(text) {
            Some(textarea.lines().join("\n"))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

/// Terminals deliver pasted line breaks as `\r` or `\r\n`
pub fn normalize_paste(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
