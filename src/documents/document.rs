use std::fmt;
use std::path::{Path, PathBuf};

/// Name given to documents that were not opened from a file
pub const DEFAULT_DOCUMENT_NAME: &str = "New File";

/// Stable identifier issued by the registry
///
/// Ids come from a monotonically increasing counter and are never reused,
/// so a stale id can only ever miss, never alias another document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(u64);

impl DocumentId {
    pub(super) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One open text buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: DocumentId,
    name: String,
    path: Option<PathBuf>,
    text: String,
    modified: bool,
}

impl Document {
    pub(super) fn new(id: DocumentId, name: String, path: Option<PathBuf>, text: String) -> Self {
        Self {
            id,
            name,
            path,
            text,
            modified: false,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True once the buffer differs from what was last opened or saved
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Replace the buffer. Returns whether the content changed.
    pub(super) fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text.clear();
        self.text.push_str(text);
        self.modified = true;
        true
    }

    pub(super) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(super) fn mark_saved(&mut self, path: PathBuf, name: String) {
        self.path = Some(path);
        self.name = name;
        self.modified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::new(DocumentId::new(7), DEFAULT_DOCUMENT_NAME.to_string(), None, text.to_string())
    }

    #[test]
    fn test_new_document_is_unmodified() {
        let d = doc("hello");
        assert_eq!(d.id().get(), 7);
        assert_eq!(d.name(), "New File");
        assert_eq!(d.text(), "hello");
        assert!(d.path().is_none());
        assert!(!d.is_modified());
    }

    #[test]
    fn test_set_text_marks_modified_only_on_change() {
        let mut d = doc("same");
        assert!(!d.set_text("same"));
        assert!(!d.is_modified());

        assert!(d.set_text("different"));
        assert!(d.is_modified());
        assert_eq!(d.text(), "different");
    }

    #[test]
    fn test_mark_saved_clears_modified() {
        let mut d = doc("");
        d.set_text("draft");
        d.mark_saved(PathBuf::from("/tmp/notes.txt"), "notes.txt".to_string());

        assert!(!d.is_modified());
        assert_eq!(d.name(), "notes.txt");
        assert_eq!(d.path(), Some(Path::new("/tmp/notes.txt")));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(DocumentId::new(42).to_string(), "#42");
    }
}
