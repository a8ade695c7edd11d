use std::collections::BTreeMap;
use std::path::PathBuf;

#[cfg(debug_assertions)]
use log::debug;

use super::document::{DEFAULT_DOCUMENT_NAME, Document, DocumentId};
use crate::stats::{StatisticsSnapshot, StatsState, SubscriptionId};

/// Registry of open documents
///
/// Documents live in a table keyed by id, never by display position. At
/// most one of them is active, and the published statistics always reflect
/// the active document's text (or the empty text when none is active).
///
/// Every operation that takes an id treats an unknown id as a no-op.
#[derive(Debug)]
pub struct DocumentRegistry {
    documents: BTreeMap<DocumentId, Document>,
    active: Option<DocumentId>,
    next_id: u64,
    default_name: String,
    stats: StatsState,
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::with_default_name(DEFAULT_DOCUMENT_NAME)
    }

    /// Create a registry whose untitled documents use `name`
    pub fn with_default_name(name: impl Into<String>) -> Self {
        Self {
            documents: BTreeMap::new(),
            active: None,
            next_id: 1,
            default_name: name.into(),
            stats: StatsState::new(),
        }
    }

    /// Create an untitled document, make it active and refresh statistics
    pub fn create_document(&mut self, initial_text: &str) -> DocumentId {
        let name = self.default_name.clone();
        self.create_named(name, None, initial_text.to_string())
    }

    /// Create a document with an explicit name and origin path
    ///
    /// Used for opened files. Same activation and refresh rules as
    /// [`create_document`](Self::create_document).
    pub fn create_named(&mut self, name: String, path: Option<PathBuf>, text: String) -> DocumentId {
        let id = DocumentId::new(self.next_id);
        self.next_id += 1;

        #[cfg(debug_assertions)]
        debug!("create document {} {:?} ({} bytes)", id, name, text.len());

        self.documents.insert(id, Document::new(id, name, path, text));
        self.active = Some(id);
        self.refresh();
        id
    }

    /// Remove a document
    ///
    /// Closing the active document leaves no document active and publishes
    /// empty statistics. Picking a replacement is the caller's job. Closing
    /// a background document publishes nothing.
    pub fn close_document(&mut self, id: DocumentId) {
        if self.documents.remove(&id).is_none() {
            #[cfg(debug_assertions)]
            debug!("close ignored: unknown document {}", id);
            return;
        }

        #[cfg(debug_assertions)]
        debug!("closed document {}", id);

        if self.active == Some(id) {
            self.active = None;
            self.refresh();
        }
    }

    /// Change the active document and refresh statistics
    ///
    /// An unknown id leaves everything untouched. `None` and known ids always
    /// refresh, even when nothing changed.
    pub fn set_active(&mut self, id: Option<DocumentId>) {
        if let Some(id) = id
            && !self.documents.contains_key(&id)
        {
            #[cfg(debug_assertions)]
            debug!("activate ignored: unknown document {}", id);
            return;
        }

        #[cfg(debug_assertions)]
        debug!("active document {:?} -> {:?}", self.active, id);

        self.active = id;
        self.refresh();
    }

    /// Replace a document's text
    ///
    /// Statistics are recomputed only when `id` is the active document.
    pub fn update_text(&mut self, id: DocumentId, text: &str) {
        let Some(document) = self.documents.get_mut(&id) else {
            return;
        };
        document.set_text(text);

        if self.active == Some(id) {
            self.refresh();
        }
    }

    /// Replace the active document's text. No-op when nothing is active.
    pub fn on_edit(&mut self, text: &str) {
        if let Some(id) = self.active {
            self.update_text(id, text);
        }
    }

    /// Text of the active document, or `""` when none is active
    pub fn active_text(&self) -> &str {
        self.active_document().map(Document::text).unwrap_or("")
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active.and_then(|id| self.documents.get(&id))
    }

    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Change the display name of a document
    pub fn rename(&mut self, id: DocumentId, name: impl Into<String>) {
        if let Some(document) = self.documents.get_mut(&id) {
            document.set_name(name.into());
        }
    }

    /// Record that a document was written to `path` under display `name`
    pub fn mark_saved(&mut self, id: DocumentId, path: PathBuf, name: impl Into<String>) {
        if let Some(document) = self.documents.get_mut(&id) {
            document.mark_saved(path, name.into());
        }
    }

    /// Ids of open documents in creation order
    pub fn ids(&self) -> Vec<DocumentId> {
        self.documents.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The most recently published statistics
    pub fn snapshot(&self) -> &StatisticsSnapshot {
        self.stats.current()
    }

    /// Register a callback that receives each published snapshot
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&StatisticsSnapshot) + 'static,
    {
        self.stats.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.stats.unsubscribe(id);
    }

    fn refresh(&mut self) {
        let text = self
            .active
            .and_then(|id| self.documents.get(&id))
            .map(Document::text)
            .unwrap_or("");
        self.stats.refresh(text);
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
