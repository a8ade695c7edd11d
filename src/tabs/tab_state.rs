use crate::documents::DocumentId;

/// Ordered tabs with at most one selected
///
/// Display order lives here and only here; the registry never sees
/// positions, so removing or reordering tabs cannot alias documents.
#[derive(Debug, Clone, Default)]
pub struct TabStrip {
    order: Vec<DocumentId>,
    selected: Option<usize>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab and select it
    pub fn push(&mut self, id: DocumentId) {
        if let Some(index) = self.position(id) {
            self.selected = Some(index);
            return;
        }
        self.order.push(id);
        self.selected = Some(self.order.len() - 1);
    }

    /// Remove a tab and return the selection afterwards
    ///
    /// When the selected tab goes away, the tab that slides into its slot is
    /// selected, or the new last tab if it was the last one.
    pub fn remove(&mut self, id: DocumentId) -> Option<DocumentId> {
        let Some(index) = self.position(id) else {
            return self.selected();
        };
        self.order.remove(index);

        self.selected = match self.selected {
            _ if self.order.is_empty() => None,
            Some(sel) if sel == index => Some(index.min(self.order.len() - 1)),
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        self.selected()
    }

    /// Select a tab by id. Returns false if it is not in the strip.
    pub fn select(&mut self, id: DocumentId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// Select the tab to the right, wrapping around
    pub fn select_next(&mut self) -> Option<DocumentId> {
        if self.order.is_empty() {
            return None;
        }
        let next = self.selected.map_or(0, |sel| (sel + 1) % self.order.len());
        self.selected = Some(next);
        self.selected()
    }

    /// Select the tab to the left, wrapping around
    pub fn select_previous(&mut self) -> Option<DocumentId> {
        if self.order.is_empty() {
            return None;
        }
        let len = self.order.len();
        let prev = self.selected.map_or(len - 1, |sel| (sel + len - 1) % len);
        self.selected = Some(prev);
        self.selected()
    }

    pub fn selected(&self) -> Option<DocumentId> {
        self.selected.and_then(|index| self.order.get(index).copied())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn ids(&self) -> &[DocumentId] {
        &self.order
    }

    pub fn position(&self, id: DocumentId) -> Option<usize> {
        self.order.iter().position(|tab| *tab == id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
