//! Document registry for wordtab
//!
//! Owns every open text buffer under a stable [`DocumentId`] and keeps the
//! published statistics bound to whichever document is active.

mod document;
mod registry;

pub use document::{DEFAULT_DOCUMENT_NAME, Document, DocumentId};
pub use registry::DocumentRegistry;
