//! wordtab library - multi-document text editor core with live statistics
//!
//! The document registry and statistics engine are independent of the
//! terminal front end and can be driven directly.

pub mod app;
pub mod config;
pub mod documents;
pub mod editor;
pub mod error;
pub mod files;
pub mod help;
pub mod notification;
pub mod prompt;
pub mod stats;
pub mod tabs;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use documents::{DocumentId, DocumentRegistry};
pub use stats::StatisticsSnapshot;
