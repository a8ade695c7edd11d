//! Tab strip for wordtab
//!
//! Tracks display order and selection of open documents. Selection changes
//! are reported back to the caller, which forwards them to the registry.

pub mod tab_render;
mod tab_state;

pub use tab_state::TabStrip;
