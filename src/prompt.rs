//! Single-line path prompt shown in place of the help line
//!
//! Used for "Open", "Save as" and "Rename". The prompt only collects text; the app
//! decides what a submitted path means.

pub mod prompt_render;
mod prompt_state;

pub use prompt_state::{PromptAction, PromptKind, PromptState};
