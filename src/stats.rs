//! Stats module for computing and displaying live text statistics
//!
//! This module provides single-pass, character-based counters for words,
//! sentences and paragraphs, plus the most frequent word of a text.

pub mod counter;
pub mod stats_render;
mod stats_state;
mod types;

// Re-export public types
pub use stats_state::{StatsState, SubscriptionId};
pub use types::StatisticsSnapshot;
