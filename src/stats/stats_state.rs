//! State management for text statistics
//!
//! This module provides the `StatsState` struct which holds the most recently
//! published snapshot and pushes every new snapshot to its subscribers.

use std::fmt;

use crate::stats::types::StatisticsSnapshot;

/// Callback invoked with each freshly published snapshot
pub type Subscriber = Box<dyn FnMut(&StatisticsSnapshot)>;

/// Handle returned by [`StatsState::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Publisher for text statistics
///
/// `StatsState` starts with the snapshot of the empty text. Each call to
/// [`refresh`](Self::refresh) recomputes from scratch, stores the result and
/// notifies subscribers in registration order.
#[derive(Default)]
pub struct StatsState {
    current: StatisticsSnapshot,
    generation: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl StatsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute statistics for `text` and publish them
    pub fn refresh(&mut self, text: &str) {
        self.publish(StatisticsSnapshot::compute(text));
    }

    /// Store `snapshot` as current and push it to every subscriber
    pub fn publish(&mut self, snapshot: StatisticsSnapshot) {
        self.current = snapshot;
        self.generation += 1;

        #[cfg(debug_assertions)]
        log::debug!(
            "stats published (gen {}): {} | most common {:?}",
            self.generation,
            self.current,
            self.current.most_common_word
        );

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.current);
        }
    }

    /// Register a callback for future snapshots
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&StatisticsSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a callback. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// The most recently published snapshot
    pub fn current(&self) -> &StatisticsSnapshot {
        &self.current
    }

    /// Number of snapshots published so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for StatsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatsState")
            .field("current", &self.current)
            .field("generation", &self.generation)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
