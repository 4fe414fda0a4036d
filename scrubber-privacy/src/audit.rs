//! Audit sinks and the statistics computed over them.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use scrubber_core::constants::TOP_CATEGORY_LIMIT;
use scrubber_core::traits::IAuditSink;
use scrubber_core::{SanitizationEvent, SanitizationStats, StatsSummary};

use crate::sync::lock;

/// Keeps every event for the life of the engine.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    events: Mutex<Vec<SanitizationEvent>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IAuditSink for InMemoryAuditLog {
    fn append(&self, event: SanitizationEvent) {
        lock(&self.events).push(event);
    }

    fn events(&self) -> Vec<SanitizationEvent> {
        lock(&self.events).clone()
    }

    fn len(&self) -> usize {
        lock(&self.events).len()
    }

    fn clear(&self) {
        lock(&self.events).clear();
    }
}

/// Keeps the most recent `capacity` events, dropping the oldest.
#[derive(Debug)]
pub struct BoundedAuditLog {
    capacity: usize,
    events: Mutex<VecDeque<SanitizationEvent>>,
}

impl BoundedAuditLog {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            events: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl IAuditSink for BoundedAuditLog {
    fn append(&self, event: SanitizationEvent) {
        let mut events = lock(&self.events);
        while events.len() >= self.capacity {
            events.pop_front();
        }
        events.push_back(event);
    }

    fn events(&self) -> Vec<SanitizationEvent> {
        lock(&self.events).iter().cloned().collect()
    }

    fn len(&self) -> usize {
        lock(&self.events).len()
    }

    fn clear(&self) {
        lock(&self.events).clear();
    }
}

/// The sink a configured capacity asks for.
pub fn sink_for_capacity(capacity: Option<usize>) -> Arc<dyn IAuditSink> {
    match capacity {
        Some(capacity) => Arc::new(BoundedAuditLog::new(capacity)),
        None => Arc::new(InMemoryAuditLog::new()),
    }
}

/// Aggregate retained events into stats.
///
/// Categories are ranked by the number of calls they appeared in. Ties keep
/// the order categories were first seen.
pub fn summarize(events: &[SanitizationEvent], replacement_map_size: usize) -> SanitizationStats {
    let Some(last) = events.last() else {
        return SanitizationStats::no_activity();
    };

    let total_sanitizations = events.len();
    let total_pii_detected: usize = events.iter().map(|e| e.pii_detected).sum();

    let mut counts: Vec<(String, usize)> = Vec::new();
    for category in events.iter().flat_map(|e| e.pii_types.iter()) {
        match counts.iter_mut().find(|(id, _)| id == category) {
            Some((_, count)) => *count += 1,
            None => counts.push((category.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_CATEGORY_LIMIT);

    SanitizationStats::Active(StatsSummary {
        total_sanitizations,
        total_pii_detected,
        average_pii_per_text: total_pii_detected as f64 / total_sanitizations as f64,
        most_common_pii_types: counts,
        replacement_map_size,
        last_sanitization: Some(last.timestamp),
    })
}
