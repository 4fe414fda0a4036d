//! Reversible mapping from redacted literals to what replaced them.

use std::collections::HashMap;

use scrubber_core::constants::HASH_SUFFIX_LEN;
use scrubber_core::ReplacementRecord;

/// Short content hash of a matched literal: the leading hex characters of its
/// BLAKE3 digest. Collisions are possible and tolerated.
pub fn content_hash(text: &str) -> String {
    let digest = blake3::hash(text.as_bytes()).to_hex();
    digest.as_str()[..HASH_SUFFIX_LEN].to_string()
}

/// Replacement records keyed by content hash, kept in first-insertion order.
#[derive(Debug, Default)]
pub struct ReplacementStore {
    records: Vec<ReplacementRecord>,
    index: HashMap<String, usize>,
}

impl ReplacementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. A record with a known hash overwrites the old one in
    /// place, so iteration order is the order hashes were first seen.
    pub fn upsert(&mut self, record: ReplacementRecord) {
        match self.index.get(&record.hash_key) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index
                    .insert(record.hash_key.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, hash_key: &str) -> Option<&ReplacementRecord> {
        self.index.get(hash_key).map(|&slot| &self.records[slot])
    }

    pub fn records(&self) -> &[ReplacementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }

    /// Substitute every known sanitized value with its original, record by
    /// record in insertion order. Bare tokens are shared between literals of
    /// a category, so without hash suffixes the first record wins.
    pub fn restore(&self, sanitized: &str) -> String {
        let mut restored = sanitized.to_string();
        for record in &self.records {
            if restored.contains(&record.sanitized_value) {
                restored = restored.replace(&record.sanitized_value, &record.original_value);
            }
        }
        restored
    }
}
