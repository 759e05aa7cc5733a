//! In-memory item store for testing and the CLI demo.
//!
//! Mirrors the relational queries a production backend would run: tag lookup
//! by case-insensitive substring, candidate fetch by type/keyword/tag filter
//! ordered most-recent-first. Insertion uses item ids as the recency proxy —
//! larger id means newer post. The store counts its calls so tests can assert
//! the empty-keyword short-circuit, and can be switched into a failing mode
//! to exercise error propagation.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{PeydaError, Result};
use crate::search::store::{CandidateFilter, ItemCandidate, ItemStore, TagRecord};

/// A thread-safe in-memory [`ItemStore`].
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    tags: Mutex<Vec<TagRecord>>,
    items: Mutex<Vec<ItemCandidate>>,
    calls: AtomicUsize,
    fail: bool,
}

impl MemoryItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the store into failing mode: every operation returns a store
    /// error. Used to test that fetch failures propagate.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Register a tag in the vocabulary.
    pub fn add_tag(&self, id: i64, name: &str) {
        self.tags.lock().unwrap().push(TagRecord {
            id,
            name: name.to_string(),
        });
    }

    /// Add an item. Larger ids are treated as more recent.
    pub fn add_item(&self, item: ItemCandidate) {
        self.items.lock().unwrap().push(item);
    }

    /// Number of store operations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check_failing(&self) -> Result<()> {
        if self.fail {
            Err(PeydaError::store("memory store is in failing mode"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn find_tags_by_name_substring(
        &self,
        keywords: &[String],
        limit: usize,
    ) -> Result<Vec<TagRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;

        let tags = self.tags.lock().unwrap();
        let mut matches: Vec<TagRecord> = tags
            .iter()
            .filter(|t| {
                let name = t.name.to_lowercase();
                keywords.iter().any(|k| name.contains(&k.to_lowercase()))
            })
            .cloned()
            .collect();
        matches.truncate(limit);
        Ok(matches)
    }

    async fn find_item_candidates(
        &self,
        filter: &CandidateFilter,
        limit: usize,
    ) -> Result<Vec<ItemCandidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;

        let tag_names_any: Vec<String> = {
            let tags = self.tags.lock().unwrap();
            tags.iter()
                .filter(|t| filter.tag_ids_any.contains(&t.id))
                .map(|t| t.name.to_lowercase())
                .collect()
        };

        let items = self.items.lock().unwrap();
        let mut matches: Vec<ItemCandidate> = items
            .iter()
            .filter(|item| {
                if let Some(wanted) = filter.item_type {
                    if item.item_type != wanted {
                        return false;
                    }
                }

                let title = item.title.to_lowercase();
                let description = item.description.to_lowercase();
                let keyword_hit = filter
                    .keywords_any
                    .iter()
                    .map(|k| k.to_lowercase())
                    .any(|k| title.contains(&k) || description.contains(&k));
                let tag_hit = item
                    .tag_names
                    .iter()
                    .any(|t| tag_names_any.contains(&t.to_lowercase()));

                keyword_hit || tag_hit
            })
            .cloned()
            .collect();

        // most-recent-first, then apply the fetch bound
        matches.sort_by(|a, b| b.id.cmp(&a.id));
        matches.truncate(limit);
        Ok(matches)
    }
}
