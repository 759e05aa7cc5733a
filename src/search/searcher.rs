//! The search pipeline: message in, ranked suggestions out.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::extract_keywords;
use crate::error::Result;
use crate::search::query::{
    CANDIDATE_LIMIT, KEYWORD_CAP, TAG_LOOKUP_LIMIT, guess_desired_type,
};
use crate::search::ranker::{compare_ranked, score_candidate};
use crate::search::snippet::{SNIPPET_MAX_CHARS, make_snippet};
use crate::search::store::{CandidateFilter, ItemStore, ItemType};

/// A ranked item suggestion returned to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Item identifier.
    pub id: i64,
    /// Item title, verbatim.
    pub title: String,
    /// Lost or found.
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// First image of the item, if any.
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    /// Whitespace-collapsed, length-capped description preview.
    #[serde(rename = "descriptionSnippet")]
    pub description_snippet: String,
    /// Relevance score from substring ranking.
    pub score: i64,
    /// Deep link to the item page.
    pub link: String,
}

/// The full outcome of a search: what was searched for and what matched.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Keywords extracted from the message, in first-occurrence order.
    pub keywords: Vec<String>,
    /// Which side of the board was searched, if a hint decided one.
    pub desired_type: Option<ItemType>,
    /// Ranked suggestions, at most `max_results`.
    pub results: Vec<Suggestion>,
}

/// Runs the keyword search pipeline against an [`ItemStore`].
#[derive(Clone)]
pub struct ItemSearcher {
    store: Arc<dyn ItemStore>,
}

impl ItemSearcher {
    /// Create a searcher over the given store.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        ItemSearcher { store }
    }

    /// Search items matching a free-text message.
    ///
    /// Extracts up to [`KEYWORD_CAP`] keywords; with none surviving the
    /// filters the outcome is empty and the store is never called. Otherwise
    /// keywords are resolved to tags, a recency-bounded candidate set is
    /// fetched, and candidates are scored and ordered in memory (score
    /// descending, then id descending). Store failures propagate unchanged.
    pub async fn search(&self, message: &str, max_results: usize) -> Result<SearchOutcome> {
        let keywords = extract_keywords(message, KEYWORD_CAP);
        let desired_type = guess_desired_type(message);

        if keywords.is_empty() {
            return Ok(SearchOutcome {
                keywords,
                desired_type,
                results: Vec::new(),
            });
        }

        let tags = self
            .store
            .find_tags_by_name_substring(&keywords, TAG_LOOKUP_LIMIT)
            .await?;
        let tag_ids_any: Vec<i64> = tags.into_iter().map(|t| t.id).collect();

        let filter = CandidateFilter {
            item_type: desired_type,
            keywords_any: keywords.clone(),
            tag_ids_any,
        };
        let candidates = self
            .store
            .find_item_candidates(&filter, CANDIDATE_LIMIT)
            .await?;

        let mut ranked: Vec<Suggestion> = candidates
            .into_iter()
            .map(|c| {
                let score = score_candidate(&c, &keywords);
                Suggestion {
                    id: c.id,
                    title: c.title,
                    item_type: c.item_type,
                    image_url: c.first_image_url,
                    description_snippet: make_snippet(&c.description, SNIPPET_MAX_CHARS),
                    score,
                    link: format!("/items/{}", c.id),
                }
            })
            .collect();

        ranked.sort_by(|a, b| compare_ranked((a.score, a.id), (b.score, b.id)));
        ranked.truncate(max_results);

        Ok(SearchOutcome {
            keywords,
            desired_type,
            results: ranked,
        })
    }
}

impl std::fmt::Debug for ItemSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemSearcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::memory::MemoryItemStore;
    use crate::search::query::DEFAULT_MAX_RESULTS;
    use crate::search::store::ItemCandidate;

    fn seeded_store() -> MemoryItemStore {
        let store = MemoryItemStore::new();
        store.add_tag(1, "wallet");
        store.add_tag(2, "phone");
        store.add_item(ItemCandidate {
            id: 1,
            title: "Black wallet".to_string(),
            description: "Leather wallet found near the main gate".to_string(),
            item_type: ItemType::Found,
            first_image_url: Some("/uploads/wallet.jpg".to_string()),
            tag_names: vec!["wallet".to_string()],
        });
        store.add_item(ItemCandidate {
            id: 2,
            title: "Phone charger".to_string(),
            description: "White USB-C charger left in room 204".to_string(),
            item_type: ItemType::Found,
            first_image_url: None,
            tag_names: vec!["phone".to_string()],
        });
        store.add_item(ItemCandidate {
            id: 3,
            title: "Lost student card".to_string(),
            description: "Student ID card, name starts with M".to_string(),
            item_type: ItemType::Lost,
            first_image_url: None,
            tag_names: vec![],
        });
        store
    }

    #[tokio::test]
    async fn test_search_ranks_title_matches_first() {
        let searcher = ItemSearcher::new(Arc::new(seeded_store()));
        let outcome = searcher
            .search("I lost my black wallet near the gate", DEFAULT_MAX_RESULTS)
            .await
            .unwrap();

        assert_eq!(outcome.desired_type, Some(ItemType::Found));
        assert!(!outcome.results.is_empty());
        assert_eq!(outcome.results[0].id, 1);
        assert_eq!(outcome.results[0].link, "/items/1");
        assert!(outcome.results[0].score > 0);
    }

    #[tokio::test]
    async fn test_empty_message_skips_store() {
        let store = Arc::new(MemoryItemStore::new());
        let searcher = ItemSearcher::new(store.clone());

        for msg in ["", "the is a", "   !!"] {
            let outcome = searcher.search(msg, DEFAULT_MAX_RESULTS).await.unwrap();
            assert!(outcome.keywords.is_empty());
            assert!(outcome.results.is_empty());
        }
        assert_eq!(store.calls(), 0, "store must not be touched");
    }

    #[tokio::test]
    async fn test_type_filter_applied() {
        let searcher = ItemSearcher::new(Arc::new(seeded_store()));
        // "found a wallet" -> desired type lost -> the found wallet is excluded
        let outcome = searcher
            .search("found a black wallet today", DEFAULT_MAX_RESULTS)
            .await
            .unwrap();
        assert_eq!(outcome.desired_type, Some(ItemType::Lost));
        assert!(outcome.results.iter().all(|r| r.item_type == ItemType::Lost));
    }

    #[tokio::test]
    async fn test_max_results_truncation() {
        let store = MemoryItemStore::new();
        for id in 1..=10 {
            store.add_item(ItemCandidate {
                id,
                title: format!("umbrella {id}"),
                description: "black umbrella".to_string(),
                item_type: ItemType::Found,
                first_image_url: None,
                tag_names: vec![],
            });
        }
        let searcher = ItemSearcher::new(Arc::new(store));
        let outcome = searcher.search("black umbrella gone", 3).await.unwrap();
        assert_eq!(outcome.results.len(), 3);
        // equal scores: larger (newer) ids first
        let ids: Vec<i64> = outcome.results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 9, 8]);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = Arc::new(MemoryItemStore::new().failing());
        let searcher = ItemSearcher::new(store);
        let err = searcher
            .search("black wallet gone", DEFAULT_MAX_RESULTS)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Store error"));
    }
}
