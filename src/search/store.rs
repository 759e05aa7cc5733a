//! The storage boundary the search pipeline fetches candidates through.
//!
//! The chatbot core does not own a database; whatever persistence layer hosts
//! the lost & found items implements [`ItemStore`] and hands the core
//! read-only snapshots. Both operations are bounded and may fail — failures
//! propagate to the caller unchanged, they are never turned into empty
//! results.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Whether an item was posted as lost or as found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// The poster lost this item.
    Lost,
    /// The poster found this item.
    Found,
}

impl ItemType {
    /// The complementary side: someone who lost an item wants to browse
    /// found posts, and vice versa.
    pub fn opposite(self) -> ItemType {
        match self {
            ItemType::Lost => ItemType::Found,
            ItemType::Found => ItemType::Lost,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Lost => write!(f, "lost"),
            ItemType::Found => write!(f, "found"),
        }
    }
}

/// A tag row resolved from the tag vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    /// Tag identifier.
    pub id: i64,
    /// Tag name, e.g. `"wallet"`.
    pub name: String,
}

/// A read-only projection of a persisted item, fetched for scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCandidate {
    /// Item identifier; larger ids are more recent.
    pub id: i64,
    /// Item title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Lost or found.
    pub item_type: ItemType,
    /// URL of the first uploaded image, if any.
    pub first_image_url: Option<String>,
    /// Names of the tags attached to the item.
    pub tag_names: Vec<String>,
}

/// Filter for the candidate fetch.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    /// Restrict to one item type, if set.
    pub item_type: Option<ItemType>,
    /// Match items whose title or description contains ANY of these.
    pub keywords_any: Vec<String>,
    /// Match items carrying ANY of these tag ids.
    pub tag_ids_any: Vec<i64>,
}

/// Data access the search pipeline depends on.
///
/// Implementations must return candidates ordered most-recent-first; the
/// final ranking is done in memory by the caller, but the recency order
/// decides which items survive the fetch bound.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Resolve keywords against the tag vocabulary by case-insensitive
    /// substring match, returning at most `limit` tags.
    async fn find_tags_by_name_substring(
        &self,
        keywords: &[String],
        limit: usize,
    ) -> Result<Vec<TagRecord>>;

    /// Fetch at most `limit` items matching the filter: the type restriction
    /// (if any) AND (any keyword contained in title or description, OR any of
    /// the tag ids attached). Ordered most-recent-first.
    async fn find_item_candidates(
        &self,
        filter: &CandidateFilter,
        limit: usize,
    ) -> Result<Vec<ItemCandidate>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_type() {
        assert_eq!(ItemType::Lost.opposite(), ItemType::Found);
        assert_eq!(ItemType::Found.opposite(), ItemType::Lost);
    }

    #[test]
    fn test_type_serialization() {
        assert_eq!(serde_json::to_string(&ItemType::Lost).unwrap(), "\"lost\"");
        assert_eq!(
            serde_json::to_string(&ItemType::Found).unwrap(),
            "\"found\""
        );
        assert_eq!(ItemType::Lost.to_string(), "lost");
    }
}
