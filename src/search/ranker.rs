//! In-memory candidate scoring and ordering.
//!
//! Scoring is substring containment over normalized fields: per keyword a
//! title hit is worth 2, a description hit 1, and a tag-name hit 1. The
//! contributions are additive and deliberately uncapped — a candidate hit by
//! many keywords outranks a candidate hit by one, even if that biases toward
//! long descriptions. That bias matches the production behavior this scoring
//! was lifted from and is kept for compatibility.

use std::cmp::Ordering;

use crate::analysis::normalize;
use crate::search::store::ItemCandidate;

/// Score a candidate against the extracted keywords.
///
/// Keywords are assumed to be normalizer output already (keyword extraction
/// runs on normalized tokens).
pub fn score_candidate(candidate: &ItemCandidate, keywords: &[String]) -> i64 {
    let title = normalize(&candidate.title);
    let description = normalize(&candidate.description);
    let tags: Vec<String> = candidate.tag_names.iter().map(|t| normalize(t)).collect();

    let mut score = 0;
    for keyword in keywords {
        if keyword.is_empty() {
            continue;
        }
        if title.contains(keyword.as_str()) {
            score += 2;
        }
        if description.contains(keyword.as_str()) {
            score += 1;
        }
        if tags.iter().any(|t| t.contains(keyword.as_str())) {
            score += 1;
        }
    }

    score
}

/// Order scored candidates: score descending, then id descending so the most
/// recently created item wins ties.
pub fn compare_ranked(a: (i64, i64), b: (i64, i64)) -> Ordering {
    let (a_score, a_id) = a;
    let (b_score, b_id) = b;
    b_score.cmp(&a_score).then(b_id.cmp(&a_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::store::ItemType;

    fn candidate(id: i64, title: &str, description: &str, tags: &[&str]) -> ItemCandidate {
        ItemCandidate {
            id,
            title: title.to_string(),
            description: description.to_string(),
            item_type: ItemType::Found,
            first_image_url: None,
            tag_names: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_title_worth_double() {
        let c = candidate(1, "Black wallet", "found near gate", &[]);
        assert_eq!(score_candidate(&c, &kws(&["wallet"])), 2);
        assert_eq!(score_candidate(&c, &kws(&["gate"])), 1);
    }

    #[test]
    fn test_tag_hit_counts() {
        let c = candidate(1, "item", "no useful text", &["wallet", "leather"]);
        assert_eq!(score_candidate(&c, &kws(&["wallet"])), 1);
    }

    #[test]
    fn test_additive_across_fields_and_keywords() {
        let c = candidate(1, "black wallet", "black leather wallet", &["wallet"]);
        // "wallet": title 2 + desc 1 + tag 1 = 4; "black": title 2 + desc 1 = 3
        assert_eq!(score_candidate(&c, &kws(&["wallet", "black"])), 7);
    }

    #[test]
    fn test_matching_is_case_insensitive_via_normalization() {
        let c = candidate(1, "BLACK Wallet!", "Found IT", &[]);
        assert_eq!(score_candidate(&c, &kws(&["wallet"])), 2);
    }

    #[test]
    fn test_persian_fields() {
        let c = candidate(1, "کیف مشکی", "کیف چرمی پیدا شد", &["کیف"]);
        assert_eq!(score_candidate(&c, &kws(&["کیف"])), 4);
    }

    #[test]
    fn test_no_keywords_scores_zero() {
        let c = candidate(1, "anything", "anything", &["tag"]);
        assert_eq!(score_candidate(&c, &kws(&[])), 0);
    }

    #[test]
    fn test_ordering_score_then_id() {
        assert_eq!(compare_ranked((5, 1), (3, 9)), Ordering::Less); // higher score first
        assert_eq!(compare_ranked((3, 2), (3, 7)), Ordering::Greater); // higher id first on tie
        assert_eq!(compare_ranked((3, 7), (3, 7)), Ordering::Equal);
    }
}
