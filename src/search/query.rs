//! Search query derivation: desired item type and fetch limits.

use crate::analysis::normalize;
use crate::intent::hints::{FOUND_SIDE_HINTS, LOST_SIDE_HINTS, contains_any};
use crate::search::store::ItemType;

/// Keyword cap for search messages.
pub const KEYWORD_CAP: usize = 8;

/// Maximum number of tags resolved from keywords.
pub const TAG_LOOKUP_LIMIT: usize = 10;

/// Maximum number of candidates fetched before in-memory ranking.
///
/// Known limitation kept for compatibility: the fetch is most-recent-first,
/// so a highly relevant item older than the newest `CANDIDATE_LIMIT` matches
/// never reaches the ranker.
pub const CANDIDATE_LIMIT: usize = 50;

/// Default number of suggestions returned to the user.
pub const DEFAULT_MAX_RESULTS: usize = 6;

/// Guess which side of the board the user wants to browse.
///
/// A user who LOST something is shown FOUND posts and vice versa. Lost-side
/// hints are checked first; with neither side present no type filter is
/// applied.
pub fn guess_desired_type(message: &str) -> Option<ItemType> {
    let m = normalize(message);

    if contains_any(&m, LOST_SIDE_HINTS) {
        return Some(ItemType::Found);
    }

    if contains_any(&m, FOUND_SIDE_HINTS) {
        return Some(ItemType::Lost);
    }

    None
}
