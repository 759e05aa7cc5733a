//! Description snippets for chat suggestions.

/// Maximum snippet length in characters, ellipsis included.
pub const SNIPPET_MAX_CHARS: usize = 140;

/// Build a preview snippet: collapse whitespace runs, trim, and truncate to
/// `max_chars` characters, replacing the tail with `…` when truncation
/// happens. Character-based, so multi-byte Persian text is never split
/// mid-scalar.
pub fn make_snippet(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let mut out: String = collapsed.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
