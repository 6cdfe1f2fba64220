//! Month-name matching.
//!
//! Slavic languages inflect month names by case ("декабрь" / "декабря",
//! "лютий" / "лютого"), so an exact lookup misses most real input. A
//! candidate is looked up in two passes over the twelve variant sets:
//!
//! 1. exact membership in any set;
//! 2. the first set holding a variant that [`is_same_word`] accepts.
//!
//! The exact pass runs over all sets first so that a registered name always
//! maps to its own month, even when it is also similar to a name of an earlier
//! month ("may" vs "mar").

use std::collections::{BTreeSet, HashSet};

/// Canonical form used for stored variants and for candidates: trimmed of
/// surrounding whitespace and punctuation, then lowercased.
pub fn normalize_month_name(name: &str) -> String {
    name.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}

/// Whether `candidate` reads as an inflected form of the stored `variant`.
///
/// Both conditions must hold:
///
/// - fewer than half of `variant`'s length worth of its distinct characters
///   are missing from `candidate`;
/// - the first two characters agree when `variant` is shorter than four
///   characters, the first three otherwise.
///
/// Short words from different languages can pass by accident ("not" is close
/// to "nov"); the prefix guard keeps that rare, it does not rule it out.
pub fn is_same_word(variant: &str, candidate: &str) -> bool {
    let variant_len = variant.chars().count();
    let present: HashSet<char> = candidate.chars().collect();
    let missing = variant.chars().collect::<HashSet<char>>().difference(&present).count();

    if missing * 2 >= variant_len {
        return false;
    }

    let prefix_len = if variant_len < 4 { 2 } else { 3 };
    prefix(variant, prefix_len) == prefix(candidate, prefix_len)
}

/// Up to `n` leading characters of `s`.
fn prefix(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(idx, _)| &s[..idx])
}

/// 1-based month whose variants contain `candidate`, exactly or by [`is_same_word`].
pub fn month_index(candidate: &str, months: &[BTreeSet<String>]) -> Option<u32> {
    month_index_with(candidate, months, is_same_word)
}

/// [`month_index`] with a caller-supplied similarity check in place of
/// [`is_same_word`]. The check receives `(variant, candidate)`, both normalized.
pub fn month_index_with<F>(candidate: &str, months: &[BTreeSet<String>], same_word: F) -> Option<u32>
where
    F: Fn(&str, &str) -> bool,
{
    let word = normalize_month_name(candidate);
    if word.is_empty() {
        return None;
    }

    let idx = months
        .iter()
        .position(|set| set.contains(&word))
        .or_else(|| months.iter().position(|set| set.iter().any(|variant| same_word(variant, &word))))?;

    u32::try_from(idx + 1).ok()
}
