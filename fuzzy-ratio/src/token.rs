//! Ratios over whitespace-separated tokens.
use hashbrown::HashSet;

use crate::indel::{lcs_len, normalized_ratio};

/// Computes the indel ratio after sorting the whitespace tokens of both strings,
/// making the ratio invariant to token order.
///
/// # Examples
///
/// ```
/// use fuzzy_ratio::token_sort_ratio;
///
/// assert_eq!(token_sort_ratio("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear"), 100.);
/// ```
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    crate::ratio(&sorted_tokens(a).join(" "), &sorted_tokens(b).join(" "))
}

/// Computes the token-set ratio in the range of [0,100].
///
/// Both strings are split into sets of unique whitespace tokens. Letting `sect` be the
/// sorted intersection and `diff_ab`/`diff_ba` be the sorted differences, the indel ratios of
/// `sect` vs. `sect + diff_ab`, `sect` vs. `sect + diff_ba`, and `sect + diff_ab` vs.
/// `sect + diff_ba` are computed, and the maximum is returned.
/// The score is invariant to token order, duplicated tokens, and extra tokens on one side.
///
/// If either side has no token, the score is 0.
///
/// # Examples
///
/// ```
/// use fuzzy_ratio::token_set_ratio;
///
/// assert_eq!(token_set_ratio("fuzzy was a bear", "fuzzy fuzzy was a bear"), 100.);
/// assert_eq!(token_set_ratio("a bear", "the bear was a bear indeed"), 100.);
/// assert_eq!(token_set_ratio("", "bear"), 0.);
/// ```
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: HashSet<&str> = a.split_whitespace().collect();
    let tokens_b: HashSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.;
    }

    let mut sect: Vec<&str> = tokens_a.intersection(&tokens_b).cloned().collect();
    let mut diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).cloned().collect();
    let mut diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).cloned().collect();

    // One side is a subset of the other.
    if !sect.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.;
    }

    sect.sort_unstable();
    diff_ab.sort_unstable();
    diff_ba.sort_unstable();

    let sect: Vec<char> = sect.join(" ").chars().collect();
    let diff_ab: Vec<char> = diff_ab.join(" ").chars().collect();
    let diff_ba: Vec<char> = diff_ba.join(" ").chars().collect();

    // Both combined strings start with `sect` and a separating space,
    // so only the differences need to be aligned.
    let sep = usize::from(!sect.is_empty());
    let sect_ab_len = sect.len() + sep + diff_ab.len();
    let sect_ba_len = sect.len() + sep + diff_ba.len();
    let diff_dist = diff_ab.len() + diff_ba.len() - 2 * lcs_len(&diff_ab, &diff_ba);
    let best = normalized_ratio(diff_dist, sect_ab_len + sect_ba_len);

    if sect.is_empty() {
        return best;
    }

    // `sect` is a prefix of both combined strings.
    let sect_ab_ratio = normalized_ratio(sep + diff_ab.len(), sect.len() + sect_ab_len);
    let sect_ba_ratio = normalized_ratio(sep + diff_ba.len(), sect.len() + sect_ba_len);
    best.max(sect_ab_ratio).max(sect_ba_ratio)
}

fn sorted_tokens(text: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens
}
