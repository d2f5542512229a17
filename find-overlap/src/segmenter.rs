//! Sentence splitting and grouping of sentences into chunks.
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

// A terminal punctuation mark followed by the whitespace consumed at the split.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.?!]\s+").expect("Invalid sentence regex pattern"));

/// Finds the byte ranges of sentences in `text`.
///
/// A sentence ends right after `.`, `?`, or `!` followed by whitespace.
/// The whitespace belongs to no sentence, and empty sentences are skipped.
pub fn sentence_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = vec![];
    let mut start = 0;
    for m in SENTENCE_BOUNDARY.find_iter(text) {
        // The punctuation marks are single bytes.
        let end = m.start() + 1;
        if start < end {
            spans.push(start..end);
        }
        start = m.end();
    }
    if start < text.len() {
        spans.push(start..text.len());
    }
    spans
}

/// Splits `text` into sentences.
///
/// # Examples
///
/// ```
/// use find_overlap::segmenter::split_sentences;
///
/// let sentences = split_sentences("One. Two?  Three! Four");
/// assert_eq!(sentences, vec!["One.", "Two?", "Three!", "Four"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_spans(text)
        .into_iter()
        .map(|span| &text[span])
        .collect()
}

/// Groups sentences in order into chunks of `chunk_size` sentences joined by a space.
/// The last chunk holds the remaining sentences if their number is not a multiple of
/// `chunk_size`.
///
/// # Panics
///
/// It will panic if `chunk_size` is 0.
///
/// # Examples
///
/// ```
/// use find_overlap::segmenter::chunk;
///
/// let chunks = chunk(&["A.", "B.", "C.", "D."], 3);
/// assert_eq!(chunks, vec!["A. B. C.", "D."]);
/// ```
pub fn chunk<S>(sentences: &[S], chunk_size: usize) -> Vec<String>
where
    S: AsRef<str>,
{
    assert!(chunk_size >= 1);
    sentences
        .chunks(chunk_size)
        .map(|group| join_sentences(group.iter().map(|s| s.as_ref())))
        .collect()
}

pub(crate) fn join_sentences<'a, I>(sentences: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut joined = String::new();
    for (i, sentence) in sentences.into_iter().enumerate() {
        if i != 0 {
            joined.push(' ');
        }
        joined.push_str(sentence);
    }
    joined
}
