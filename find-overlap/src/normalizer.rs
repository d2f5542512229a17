//! Cleanup of extracted text: layout whitespace and trailing reference lists.
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::ReferenceMode;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex pattern"));

// An optional section number such as "7." or "VII)" may precede the heading.
const SECTION_PREFIX: &str = r"(?:(?:\d+|[IVXLC]+)[.)][ \t]*)?";
const HEADINGS: &str = r"REFER[ÊE]NCIAS(?:[ \t]+BIBLIOGR[ÁA]FICAS)?|REFERENCES|BIBLIOGRAPHY";

// The heading alone on its line, optionally followed by a colon.
static HEADING_STRICT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?im)^[ \t]*{SECTION_PREFIX}(?:{HEADINGS})[ \t]*:?[ \t]*\r?$"
    ))
    .expect("Invalid heading regex pattern")
});

// The heading at a line start, followed by anything.
static HEADING_LENIENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?im)^[ \t]*{SECTION_PREFIX}(?:{HEADINGS})\b"))
        .expect("Invalid heading regex pattern")
});

// "SURNAME, I. ... 2020." entries of an ABNT reference list, or access notes of online sources.
static ABNT_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[A-ZÀ-Ú]+,\s*[A-ZÀ-Ú]\.\s*.+?\d{4}\.|Acesso em:")
        .expect("Invalid reference-entry regex pattern")
});

/// Cleans up text produced by an extraction collaborator.
#[derive(Clone, Copy, Debug)]
pub struct Normalizer {
    mode: ReferenceMode,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(ReferenceMode::Heading)
    }
}

impl Normalizer {
    /// Creates an instance removing references in the given mode.
    pub const fn new(mode: ReferenceMode) -> Self {
        Self { mode }
    }

    /// Removes the references section and collapses layout whitespace.
    ///
    /// Headings are searched in the raw text, where line starts still exist.
    /// In [`ReferenceMode::Strict`], list entries are then searched in the collapsed text.
    pub fn normalize<S>(&self, raw_text: S) -> String
    where
        S: AsRef<str>,
    {
        let raw_text = raw_text.as_ref();
        let text = match self.mode {
            ReferenceMode::Keep => raw_text,
            ReferenceMode::Heading | ReferenceMode::Strict => strip_reference_heading(raw_text),
        };
        let mut cleaned = collapse_whitespace(text);
        if self.mode == ReferenceMode::Strict {
            if let Some(start) = ABNT_ENTRY.find(&cleaned).map(|m| m.start()) {
                tracing::debug!(offset = start, "cut the text at a reference-list entry");
                cleaned.truncate(start);
                let len = cleaned.trim_end().len();
                cleaned.truncate(len);
            }
        }
        cleaned
    }
}

/// Normalizes text with the default [`Normalizer`].
///
/// # Examples
///
/// ```
/// use find_overlap::normalizer::normalize;
///
/// let raw = "Plain  text\nsplit over\r\n\tlines.\nREFERENCES\nSILVA, J. A book. 2020.";
/// assert_eq!(normalize(raw), "Plain text split over lines.");
/// ```
pub fn normalize<S>(raw_text: S) -> String
where
    S: AsRef<str>,
{
    Normalizer::default().normalize(raw_text)
}

/// Replaces every whitespace run that is at least two characters long or contains a line break
/// or tab with a single space, and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, |caps: &Captures| {
        let run = &caps[0];
        let breaks_line = run.contains(|c: char| matches!(c, '\n' | '\r' | '\t'));
        if breaks_line || run.chars().nth(1).is_some() {
            " ".to_string()
        } else {
            run.to_string()
        }
    });
    collapsed.trim().to_string()
}

/// Cuts the text at the first references heading, preferring a heading alone on its line.
fn strip_reference_heading(text: &str) -> &str {
    let found = HEADING_STRICT
        .find(text)
        .or_else(|| HEADING_LENIENT.find(text));
    match found {
        Some(m) => {
            tracing::debug!(offset = m.start(), "cut the text at a references heading");
            &text[..m.start()]
        }
        None => text,
    }
}
