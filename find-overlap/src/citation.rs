//! Detection and masking of bibliographic citations.
//!
//! Each citation style is a [`CitationPattern`]. A [`CitationDetector`] combines several
//! patterns: a text contains a citation if any pattern matches it, and masking replaces the
//! spans found by the masking patterns with [`CITATION_PLACEHOLDER`].
use std::fmt;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{FindOverlapError, Result};

/// Token substituted for every masked citation span, padded with a space on each side.
pub const CITATION_PLACEHOLDER: &str = "<CIT>";

const NAME: &str = r"\p{Lu}[\p{L}'’-]+";
// Lower-case particles of compound surnames, e.g., "de Souza" or "van Dijk".
const PARTICLES: &str = r"(?:\b(?:da|das|de|del|della|di|do|dos|du|van|von|der|den|le|la)\s+)*";
const YEAR: &str = r"\d{4}[a-z]?";
const PAGES: &str = r"(?:\s*[,:]\s*p{1,2}\.\s*\d+(?:\s*[-–]\s*\d+)?)?";
const NUMBERS: &str = r"\d+(?:\s*[-–]\s*\d+)?";

fn authors() -> String {
    format!(
        r"{PARTICLES}{NAME}(?:\s*(?:,|;|&|\band\b|\be\b)\s*{PARTICLES}{NAME})*(?:\s+et\s+al\.?)?"
    )
}

fn years() -> String {
    format!(r"{YEAR}(?:\s*,\s*{YEAR})*{PAGES}")
}

static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| {
    let group = format!(r"{},?\s*{}", authors(), years());
    Regex::new(&format!(
        r"\(\s*(?:(?:apud|cf\.|see|ver)\s+)?{group}(?:\s*;\s*{group})*\s*\)"
    ))
    .expect("Invalid parenthetical citation regex pattern")
});

static NARRATIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{}\s*\(\s*{}\s*\)", authors(), years()))
        .expect("Invalid narrative citation regex pattern")
});

static CITATION_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i:\baccording\s+to|\bas\s+per|\bsegundo|\bconforme|\bde\s+acordo\s+com)\s+{}(?:\s*\(\s*{}\s*\)|\s*,\s*{YEAR})",
        authors(),
        years()
    ))
    .expect("Invalid citation-verb regex pattern")
});

static NUMERIC_BRACKET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\[\s*{NUMBERS}(?:\s*[,;]\s*{NUMBERS})*\s*\]"
    ))
    .expect("Invalid numeric citation regex pattern")
});

static LEXICAL_CUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:et\s+al|doi|apud|cited\s+in|citado\s+por|according\s+to|segundo|conforme|de\s+acordo\s+com)\b",
    )
    .expect("Invalid lexical-cue regex pattern")
});

pub(crate) static DEFAULT_DETECTOR: Lazy<CitationDetector> = Lazy::new(CitationDetector::default);

/// Strategy recognizing one style of citation.
pub trait CitationPattern: Send + Sync {
    /// Gets the name of the style.
    fn name(&self) -> &'static str;

    /// Finds the byte ranges of all citations in `text`.
    fn find_spans(&self, text: &str) -> Vec<Range<usize>>;

    /// Are found spans replaced with the placeholder when masking?
    fn masks(&self) -> bool {
        true
    }

    /// Checks if `text` contains a citation of this style.
    fn is_match(&self, text: &str) -> bool {
        !self.find_spans(text).is_empty()
    }
}

/// Citation style defined by an arbitrary regular expression.
///
/// # Examples
///
/// ```
/// use find_overlap::citation::{CitationDetector, RegexPattern};
///
/// let footnote = RegexPattern::new("footnote", r"\^\d+", true).unwrap();
/// let detector = CitationDetector::empty().with_pattern(footnote);
/// assert!(detector.contains_citation("as shown before^12."));
/// assert_eq!(detector.mask("as shown before^12."), "as shown before <CIT> .");
/// ```
pub struct RegexPattern {
    name: &'static str,
    regex: Regex,
    masks: bool,
}

impl RegexPattern {
    /// Creates an instance from a regular expression.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the citation style.
    /// * `pattern` - Regular expression matching a whole citation.
    /// * `masks` - If `false`, matches only flag a citation and are never masked.
    pub fn new(name: &'static str, pattern: &str, masks: bool) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            FindOverlapError::input(format!("Invalid citation pattern {name}: {e}"))
        })?;
        Ok(Self { name, regex, masks })
    }
}

impl CitationPattern for RegexPattern {
    fn name(&self) -> &'static str {
        self.name
    }

    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.regex.find_iter(text).map(|m| m.range()).collect()
    }

    fn masks(&self) -> bool {
        self.masks
    }

    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

macro_rules! builtin_pattern {
    ($(#[$attr:meta])* $ty:ident, $name:expr, $regex:ident, $masks:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $ty;

        impl CitationPattern for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
                $regex.find_iter(text).map(|m| m.range()).collect()
            }

            fn masks(&self) -> bool {
                $masks
            }

            fn is_match(&self, text: &str) -> bool {
                $regex.is_match(text)
            }
        }
    };
}

builtin_pattern!(
    /// Author-year citation in parentheses, e.g., `(Silva, 2020)`, `(Silva et al., 2020a)`,
    /// or `(SILVA; SOUZA, 2019, p. 12)`.
    ParentheticalAuthorYear,
    "parenthetical_author_year",
    PARENTHETICAL,
    true
);

builtin_pattern!(
    /// Author followed by a parenthesized year, e.g., `Silva (2020)` or `Silva et al. (2020)`.
    NarrativeAuthorYear,
    "narrative_author_year",
    NARRATIVE,
    true
);

builtin_pattern!(
    /// Introducing phrase followed by an author-year construct,
    /// e.g., `according to Silva (2020)` or `segundo Silva, 2020`.
    CitationVerb,
    "citation_verb",
    CITATION_VERB,
    true
);

builtin_pattern!(
    /// Bracketed list of reference numbers, e.g., `[12]`, `[12, 13]`, or `[3–5]`.
    NumericBracket,
    "numeric_bracket",
    NUMERIC_BRACKET,
    true
);

builtin_pattern!(
    /// Word cues such as "et al" or "doi". They flag a citation but are never masked.
    LexicalCue,
    "lexical_cue",
    LEXICAL_CUE,
    false
);

/// Set of citation patterns.
pub struct CitationDetector {
    patterns: Vec<Box<dyn CitationPattern>>,
}

impl Default for CitationDetector {
    /// Creates an instance with all the built-in patterns.
    fn default() -> Self {
        Self::empty()
            .with_pattern(ParentheticalAuthorYear)
            .with_pattern(NarrativeAuthorYear)
            .with_pattern(CitationVerb)
            .with_pattern(NumericBracket)
            .with_pattern(LexicalCue)
    }
}

impl fmt::Debug for CitationDetector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CitationDetector")
            .field("patterns", &self.pattern_names())
            .finish()
    }
}

impl CitationDetector {
    /// Creates an instance without patterns.
    pub fn empty() -> Self {
        Self { patterns: vec![] }
    }

    /// Adds a pattern.
    pub fn with_pattern<P>(mut self, pattern: P) -> Self
    where
        P: CitationPattern + 'static,
    {
        self.patterns.push(Box::new(pattern));
        self
    }

    /// Gets the names of the patterns in order of addition.
    pub fn pattern_names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.name()).collect()
    }

    /// Checks if any pattern matches `text`.
    pub fn contains_citation(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// Finds the spans of the masking patterns, sorted and with overlapping spans merged.
    pub fn citation_spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans: Vec<_> = self
            .patterns
            .iter()
            .filter(|p| p.masks())
            .flat_map(|p| p.find_spans(text))
            .filter(|span| !span.is_empty())
            .collect();
        spans.sort_unstable_by_key(|span| (span.start, span.end));

        let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
                _ => merged.push(span),
            }
        }
        merged
    }

    /// Replaces every citation span with the padded placeholder.
    pub fn mask(&self, text: &str) -> String {
        mask_range(text, 0..text.len(), &self.citation_spans(text))
    }
}

/// Masks `text[range]` with `spans` clipped to the range.
///
/// `spans` must be sorted and non-overlapping, as returned by
/// [`CitationDetector::citation_spans`].
pub(crate) fn mask_range(text: &str, range: Range<usize>, spans: &[Range<usize>]) -> String {
    let mut masked = String::with_capacity(range.len());
    let mut cursor = range.start;
    for span in spans {
        if range.end <= span.start {
            break;
        }
        let start = span.start.max(range.start);
        let end = span.end.min(range.end);
        if end <= start {
            continue;
        }
        masked.push_str(&text[cursor..start]);
        masked.push(' ');
        masked.push_str(CITATION_PLACEHOLDER);
        masked.push(' ');
        cursor = end;
    }
    masked.push_str(&text[cursor..range.end]);
    masked
}

/// Checks if `text` contains a citation recognized by the built-in patterns.
///
/// # Examples
///
/// ```
/// use find_overlap::citation::detect_citation;
///
/// assert!(detect_citation("This holds (Smith, 2019)."));
/// assert!(detect_citation("Jones et al showed this."));
/// assert!(!detect_citation("No sources here."));
/// ```
pub fn detect_citation(text: &str) -> bool {
    DEFAULT_DETECTOR.contains_citation(text)
}

/// Masks the citations recognized by the built-in patterns.
///
/// # Examples
///
/// ```
/// use find_overlap::citation::normalize_citations;
///
/// assert_eq!(
///     normalize_citations("This holds (Smith, 2019)."),
///     "This holds  <CIT> ."
/// );
/// ```
pub fn normalize_citations(text: &str) -> String {
    DEFAULT_DETECTOR.mask(text)
}
