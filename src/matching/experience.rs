//! Recognizer for "N years" experience requirements in job descriptions.
//!
//! Grammar, applied to the lowercased description before normalization so
//! that punctuation like `-` and `+` is still present:
//!
//! ```text
//! phrase  := \b NUM [ ("-" | "to") NUM ] [ "+" | "plus" ] ( "year" | "years" )
//! ```
//!
//! Whitespace between every element is optional, so `3-5 years`,
//! `3 to 5 years`, `2+ years`, `5 plus years` and `10years` all match. A bare
//! number without the year word never matches.
//!
//! A phrase whose preceding 10 characters contain `within` is a deadline
//! ("respond within 2 years"), not a requirement, and never disqualifies.

use regex::Regex;
use std::sync::LazyLock;

static YEAR_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]+)\s*(?:(?:-|to)\s*([0-9]+))?\s*(\+|plus)?\s*years?")
        .expect("year phrase pattern is valid")
});

/// Number of characters before a phrase searched for the deadline marker
const LOOKBACK_CHARS: usize = 10;
const DEADLINE_MARKER: &str = "within";

/// One year-of-experience phrase found in a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearPhrase {
    /// Byte offset of the phrase in the lowercased description
    pub start: usize,
    pub end: usize,
    /// First number of the phrase. Saturates at `u64::MAX` for absurdly long numbers.
    pub min_years: u64,
    /// Upper bound of a range form ("3-5 years", "3 to 5 years")
    pub max_years: Option<u64>,
    /// "+" or "plus" form
    pub open_ended: bool,
    /// Preceded by "within", so it reads as a deadline
    pub deadline: bool,
    pub text: String,
}

fn parse_years(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

/// The `LOOKBACK_CHARS` characters immediately before byte offset `start`.
fn preceding_window(text: &str, start: usize) -> String {
    let mut window: Vec<char> = text[..start].chars().rev().take(LOOKBACK_CHARS).collect();
    window.reverse();
    window.into_iter().collect()
}

/// Scan a lowercased description for year phrases, in order of appearance.
pub fn year_phrases(description_lower: &str) -> impl Iterator<Item = YearPhrase> + '_ {
    YEAR_PHRASE.captures_iter(description_lower).filter_map(move |caps| {
        let whole = caps.get(0)?;
        let min = caps.get(1)?;
        let start = whole.start();
        Some(YearPhrase {
            start,
            end: whole.end(),
            min_years: parse_years(min.as_str()),
            max_years: caps.get(2).map(|m| parse_years(m.as_str())),
            open_ended: caps.get(3).is_some(),
            deadline: preceding_window(description_lower, start).contains(DEADLINE_MARKER),
            text: whole.as_str().to_string(),
        })
    })
}

/// Find the first phrase that asks for at least `max_years` of experience.
///
/// Deadline phrases are skipped. Scanning stops at the first blocking phrase,
/// so later phrases are never inspected. `None` means the job passes.
pub fn blocking_requirement(description_lower: &str, max_years: u64) -> Option<YearPhrase> {
    year_phrases(description_lower)
        .filter(|phrase| !phrase.deadline)
        .find(|phrase| phrase.min_years >= max_years)
}
