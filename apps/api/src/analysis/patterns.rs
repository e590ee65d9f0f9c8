//! Shared text detectors. Every scorer that needs one of these uses the same instance,
//! so e.g. the achievement count seen by experience relevance and customization always agrees.

use once_cell::sync::Lazy;
use regex::Regex;

/// Quantified achievement: `40%`, `$500`, `3x`, `5 times`.
static RE_ACHIEVEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%|\$\d+|\d+x|\d+ times").unwrap());

static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// `NNN-NNN-NNNN`, `NNN.NNN.NNNN` or ten bare digits.
static RE_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap());

static RE_PROFILE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:linkedin\.com/in/|github\.com/)[\w-]+").unwrap());

/// Paragraph break: a newline followed by optional blank space and another newline.
static RE_BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").unwrap());

/// Number of non-overlapping quantified-achievement matches in `text`.
pub fn count_achievements(text: &str) -> usize {
    RE_ACHIEVEMENT.find_iter(text).count()
}

pub fn has_email(text: &str) -> bool {
    RE_EMAIL.is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    RE_PHONE.is_match(text)
}

pub fn has_profile_url(text: &str) -> bool {
    RE_PROFILE_URL.is_match(text)
}

/// Distinct action verbs whose string occurs anywhere in `text_lower`.
pub fn count_action_verbs(text_lower: &str, verbs: &[String]) -> usize {
    verbs
        .iter()
        .filter(|verb| text_lower.contains(verb.as_str()))
        .count()
}

/// Splits text into sentences at `.`, `!`, `?` and at blank lines.
/// Empty fragments are discarded.
pub fn sentences(text: &str) -> Vec<&str> {
    RE_BLANK_LINE
        .split(text)
        .flat_map(|paragraph| paragraph.split(['.', '!', '?']))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Number of sentences with more than `max_tokens` whitespace-separated tokens.
pub fn count_long_sentences(text: &str, max_tokens: usize) -> usize {
    sentences(text)
        .into_iter()
        .filter(|s| s.split_whitespace().count() > max_tokens)
        .count()
}
