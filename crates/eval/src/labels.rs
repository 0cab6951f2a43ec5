//! Label extraction from free-form answers.
//!
//! Every extractor is total: when nothing matches the label is
//! [`UNKNOWN`].

use regex::Regex;
use std::sync::LazyLock;

use crate::xbrl::XBRL_TAGS;

/// The label returned when an answer names no known class.
pub const UNKNOWN: &str = "unknown";

const POSITIVE: &str = "positive";
const NEGATIVE: &str = "negative";

static YES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\byes\b").expect("Failed to compile yes regex"));
static NO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bno\b").expect("Failed to compile no regex"));

static XBRL_MATCHER: LazyLock<TagMatcher> =
    LazyLock::new(|| TagMatcher::new(XBRL_TAGS.iter().copied()));

/// Binary sentiment: `"positive"`, `"negative"` or `"unknown"`.
///
/// When exactly one keyword occurs it wins. When both occur, a keyword
/// directly preceded by "not" is discounted; if one keyword survives it
/// wins, otherwise the keyword the answer starts with wins.
pub fn sentiment_label(answer: &str) -> String {
    let text = answer.trim().to_lowercase();

    let label = match (text.contains(POSITIVE), text.contains(NEGATIVE)) {
        (true, false) => POSITIVE,
        (false, true) => NEGATIVE,
        (false, false) => UNKNOWN,
        (true, true) => match (has_unnegated(&text, POSITIVE), has_unnegated(&text, NEGATIVE)) {
            (true, false) => POSITIVE,
            (false, true) => NEGATIVE,
            _ if text.starts_with(POSITIVE) => POSITIVE,
            _ if text.starts_with(NEGATIVE) => NEGATIVE,
            _ => UNKNOWN,
        },
    };
    label.to_string()
}

fn has_unnegated(text: &str, keyword: &str) -> bool {
    text.match_indices(keyword)
        .any(|(i, _)| !is_negated(&text[..i]))
}

fn is_negated(before: &str) -> bool {
    let before = before.trim_end();
    match before.strip_suffix("not") {
        Some(rest) => !rest.ends_with(|c: char| c.is_alphanumeric()),
        None => false,
    }
}

/// Whole-word yes/no: `"YES"`, `"NO"` or `"unknown"`. YES wins when both
/// words appear.
pub fn yes_no_label(answer: &str) -> String {
    let text = answer.trim();
    if YES.is_match(text) {
        "YES".into()
    } else if NO.is_match(text) {
        "NO".into()
    } else {
        UNKNOWN.into()
    }
}

/// Substring yes/no. Matches inside other words ("yesterday", "notion"),
/// so only use it where recall matters more than precision.
pub fn yes_no_label_loose(answer: &str) -> String {
    let text = answer.trim().to_lowercase();
    if text.contains("yes") {
        "YES".into()
    } else if text.contains("no") {
        "NO".into()
    } else {
        UNKNOWN.into()
    }
}

/// XBRL tag from the 139-tag vocabulary.
pub fn xbrl_tag_label(answer: &str) -> String {
    XBRL_MATCHER.label(answer)
}

/// Longest-match lookup of a fixed vocabulary inside free text.
#[derive(Debug, Clone)]
pub struct TagMatcher {
    tags: Vec<String>,
    lowered: Vec<String>,
}

impl TagMatcher {
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = vocabulary.into_iter().map(Into::into).collect();
        let lowered = tags.iter().map(|t| t.to_lowercase()).collect();
        Self { tags, lowered }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The longest tag occurring verbatim in `text`, else the longest
    /// occurring ignoring case. Equal lengths keep vocabulary order.
    pub fn find(&self, text: &str) -> Option<&str> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Some(i) = longest(&self.tags, |tag| text.contains(tag)) {
            return Some(&self.tags[i]);
        }

        let lowered_text = text.to_lowercase();
        longest(&self.lowered, |tag| lowered_text.contains(tag)).map(|i| self.tags[i].as_str())
    }

    /// [`Self::find`], or `"unknown"`.
    pub fn label(&self, text: &str) -> String {
        self.find(text).unwrap_or(UNKNOWN).to_string()
    }
}

fn longest(candidates: &[String], matches: impl Fn(&str) -> bool) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, tag) in candidates.iter().enumerate() {
        if !matches(tag.as_str()) {
            continue;
        }
        if best.is_none_or(|b| tag.chars().count() > candidates[b].chars().count()) {
            best = Some(i);
        }
    }
    best
}
