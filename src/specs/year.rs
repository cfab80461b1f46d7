// src/specs/year.rs
//! Year-of-record detection.
//!
//! The page states its year in the Buddhist Era (e.g. "2568"), which must be
//! shifted by 543 before any date is built. A plain Christian Era year is used
//! as-is. If neither shows up, the current year is used and the result is
//! marked low-confidence.

use std::sync::LazyLock;

use chrono::{Datelike, Local};
use regex::Regex;
use scraper::Html;
use tracing::{debug, warn};

use crate::config::consts::BUDDHIST_ERA_OFFSET;
use crate::core::html::{heading_text, page_text};
use crate::core::sanitize::thai_digits_to_ascii;

// Four digits not glued to other digits. `[0-9]` rather than `\d`: Thai
// numerals are folded to ASCII beforehand.
static RE_BUDDHIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])(25[0-9]{2})(?:[^0-9]|$)").expect("invalid regex: buddhist year")
});

static RE_CHRISTIAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])(20[0-9]{2})(?:[^0-9]|$)").expect("invalid regex: christian year")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearSource {
    /// Found a `25xx` token; holds the token as written.
    BuddhistEra(i32),
    /// Found a `20xx` token and used it directly.
    ChristianEra,
    /// Nothing found; current system year substituted.
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearResolution {
    pub year: i32,
    pub source: YearSource,
}

impl YearResolution {
    pub fn is_confident(&self) -> bool {
        !matches!(self.source, YearSource::Fallback)
    }
}

/// Resolve from free text, falling back to the current year.
pub fn resolve(page_text: &str) -> YearResolution {
    resolve_with_fallback(page_text, Local::now().year())
}

pub fn resolve_with_fallback(page_text: &str, fallback: i32) -> YearResolution {
    find_year(page_text).unwrap_or_else(|| low_confidence(fallback))
}

/// Headings first (that is where the site prints the year-of-record), then the
/// whole page, then the current year.
pub fn resolve_document(doc: &Html) -> YearResolution {
    resolve_document_with_fallback(doc, Local::now().year())
}

pub fn resolve_document_with_fallback(doc: &Html, fallback: i32) -> YearResolution {
    if let Some(found) = find_year(&heading_text(doc)) {
        return found;
    }
    debug!("no year in page headings; scanning full page text");
    find_year(&page_text(doc)).unwrap_or_else(|| low_confidence(fallback))
}

/// Buddhist Era wins over Christian Era when both appear.
pub fn find_year(text: &str) -> Option<YearResolution> {
    let text = thai_digits_to_ascii(text);

    if let Some(be) = first_capture(&RE_BUDDHIST, &text) {
        let year = be - BUDDHIST_ERA_OFFSET;
        debug!(buddhist = be, year, "resolved Buddhist Era year");
        return Some(YearResolution { year, source: YearSource::BuddhistEra(be) });
    }
    if let Some(ce) = first_capture(&RE_CHRISTIAN, &text) {
        debug!(year = ce, "resolved Christian Era year");
        return Some(YearResolution { year: ce, source: YearSource::ChristianEra });
    }
    None
}

/* ---------------- helpers ---------------- */

fn first_capture(re: &Regex, text: &str) -> Option<i32> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

fn low_confidence(fallback: i32) -> YearResolution {
    warn!(year = fallback, "no year found on page; falling back to current year (low confidence)");
    YearResolution { year: fallback, source: YearSource::Fallback }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_longer_digit_runs() {
        assert_eq!(find_year("phone 025681234"), None);
        assert_eq!(find_year("id 12025"), None);
    }

    #[test]
    fn buddhist_preferred_over_christian() {
        let r = find_year("ปี 2025 / พ.ศ. 2568").expect("year");
        assert_eq!(r.year, 2025);
        assert_eq!(r.source, YearSource::BuddhistEra(2568));
    }

    #[test]
    fn thai_numerals_are_understood() {
        let r = find_year("วันหยุดประจำปี ๒๕๖๙").expect("year");
        assert_eq!(r.year, 2026);
    }
}
