// src/specs/holidays.rs
//! Scraping *spec* for the financial-institution holiday page.
//!
//! Page shape (post-render):
//! ```text
//! .holiday-group                      one per month
//!   .month-title h3                   Thai month name
//!   .month-holiday-item               one per holiday
//!     .item-desc h3:nth-child(1)      "<weekday> <day>"
//!     .item-desc h3:nth-child(2)      holiday name
//! ```
//!
//! Nothing here aborts a run. An unknown month drops its whole group; a bad
//! item drops only itself. Every drop is recorded in [`ExtractReport`] with
//! the reason, so callers (and tests) can tell *why* something was skipped.

use std::sync::LazyLock;

use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::consts::LOCATION;
use crate::core::html::select_text;
use crate::core::sanitize::{last_token, thai_digits_to_ascii};
use super::months::MonthLexicon;

static GROUP: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".holiday-group").expect("invalid selector: group"));
static MONTH_LABEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".month-title h3").expect("invalid selector: month label"));
static ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".month-holiday-item").expect("invalid selector: item"));
static DATE_FIELD: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".item-desc h3:nth-child(1)").expect("invalid selector: date field")
});
static NAME_FIELD: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".item-desc h3:nth-child(2)").expect("invalid selector: name field")
});

/// One parsed item before the year is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawHolidayEntry {
    pub month: u32,
    pub day: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HolidayRecord {
    pub date: NaiveDate,
    pub name: String,
    pub description: String,
    pub location: String,
}

impl HolidayRecord {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            description: format!("Holiday observed on {}.", date.format("%d %B %Y")),
            location: s!(LOCATION),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("date field missing or blank")]
    MissingDateField,
    #[error("name field missing or blank")]
    MissingNameField,
    #[error("day token {0:?} is not a number")]
    BadDayToken(String),
    #[error("{year}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GroupSkip {
    #[error("month label missing or blank")]
    MissingMonthLabel,
    #[error("unrecognized month label {0:?}")]
    UnknownMonth(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSkip {
    /// Zero-based group position in the document.
    pub group: usize,
    /// Zero-based item position within its group.
    pub item: usize,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSkipped {
    pub group: usize,
    pub reason: GroupSkip,
}

/// Aggregate outcome of one extraction pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Document order: month group, then item.
    pub records: Vec<HolidayRecord>,
    pub groups_seen: usize,
    pub skipped_groups: Vec<GroupSkipped>,
    pub skipped_items: Vec<ItemSkip>,
}

impl ExtractReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_items.len()
    }
}

/// Records only; see [`extract_report`] for the skip breakdown.
pub fn extract(doc: &Html, year: i32, lexicon: &MonthLexicon) -> Vec<HolidayRecord> {
    extract_report(doc, year, lexicon).records
}

/// Convenience over raw markup.
pub fn parse_doc(html_doc: &str, year: i32, lexicon: &MonthLexicon) -> ExtractReport {
    extract_report(&Html::parse_document(html_doc), year, lexicon)
}

pub fn extract_report(doc: &Html, year: i32, lexicon: &MonthLexicon) -> ExtractReport {
    let mut report = ExtractReport::default();

    for (gi, group) in month_groups(doc).enumerate() {
        report.groups_seen += 1;

        let month = match read_month(group, lexicon) {
            Ok(m) => m,
            Err(reason) => {
                debug!(group = gi, %reason, "skipping month group");
                report.skipped_groups.push(GroupSkipped { group: gi, reason });
                continue;
            }
        };

        for (ii, item) in holiday_items(group).enumerate() {
            match parse_item(item, month).and_then(|raw| resolve_entry(raw, year)) {
                Ok(record) => report.records.push(record),
                Err(reason) => {
                    debug!(
                        group = gi,
                        item = ii,
                        month = lexicon.english(month).unwrap_or("?"),
                        %reason,
                        "skipping holiday item"
                    );
                    report.skipped_items.push(ItemSkip { group: gi, item: ii, reason });
                }
            }
        }
    }

    info!(
        year,
        groups = report.groups_seen,
        groups_skipped = report.skipped_groups.len(),
        records = report.records.len(),
        items_skipped = report.skipped_items.len(),
        "holiday extraction finished"
    );
    report
}

/* ---------------- per-group / per-item steps ---------------- */

pub fn month_groups(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.select(&GROUP)
}

pub fn holiday_items(group: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    group.select(&ITEM)
}

pub fn read_month(group: ElementRef<'_>, lexicon: &MonthLexicon) -> Result<u32, GroupSkip> {
    let label = select_text(group, &MONTH_LABEL).ok_or(GroupSkip::MissingMonthLabel)?;
    lexicon.translate(&label).ok_or(GroupSkip::UnknownMonth(label))
}

/// Both sibling fields must be present and non-blank.
pub fn parse_item(item: ElementRef<'_>, month: u32) -> Result<RawHolidayEntry, SkipReason> {
    let date_text = select_text(item, &DATE_FIELD).ok_or(SkipReason::MissingDateField)?;
    let name = select_text(item, &NAME_FIELD).ok_or(SkipReason::MissingNameField)?;
    let day = parse_day(&date_text)?;
    Ok(RawHolidayEntry { month, day, name })
}

/// Day-of-month is the last whitespace-separated token ("วันพุธ 1" → 1).
pub fn parse_day(date_text: &str) -> Result<u32, SkipReason> {
    let ascii = thai_digits_to_ascii(date_text);
    let token = last_token(&ascii).ok_or_else(|| SkipReason::BadDayToken(s!()))?;
    token.parse().map_err(|_| SkipReason::BadDayToken(s!(token)))
}

pub fn resolve_entry(raw: RawHolidayEntry, year: i32) -> Result<HolidayRecord, SkipReason> {
    let RawHolidayEntry { month, day, name } = raw;
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(SkipReason::InvalidDate { year, month, day })?;
    Ok(HolidayRecord::new(date, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_day_variants() {
        assert_eq!(parse_day("วันพุธ 1"), Ok(1));
        assert_eq!(parse_day("วันจันทร์  ๑๓ "), Ok(13));
        assert_eq!(parse_day("วันพุธ"), Err(SkipReason::BadDayToken(s!("วันพุธ"))));
        assert_eq!(parse_day("วันพุธ -1"), Err(SkipReason::BadDayToken(s!("-1"))));
    }

    #[test]
    fn resolve_entry_rejects_impossible_dates() {
        let raw = RawHolidayEntry { month: 4, day: 31, name: s!("x") };
        assert_eq!(
            resolve_entry(raw, 2025),
            Err(SkipReason::InvalidDate { year: 2025, month: 4, day: 31 })
        );
        let leap = RawHolidayEntry { month: 2, day: 29, name: s!("x") };
        assert!(resolve_entry(leap.clone(), 2024).is_ok());
        assert!(resolve_entry(leap, 2025).is_err());
    }

    #[test]
    fn description_embeds_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).expect("date");
        let rec = HolidayRecord::new(date, "วันขึ้นปีใหม่");
        assert_eq!(rec.description, "Holiday observed on 01 January 2025.");
        assert_eq!(rec.location, "Thailand");
    }
}
