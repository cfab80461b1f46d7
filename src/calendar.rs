// src/calendar.rs
//! Holiday records → an iCalendar document.
//!
//! Building and serializing are pure; writing the file lives in `file.rs`.
//! Every event is all-day (`VALUE=DATE`), one day long.
//!
//! UIDs are deterministic (`<YYYYMMDD>-<name>@<project>`) so regenerating the
//! same year produces the same file. A repeated (date, name) pair gets a
//! `-2`, `-3`, … suffix so UIDs stay unique inside one calendar.

use std::collections::HashSet;
use std::io::{self, Write};

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::config::consts::{CAL_DESC, CAL_NAME_PREFIX, PRODID, TIMEZONE};
use crate::config::options::ExportOptions;
use crate::ics::{self, write_raw, write_text};
use crate::specs::holidays::HolidayRecord;

const DATE_FMT: &str = "%Y%m%d";
const STAMP_FMT: &str = "%Y%m%dT%H%M%SZ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: String,
    pub date: NaiveDate,
    pub summary: String,
    pub description: String,
    pub location: String,
}

impl CalendarEvent {
    /// Exclusive end for an all-day event.
    pub fn end_date(&self) -> NaiveDate {
        self.date.succ_opt().unwrap_or(self.date)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarMeta {
    pub name: String,
    pub description: String,
    pub timezone: String,
    pub prodid: String,
}

impl CalendarMeta {
    pub fn for_year(year: i32) -> Self {
        Self {
            name: format!("{CAL_NAME_PREFIX} {year}"),
            description: s!(CAL_DESC),
            timezone: s!(TIMEZONE),
            prodid: s!(PRODID),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarDocument {
    /// Year of the first record; names the output file.
    pub year: i32,
    pub meta: CalendarMeta,
    pub events: Vec<CalendarEvent>,
    /// DTSTAMP for every event (UTC).
    pub stamp: NaiveDateTime,
}

impl CalendarDocument {
    /// None for an empty record list: there is nothing to write.
    pub fn from_records(records: &[HolidayRecord], project: &str, stamp: NaiveDateTime) -> Option<Self> {
        let first = records.first()?;
        let year = first.date.year();

        let mut seen: HashSet<String> = HashSet::new();
        let events = records
            .iter()
            .map(|r| CalendarEvent {
                uid: unique_uid(&event_uid(r.date, &r.name, project), &mut seen),
                date: r.date,
                summary: r.name.clone(),
                description: r.description.clone(),
                location: r.location.clone(),
            })
            .collect();

        Some(Self { year, meta: CalendarMeta::for_year(year), events, stamp })
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        write_raw(&mut w, "BEGIN", "VCALENDAR")?;
        write_raw(&mut w, "VERSION", "2.0")?;
        write_text(&mut w, "PRODID", &self.meta.prodid)?;
        write_raw(&mut w, "CALSCALE", "GREGORIAN")?;
        write_raw(&mut w, "METHOD", "PUBLISH")?;
        write_text(&mut w, "X-WR-CALNAME", &self.meta.name)?;
        write_text(&mut w, "X-WR-CALDESC", &self.meta.description)?;
        write_text(&mut w, "X-WR-TIMEZONE", &self.meta.timezone)?;

        let stamp = self.stamp.format(STAMP_FMT).to_string();
        for ev in &self.events {
            write_raw(&mut w, "BEGIN", "VEVENT")?;
            write_text(&mut w, "UID", &ev.uid)?;
            write_raw(&mut w, "DTSTAMP", &stamp)?;
            write_raw(&mut w, "DTSTART;VALUE=DATE", &ev.date.format(DATE_FMT).to_string())?;
            write_raw(&mut w, "DTEND;VALUE=DATE", &ev.end_date().format(DATE_FMT).to_string())?;
            write_text(&mut w, "SUMMARY", &ev.summary)?;
            write_text(&mut w, "DESCRIPTION", &ev.description)?;
            write_text(&mut w, "LOCATION", &ev.location)?;
            write_raw(&mut w, "TRANSP", "TRANSPARENT")?;
            write_raw(&mut w, "END", "VEVENT")?;
        }

        write_raw(&mut w, "END", "VCALENDAR")
    }

    pub fn to_ics(&self) -> io::Result<String> {
        let mut buf: Vec<u8> = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// `(file name, contents)` for a record list, or None when there is nothing to emit.
pub fn render(
    records: &[HolidayRecord],
    export: &ExportOptions,
    stamp: NaiveDateTime,
) -> io::Result<Option<(String, String)>> {
    let Some(doc) = CalendarDocument::from_records(records, &export.project_name, stamp) else {
        return Ok(None);
    };
    Ok(Some((export.file_name(doc.year), doc.to_ics()?)))
}

pub fn event_uid(date: NaiveDate, name: &str, project: &str) -> String {
    format!("{}-{}@{}", date.format(DATE_FMT), name, project)
}

/// Duplicate handling **only within this calendar**. Every UID handed out is
/// remembered, so a name that already ends in `-N` cannot collide with a
/// suffixed duplicate.
fn unique_uid(base: &str, seen: &mut HashSet<String>) -> String {
    let mut candidate = s!(base);
    let mut n = 1;
    while seen.contains(&candidate) {
        n += 1;
        candidate = suffixed(base, n);
    }
    seen.insert(candidate.clone());
    candidate
}

// Suffix goes before the '@' so the domain part stays intact.
fn suffixed(base: &str, n: usize) -> String {
    match base.rsplit_once('@') {
        Some((local, domain)) => format!("{local}-{n}@{domain}"),
        None => format!("{base}-{n}"),
    }
}

/* ---------------- Reading back ---------------- */

/// Events as read from `.ics` text, plus whether each was all-day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadEvent {
    pub event: CalendarEvent,
    pub all_day: bool,
}

/// Read VEVENTs back out of calendar text. Events without a parseable DTSTART
/// are dropped.
pub fn read_events(text: &str) -> Vec<ReadEvent> {
    let mut out = Vec::new();
    for cal in ics::parse_components(text) {
        for ev in cal.children_named("VEVENT") {
            let Some(start) = ev.prop("DTSTART") else { continue };
            let all_day = start.param("VALUE") == Some("DATE") && start.value.len() == 8;
            let raw_date = start.value.get(..8).unwrap_or(start.value.as_str());
            let Ok(date) = NaiveDate::parse_from_str(raw_date, DATE_FMT) else { continue };
            let text_of = |name: &str| ev.prop(name).map(|p| p.text()).unwrap_or_default();

            out.push(ReadEvent {
                event: CalendarEvent {
                    uid: text_of("UID"),
                    date,
                    summary: text_of("SUMMARY"),
                    description: text_of("DESCRIPTION"),
                    location: text_of("LOCATION"),
                },
                all_day,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    #[test]
    fn duplicate_uids_get_suffixes() {
        let mut seen = HashSet::new();
        let base = event_uid(date(2025, 1, 1), "A", "p");
        assert_eq!(unique_uid(&base, &mut seen), "20250101-A@p");
        assert_eq!(unique_uid(&base, &mut seen), "20250101-A-2@p");
        assert_eq!(unique_uid(&base, &mut seen), "20250101-A-3@p");
    }

    #[test]
    fn name_ending_in_suffix_does_not_collide() {
        let mut seen = HashSet::new();
        let a = event_uid(date(2025, 1, 1), "A", "p");
        let a2 = event_uid(date(2025, 1, 1), "A-2", "p");
        assert_eq!(unique_uid(&a, &mut seen), "20250101-A@p");
        assert_eq!(unique_uid(&a, &mut seen), "20250101-A-2@p");
        assert_eq!(unique_uid(&a2, &mut seen), "20250101-A-2-2@p");
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn end_date_is_next_day_across_year_end() {
        let ev = CalendarEvent {
            uid: s!("u"),
            date: date(2025, 12, 31),
            summary: s!(),
            description: s!(),
            location: s!(),
        };
        assert_eq!(ev.end_date(), date(2026, 1, 1));
    }

    #[test]
    fn empty_records_build_nothing() {
        let stamp = date(2025, 1, 1).and_hms_opt(0, 0, 0).expect("time");
        assert!(CalendarDocument::from_records(&[], "p", stamp).is_none());
        assert!(render(&[], &ExportOptions::default(), stamp).expect("render").is_none());
    }
}
