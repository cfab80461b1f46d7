// src/specs/months.rs
//! Thai month names → calendar month numbers.
//!
//! Lookup is exact: callers normalize whitespace before asking, the lexicon
//! itself does not trim or fold case.

/// One lexicon entry: localized name, English name, month number (1–12).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Month {
    pub thai: &'static str,
    pub english: &'static str,
    pub number: u32,
}

const fn m(thai: &'static str, english: &'static str, number: u32) -> Month {
    Month { thai, english, number }
}

pub struct MonthLexicon {
    entries: [Month; 12],
}

pub static THAI_MONTHS: MonthLexicon = MonthLexicon {
    entries: [
        m("มกราคม", "January", 1),
        m("กุมภาพันธ์", "February", 2),
        m("มีนาคม", "March", 3),
        m("เมษายน", "April", 4),
        m("พฤษภาคม", "May", 5),
        m("มิถุนายน", "June", 6),
        m("กรกฎาคม", "July", 7),
        m("สิงหาคม", "August", 8),
        m("กันยายน", "September", 9),
        m("ตุลาคม", "October", 10),
        m("พฤศจิกายน", "November", 11),
        m("ธันวาคม", "December", 12),
    ],
};

impl MonthLexicon {
    /// Month number for a localized name. `None` means "not a month heading",
    /// not a failure.
    pub fn translate(&self, localized: &str) -> Option<u32> {
        self.entry(localized).map(|e| e.number)
    }

    pub fn entry(&self, localized: &str) -> Option<&Month> {
        self.entries.iter().find(|e| e.thai == localized)
    }

    pub fn english(&self, number: u32) -> Option<&'static str> {
        self.entries.iter().find(|e| e.number == number).map(|e| e.english)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Month> {
        self.entries.iter()
    }
}
