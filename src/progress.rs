// src/progress.rs
use crate::specs::holidays::HolidayRecord;

/// Lightweight progress reporting for a run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once the page is parsed, with the number of month groups found.
    fn begin(&mut self, _groups: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called for each record that made it through extraction.
    fn item_done(&mut self, _record: &HolidayRecord) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
