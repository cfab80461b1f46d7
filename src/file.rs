// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use tracing::info;

use crate::calendar::CalendarDocument;
use crate::config::options::ExportOptions;
use crate::error::HolidayError;
use crate::specs::holidays::HolidayRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmitOutcome {
    Written { path: PathBuf, events: usize },
    /// Nothing extracted; no file was created.
    NoData,
}

/// Build the calendar for `records` and write it to
/// `<out_dir>/<project>_<year>.ics`. An empty list writes nothing.
pub fn emit(
    records: &[HolidayRecord],
    export: &ExportOptions,
    stamp: NaiveDateTime,
) -> Result<EmitOutcome, HolidayError> {
    let Some(doc) = CalendarDocument::from_records(records, &export.project_name, stamp) else {
        info!("no holidays to write");
        return Ok(EmitOutcome::NoData);
    };

    ensure_directory(&export.out_dir)?;
    let path = export.out_path(doc.year);
    write_calendar(&path, &doc)?;

    info!(path = %path.display(), events = doc.events.len(), "calendar written");
    Ok(EmitOutcome::Written { path, events: doc.events.len() })
}

/// Create/truncate `path` and write the whole document through one handle.
/// The handle is flushed explicitly and closed on drop, error or not.
pub fn write_calendar(path: &Path, doc: &CalendarDocument) -> Result<(), HolidayError> {
    let file = File::create(path).map_err(|e| HolidayError::io(path, e))?;
    let mut out = BufWriter::new(file);
    doc.write_to(&mut out).map_err(|e| HolidayError::io(path, e))?;
    out.flush().map_err(|e| HolidayError::io(path, e))?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), HolidayError> {
    if dir.exists() && !dir.is_dir() {
        return Err(HolidayError::OutputNotDir(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| HolidayError::io(dir, e))?;
    }
    Ok(())
}
