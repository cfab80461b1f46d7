// src/runner.rs
use chrono::{Datelike, Local, NaiveDateTime, Utc};
use scraper::Html;
use tracing::{info, warn};

use crate::{
    config::options::RunOptions,
    core::render::Render,
    error::HolidayError,
    file::{self, EmitOutcome},
    progress::{NullProgress, Progress},
    specs::{
        holidays::{self, ExtractReport},
        months::THAI_MONTHS,
        year::{self, YearResolution},
    },
};

/// What one run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub year: YearResolution,
    pub report: ExtractReport,
    pub outcome: EmitOutcome,
}

impl RunSummary {
    pub fn wrote_file(&self) -> bool {
        matches!(self.outcome, EmitOutcome::Written { .. })
    }
}

/// Render → resolve year → extract → emit.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &RunOptions,
    renderer: &dyn Render,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, HolidayError> {
    run_at(opts, renderer, progress, Utc::now().naive_utc(), Local::now().year())
}

/// Same as [`run`] with fixed clocks. `stamp` is the UTC DTSTAMP for every event;
/// `fallback_year` is the local calendar year used when the page names none.
/// The two can disagree around New Year (Bangkok is UTC+7).
pub fn run_at(
    opts: &RunOptions,
    renderer: &dyn Render,
    progress: Option<&mut dyn Progress>,
    stamp: NaiveDateTime,
    fallback_year: i32,
) -> Result<RunSummary, HolidayError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let result = run_inner(opts, renderer, progress, stamp, fallback_year);
    progress.finish();
    result
}

fn run_inner(
    opts: &RunOptions,
    renderer: &dyn Render,
    progress: &mut dyn Progress,
    stamp: NaiveDateTime,
    fallback_year: i32,
) -> Result<RunSummary, HolidayError> {
    progress.log(&format!("Rendering {}…", opts.url));
    let html_doc = renderer.render(&opts.url)?;

    let (year, report) = process_page(&html_doc, fallback_year, progress);

    if !year.is_confident() {
        progress.log(&format!("Year not found on page; using {} (low confidence)", year.year));
    }
    progress.log(&format!(
        "{} holidays extracted, {} items skipped, {} groups skipped",
        report.records.len(),
        report.skipped_count(),
        report.skipped_groups.len(),
    ));

    let outcome = file::emit(&report.records, &opts.export, stamp)?;
    match &outcome {
        EmitOutcome::Written { path, events } => {
            info!(path = %path.display(), events, "run finished");
            progress.log(&format!("File {} created successfully.", path.display()));
        }
        EmitOutcome::NoData => {
            warn!("no holidays found; nothing written");
            progress.log("No holidays found.");
        }
    }

    Ok(RunSummary { year, report, outcome })
}

/// Pure core of a run: markup in, year + records out. No browser, no filesystem.
pub fn process_page(
    html_doc: &str,
    fallback_year: i32,
    progress: &mut dyn Progress,
) -> (YearResolution, ExtractReport) {
    let doc = Html::parse_document(html_doc);
    let year = year::resolve_document_with_fallback(&doc, fallback_year);

    progress.begin(holidays::month_groups(&doc).count());
    let report = holidays::extract_report(&doc, year.year, &THAI_MONTHS);
    for record in &report.records {
        progress.item_done(record);
    }
    (year, report)
}
