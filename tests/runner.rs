// tests/runner.rs
//
// Whole runs with an injected renderer (static markup, no browser).
//
use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use thai_bank_holidays::config::options::{ExportOptions, RunOptions};
use thai_bank_holidays::core::render::RenderError;
use thai_bank_holidays::file::EmitOutcome;
use thai_bank_holidays::progress::Progress;
use thai_bank_holidays::runner::run_at;
use thai_bank_holidays::specs::holidays::HolidayRecord;
use thai_bank_holidays::specs::year::YearSource;
use thai_bank_holidays::HolidayError;

const PAGE: &str = r#"
<html><head><title>วันหยุดตามประเพณีของสถาบันการเงิน ประจำปี 2568</title></head>
<body>
  <div class="holiday-group">
    <div class="month-title"><h3>มกราคม</h3></div>
    <div class="month-holiday-item"><div class="item-desc"><h3>วันพุธ 1</h3><h3>วันขึ้นปีใหม่</h3></div></div>
  </div>
  <div class="holiday-group">
    <div class="month-title"><h3>เมษายน</h3></div>
    <div class="month-holiday-item"><div class="item-desc"><h3>วันจันทร์ 14</h3><h3>วันสงกรานต์</h3></div></div>
    <div class="month-holiday-item"><div class="item-desc"><h3>วันพฤหัสบดี 31</h3><h3>ไม่มีวันนี้</h3></div></div>
  </div>
</body></html>
"#;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("thai_holidays_run_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn opts_into(dir: &PathBuf) -> RunOptions {
    RunOptions {
        url: "https://example.invalid/holidays".into(),
        export: ExportOptions { out_dir: dir.join("output"), ..ExportOptions::default() },
        ..RunOptions::default()
    }
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

#[derive(Default)]
struct Recorder {
    begun: Option<usize>,
    done: Vec<String>,
    lines: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, groups: usize) { self.begun = Some(groups); }
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn item_done(&mut self, record: &HolidayRecord) { self.done.push(record.name.clone()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn full_run_writes_calendar_for_resolved_year() {
    let dir = tmp_dir("full");
    let opts = opts_into(&dir);
    let renderer = |url: &str| -> Result<String, RenderError> {
        assert_eq!(url, "https://example.invalid/holidays");
        Ok(PAGE.to_string())
    };
    let mut rec = Recorder::default();

    let summary = run_at(&opts, &renderer, Some(&mut rec), now(), 2030).unwrap();

    // Buddhist Era on the page beats the clock's 2030.
    assert_eq!(summary.year.year, 2025);
    assert_eq!(summary.year.source, YearSource::BuddhistEra(2568));
    assert_eq!(summary.report.records.len(), 2);
    assert_eq!(summary.report.skipped_count(), 1);
    assert!(summary.wrote_file());

    let path = dir.join("output").join("thai_bank_holidays_2025.ics");
    assert_eq!(summary.outcome, EmitOutcome::Written { path: path.clone(), events: 2 });
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("DTSTART;VALUE=DATE:20250414"));

    assert_eq!(rec.begun, Some(2));
    assert_eq!(rec.done, vec!["วันขึ้นปีใหม่", "วันสงกรานต์"]);
    assert!(rec.finished);
}

#[test]
fn empty_page_is_success_without_file() {
    let dir = tmp_dir("empty");
    let opts = opts_into(&dir);
    let renderer = |_: &str| -> Result<String, RenderError> { Ok(String::new()) };
    let mut rec = Recorder::default();

    let summary = run_at(&opts, &renderer, Some(&mut rec), now(), 2030).unwrap();

    assert_eq!(summary.outcome, EmitOutcome::NoData);
    assert!(!summary.wrote_file());
    assert!(!summary.year.is_confident());
    assert_eq!(summary.year.year, 2030);
    assert!(!dir.join("output").exists());
    assert!(rec.lines.iter().any(|l| l == "No holidays found."));
}

#[test]
fn renderer_failure_is_fatal() {
    let dir = tmp_dir("fail");
    let opts = opts_into(&dir);
    let renderer = |_: &str| -> Result<String, RenderError> {
        Err(RenderError::Launch("chrome not installed".into()))
    };
    let mut rec = Recorder::default();

    let err = run_at(&opts, &renderer, Some(&mut rec), now(), 2030).unwrap_err();
    assert!(matches!(err, HolidayError::Render(RenderError::Launch(_))));
    assert!(rec.finished, "progress is finished on the error path too");
    assert!(!dir.join("output").exists());
}

#[test]
fn progress_is_optional() {
    let dir = tmp_dir("noprogress");
    let opts = opts_into(&dir);
    let renderer = |_: &str| -> Result<String, RenderError> { Ok(PAGE.to_string()) };

    let summary = run_at(&opts, &renderer, None, now(), 2030).unwrap();
    assert_eq!(summary.report.records.len(), 2);
}

#[test]
fn fallback_year_comes_from_its_own_clock() {
    let dir = tmp_dir("clocks");
    let opts = opts_into(&dir);
    let page = r#"<html><head><title>วันหยุดสถาบันการเงิน</title></head><body>
        <div class="holiday-group"><div class="month-title"><h3>มกราคม</h3></div>
        <div class="month-holiday-item"><div class="item-desc"><h3>วันพุธ 1</h3><h3>วันขึ้นปีใหม่</h3></div></div>
        </div></body></html>"#;
    let renderer = |_: &str| -> Result<String, RenderError> { Ok(page.to_string()) };

    // 2030-12-31 20:00 UTC is already 2031-01-01 in Bangkok.
    let stamp = NaiveDate::from_ymd_opt(2030, 12, 31).unwrap().and_hms_opt(20, 0, 0).unwrap();
    let summary = run_at(&opts, &renderer, None, stamp, 2031).unwrap();

    assert_eq!(summary.year.year, 2031);
    assert_eq!(summary.year.source, YearSource::Fallback);
    let path = dir.join("output").join("thai_bank_holidays_2031.ics");
    assert_eq!(summary.outcome, EmitOutcome::Written { path: path.clone(), events: 1 });
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("DTSTART;VALUE=DATE:20310101\r\n"));
    assert!(text.contains("DTSTAMP:20301231T200000Z\r\n"));
}
