// src/cli.rs
use std::env;

use color_eyre::eyre::{self, WrapErr, bail};

use crate::{
    config::options::RunOptions,
    core::render::ChromeRenderer,
    progress::Progress,
    runner,
    specs::holidays::HolidayRecord,
};

/// Prints status lines to stdout.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, groups: usize) {
        println!("Found {groups} month groups");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, record: &HolidayRecord) {
        println!("  {}  {}", record.date, record.name);
    }
}

/// Single entry point: no flags. Exit code 0 on success and on "no holidays
/// found"; any error bubbles up for a non-zero exit.
pub fn run() -> eyre::Result<()> {
    let mut args = env::args().skip(1);
    if let Some(a) = args.next() {
        match a.as_str() {
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                return Ok(());
            }
            other => bail!("Unknown arg: {other} (this tool takes no arguments)"),
        }
    }

    let opts = RunOptions::default();
    let renderer = ChromeRenderer::new(opts.render.clone());
    let mut progress = ConsoleProgress;

    runner::run(&opts, &renderer, Some(&mut progress))
        .wrap_err_with(|| format!("holiday run against {} failed", opts.url))?;
    Ok(())
}
