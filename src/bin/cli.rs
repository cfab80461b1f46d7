// src/bin/cli.rs
use thai_bank_holidays::{cli, log};

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run()
}
