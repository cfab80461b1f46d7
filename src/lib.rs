// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod calendar;
pub mod error;
pub mod file;
pub mod ics;
pub mod progress;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use error::HolidayError;
