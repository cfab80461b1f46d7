// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge: *where the ground truth lives in the markup* and
//! *how to read it robustly*. Specs take an already rendered document; they
//! never drive the browser, touch the filesystem, or decide what to write.
//!
//! ## Typical call chain
//! ```text
//! runner → core::render (html text) → specs::year::resolve_document
//!                                   ↘ specs::holidays::extract_report (uses specs::months)
//!        → calendar / file (emit)
//! ```
//!
//! ## Conventions
//! - CSS selectors via `scraper`; text is whitespace-normalized before use.
//! - Local problems (unknown month, missing field, bad day) are *values*, not
//!   errors: they are collected and counted, never propagated.
//! - Specs should be testable offline against static markup fixtures.
pub mod holidays;
pub mod months;
pub mod year;
