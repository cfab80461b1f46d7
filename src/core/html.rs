// src/core/html.rs
// Text helpers over a parsed `scraper::Html` tree.
// Everything returned here is whitespace-normalized.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

static HEADINGS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title, h1, h2").expect("invalid selector: headings"));

/// All text under `el`, whitespace collapsed.
pub fn elem_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// Text of the first match of `sel` under `el`, or None if there is no match
/// or the match is blank.
pub fn select_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let found = el.select(sel).next()?;
    let text = elem_text(found);
    if text.is_empty() { None } else { Some(text) }
}

/// `<title>`, `<h1>` and `<h2>` text in document order, one heading per line.
pub fn heading_text(doc: &Html) -> String {
    doc.select(&HEADINGS)
        .map(elem_text)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whole-document visible text.
pub fn page_text(doc: &Html) -> String {
    elem_text(doc.root_element())
}
