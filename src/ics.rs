// src/ics.rs
// Minimal iCalendar (RFC 5545) text writer + reader. std-only.
// Writer: CRLF endings, TEXT escaping, 75-octet folding on char boundaries.
// Reader: unfold, split name/params/value, unescape. Enough to read back what
// the writer produces; not a general-purpose parser.

use std::io::{self, Write};

const MAX_OCTETS: usize = 75;
const CRLF: &str = "\r\n";

/* ---------------- Writing ---------------- */

/// Escape a TEXT value: backslash, semicolon, comma, newline.
/// CRLF and a bare CR both become one escaped newline.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Fold a content line so no physical line exceeds 75 octets.
/// Never splits a multi-byte character; continuation lines start with one space.
pub fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + (line.len() / MAX_OCTETS + 1) * 3);
    let mut width = 0usize;
    for ch in line.chars() {
        let n = ch.len_utf8();
        if width + n > MAX_OCTETS {
            out.push_str(CRLF);
            out.push(' ');
            width = 1;
        }
        out.push(ch);
        width += n;
    }
    out
}

/// Write `NAME[;PARAMS]:VALUE` (value written as-is), folded, CRLF-terminated.
pub fn write_raw<W: Write>(mut w: W, head: &str, value: &str) -> io::Result<()> {
    let line = join!(head, ":", value);
    write!(w, "{}{}", fold_line(&line), CRLF)
}

/// Write a TEXT property; the value is escaped.
pub fn write_text<W: Write>(w: W, head: &str, value: &str) -> io::Result<()> {
    write_raw(w, head, &escape_text(value))
}

/* ---------------- Parsing ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub params: Vec<(String, String)>,
    /// Raw (still escaped) value.
    pub value: String,
}

impl Property {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> String {
        unescape_text(&self.value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub props: Vec<Property>,
    pub children: Vec<Component>,
}

impl Component {
    pub fn prop(&self, name: &str) -> Option<&Property> {
        self.props.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Component> {
        self.children.iter().filter(move |c| c.name.eq_ignore_ascii_case(name))
    }
}

pub fn unescape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Join folded continuation lines; tolerant of LF-only input.
pub fn unfold(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in text.split('\n') {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if let Some(cont) = raw.strip_prefix([' ', '\t']) {
            if let Some(last) = lines.last_mut() {
                last.push_str(cont);
                continue;
            }
        }
        if !raw.is_empty() {
            lines.push(s!(raw));
        }
    }
    lines
}

/// `NAME;K=V;K2="V2":value` → Property. None if there is no ':'.
pub fn parse_property(line: &str) -> Option<Property> {
    let mut in_quotes = false;
    let mut colon = None;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => { colon = Some(i); break; }
            _ => {}
        }
    }
    let colon = colon?;
    let (head, value) = (&line[..colon], &line[colon + 1..]);

    let mut parts = head.split(';');
    let name = parts.next()?.trim().to_ascii_uppercase();
    if name.is_empty() { return None; }

    let params = parts
        .filter_map(|p| {
            let (k, v) = p.split_once('=')?;
            Some((k.trim().to_ascii_uppercase(), s!(v.trim_matches('"'))))
        })
        .collect();

    Some(Property { name, params, value: s!(value) })
}

/// Parse the component tree. Unbalanced END lines are ignored; components still
/// open at EOF are closed.
pub fn parse_components(text: &str) -> Vec<Component> {
    let mut roots = Vec::new();
    let mut stack: Vec<Component> = Vec::new();

    for line in unfold(text) {
        let Some(prop) = parse_property(&line) else { continue };
        match prop.name.as_str() {
            "BEGIN" => stack.push(Component {
                name: prop.value.trim().to_ascii_uppercase(),
                ..Default::default()
            }),
            "END" => {
                let Some(done) = stack.pop() else { continue };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(done),
                    None => roots.push(done),
                }
            }
            _ => {
                if let Some(cur) = stack.last_mut() {
                    cur.props.push(prop);
                }
            }
        }
    }

    while let Some(open) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(open),
            None => roots.push(open),
        }
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_and_unescape_special_chars() {
        let raw = "a,b;c\\d\ne";
        let esc = escape_text(raw);
        assert_eq!(esc, "a\\,b\\;c\\\\d\\ne");
        assert_eq!(unescape_text(&esc), raw);
    }

    #[test]
    fn carriage_returns_become_newlines() {
        assert_eq!(escape_text("a\r\nb"), "a\\nb");
        assert_eq!(escape_text("a\rb"), "a\\nb");
        assert_eq!(unescape_text(&escape_text("a\rb")), "a\nb");
    }

    #[test]
    fn fold_keeps_lines_within_75_octets_and_chars_whole() {
        // Thai chars are 3 bytes each in UTF-8.
        let long = join!("SUMMARY:", &"วันหยุด".repeat(20));
        let folded = fold_line(&long);
        for physical in folded.split(CRLF) {
            assert!(physical.len() <= MAX_OCTETS, "line too long: {}", physical.len());
        }
        let rejoined = unfold(&folded).join("");
        assert_eq!(rejoined, long);
    }

    #[test]
    fn short_lines_are_not_folded() {
        assert_eq!(fold_line("VERSION:2.0"), "VERSION:2.0");
    }

    #[test]
    fn parse_property_with_params() {
        let p = parse_property("DTSTART;VALUE=DATE:20250101").expect("property");
        assert_eq!(p.name, "DTSTART");
        assert_eq!(p.param("value"), Some("DATE"));
        assert_eq!(p.value, "20250101");

        let q = parse_property(r#"X-TEST;LABEL="a:b":v"#).expect("property");
        assert_eq!(q.param("LABEL"), Some("a:b"));
        assert_eq!(q.value, "v");

        assert!(parse_property("garbage").is_none());
    }

    #[test]
    fn parse_components_nests() {
        let text = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\nSUMMARY:x\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
        let roots = parse_components(text);
        assert_eq!(roots.len(), 1);
        let cal = &roots[0];
        assert_eq!(cal.name, "VCALENDAR");
        assert_eq!(cal.prop("VERSION").map(|p| p.value.as_str()), Some("2.0"));
        assert_eq!(cal.children_named("VEVENT").count(), 1);
    }
}
