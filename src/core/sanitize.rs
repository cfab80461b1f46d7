// src/core/sanitize.rs

/// Collapse runs of whitespace to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Map Thai numerals (U+0E50..U+0E59) to ASCII digits; everything else passes through.
pub fn thai_digits_to_ascii(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{0E50}'..='\u{0E59}' => {
                char::from(b'0' + (c as u32 - 0x0E50) as u8)
            }
            _ => c,
        })
        .collect()
}

/// Last whitespace-separated token, if any.
pub fn last_token(s: &str) -> Option<&str> {
    s.split_whitespace().next_back()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  วันพุธ \n\t 1  "), "วันพุธ 1");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn thai_digits_become_ascii() {
        assert_eq!(thai_digits_to_ascii("พ.ศ. ๒๕๖๘"), "พ.ศ. 2568");
        assert_eq!(thai_digits_to_ascii("วันพุธ ๑"), "วันพุธ 1");
        assert_eq!(thai_digits_to_ascii("2025"), "2025");
    }

    #[test]
    fn last_token_variants() {
        assert_eq!(last_token("วันพุธ 1"), Some("1"));
        assert_eq!(last_token("  31 "), Some("31"));
        assert_eq!(last_token("   "), None);
    }
}
