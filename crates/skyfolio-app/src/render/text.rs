//! Plain-text sanitizing
//!
//! API strings are shown verbatim, never interpreted. Control characters
//! are dropped so a record cannot smuggle terminal escape sequences.

/// Collapse a value onto one line: control characters and whitespace runs
/// become a single space, ends trimmed.
pub fn single_line(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for c in s.chars() {
        if c.is_whitespace() || c.is_control() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }
    out
}

/// Keep line breaks, drop every other control character
pub fn multi_line(s: &str) -> String {
    s.lines()
        .map(|line| {
            line.chars()
                .map(|c| if c == '\t' { ' ' } else { c })
                .filter(|c| !c.is_control())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
