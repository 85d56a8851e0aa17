use super::*;

/// Number of leading space characters. Tabs do not count as indentation.
pub fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Index of the first line at or after `from` that is neither blank nor a comment,
/// or `lines.len()` when there is none.
pub fn next_substantive(lines: &[&str], from: usize) -> usize {
    let mut curr = from;
    while curr < lines.len() {
        if !classify(lines[curr]).is_filler() {
            return curr;
        }
        curr += 1;
    }
    lines.len()
}

/// Drop a trailing `#` comment, leaving `#` inside a quoted region alone.
///
/// When the line holds a quote character, everything after the last matching
/// quote is discarded. A quote with no partner means the string is still open,
/// so nothing is stripped.
pub fn strip_inline_comment(line: &str) -> &str {
    let Some(pound) = line.find('#') else {
        return line;
    };

    let quote = line.find('"').map(|pos| (pos, '"')).or_else(|| line.find('\'').map(|pos| (pos, '\'')));

    if let Some((left, quote)) = quote {
        return match line.rfind(quote) {
            Some(right) if right > left => &line[..=right],
            _ => line,
        };
    }

    &line[..pound]
}
