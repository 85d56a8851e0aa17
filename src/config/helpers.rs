use crate::ast::Value;
use crate::lexer::{classify, leading_spaces, strip_inline_comment, LineKind};

/// Walk a dotted path through mappings (by key) and sequences (by index).
pub(super) fn lookup<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    if path.trim().is_empty() {
        return Some(root);
    }

    let mut current = root;
    for seg in path.split('.') {
        current = match current {
            Value::Mapping(entries) => entries.get(seg)?,
            Value::Sequence(items) => items.get(seg.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Find the 1-based line where the key at `path` is written, with its text.
///
/// Scope is tracked by indentation. With several pages the last match wins,
/// matching the page whose value is returned. Returns `(0, "")` when the key
/// can't be located.
pub(super) fn find_config_line(path: &str, raw_content: &str) -> (usize, String) {
    let mut scope_stack: Vec<(usize, String)> = Vec::new();
    let mut found = (0, String::new());

    for (idx, raw) in raw_content.lines().enumerate() {
        if raw == "---" {
            scope_stack.clear();
            continue;
        }

        let line = strip_inline_comment(raw).trim_end();
        let indent = leading_spaces(line);

        let (key, opens_scope) = match classify(line) {
            LineKind::BlockStart(key) => (key, true),
            LineKind::KeyValue(key, value) => (key, value.trim().is_empty()),
            LineKind::Multiline { key, .. } => (key, false),
            _ => continue,
        };

        while scope_stack.last().is_some_and(|(depth, _)| *depth >= indent) {
            scope_stack.pop();
        }

        let full_path = scope_stack
            .iter()
            .map(|(_, k)| k.as_str())
            .chain(std::iter::once(key))
            .collect::<Vec<_>>()
            .join(".");

        if full_path == path {
            found = (idx + 1, line.trim().to_string());
        }

        if opens_scope {
            scope_stack.push((indent, key.to_string()));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;

    #[test]
    fn test_lookup_through_mappings_and_sequences() {
        let value = decode("stats:\n  hp: 3\nitems:\n  - sword\n  - shield\n").unwrap();
        assert_eq!(lookup(&value, "stats.hp"), Some(&Value::Int(3)));
        assert_eq!(lookup(&value, "items.1"), Some(&Value::String("shield".into())));
        assert_eq!(lookup(&value, "items.9"), None);
        assert_eq!(lookup(&value, "stats.hp.deeper"), None);
        assert_eq!(lookup(&value, ""), Some(&value));
    }

    #[test]
    fn test_find_config_line_tracks_indentation() {
        let raw = "name: x\nstats:\n  hp: 3\n  # note\n  mp: 4\nhp: 1\n";
        assert_eq!(find_config_line("stats.mp", raw), (5, "mp: 4".to_string()));
        assert_eq!(find_config_line("hp", raw), (6, "hp: 1".to_string()));
        assert_eq!(find_config_line("stats.nope", raw).0, 0);
    }

    #[test]
    fn test_find_config_line_prefers_last_page() {
        let raw = "hp: 1\n---\nhp: 2\n";
        assert_eq!(find_config_line("hp", raw).0, 3);
    }
}
