// Author: Dustin Pilgrim
// License: MIT

use super::*;

/// Parse one Mapping or Sequence node out of `lines`.
///
/// Returns the node and the index of the first line it did not consume, so the
/// caller can pick up from there. `base` is the page line number of `lines[0]`
/// and only feeds diagnostics.
pub(super) fn parse_block(
    parser: &Parser,
    lines: &[&str],
    base: usize,
    mut indent: Indent,
) -> Result<(Value, usize), LpmlError> {
    let mut curr = next_substantive(lines, 0);
    if curr >= lines.len() {
        return Ok((Value::empty_mapping(), 0));
    }

    // The first substantive line decides the shape of the block.
    let mut node = match classify(strip_inline_comment(lines[curr]).trim_end()) {
        LineKind::SequenceElement(_) => Value::Sequence(Vec::new()),
        _ => Value::empty_mapping(),
    };

    while curr < lines.len() {
        let line = strip_inline_comment(lines[curr]).trim_end();
        let line_indent = leading_spaces(line);
        let line_no = base + curr + 1;

        if line_indent < indent.width {
            break;
        }

        let raised = line_indent > indent.width;
        if raised {
            indent = indent.deeper(line_indent);
        }

        let kind = classify(line);
        trace!("page '{}' line {} (depth {}): {:?}", parser.page, line_no, indent.level, kind);

        if matches!(node, Value::Sequence(_)) && is_entry(&kind) {
            // A key at the items' own indentation closes the sequence, letting
            // `key:` be followed by an unindented list.
            if !raised {
                break;
            }
            return Err(parser.structural_error(
                line_no,
                format!("Key/value line inside a sequence: '{}'", line.trim()),
                Some("Sequence items holding mappings must use inline {key: value} syntax".into()),
                201,
            ));
        }

        let resume = match kind {
            LineKind::BlockStart(key) => {
                let (value, consumed) = parse_block(parser, &lines[curr + 1..], base + curr + 1, indent)?;
                insert(parser, &mut node, key, value, line_no)?;
                curr + 1 + consumed
            }

            LineKind::MergeStart => {
                let mut next = curr + 1;
                while next < lines.len() && leading_spaces(lines[next]) > indent.width {
                    let entry = strip_inline_comment(lines[next]).trim();
                    if let Some(reference) = entry.strip_prefix("- ") {
                        let merged = parser.inherit(reference.trim())?;
                        merge::combine(parser, &mut node, merged, base + next + 1)?;
                    }
                    next += 1;
                }
                next
            }

            LineKind::MergeInline(target) => {
                for reference in merge_targets(parser, target, line_no)? {
                    let merged = parser.inherit(&reference)?;
                    merge::combine(parser, &mut node, merged, line_no)?;
                }
                curr + 1
            }

            LineKind::SequenceElement(item) => {
                if let LineKind::SequenceElement(_) = classify(item) {
                    // `- - x`: gather the nested list, rebased to column zero.
                    let mut run = vec![item];
                    let mut next = curr + 1;
                    while next < lines.len() && leading_spaces(lines[next]) > indent.width {
                        run.push(lines[next].trim());
                        next += 1;
                    }
                    let nested = Indent { level: indent.level + 1, width: 0 };
                    let (value, consumed) = parse_block(parser, &run, base + curr, nested)?;
                    push(parser, &mut node, value, line_no)?;
                    curr + consumed.max(1)
                } else {
                    push(parser, &mut node, parse_scalar(item), line_no)?;
                    curr + 1
                }
            }

            LineKind::KeyValue(key, value) => {
                let value = value.trim();
                if value.is_empty() {
                    let (nested, consumed) = parse_block(parser, &lines[curr + 1..], base + curr + 1, indent)?;
                    insert(parser, &mut node, key, nested, line_no)?;
                    curr + 1 + consumed
                } else {
                    insert(parser, &mut node, key, parse_scalar(value), line_no)?;
                    curr + 1
                }
            }

            LineKind::Multiline { key, style, chomp } => {
                let (text, next) = collect_multiline(lines, curr + 1, indent.width, style, chomp);
                insert(parser, &mut node, key, Value::String(text), line_no)?;
                next
            }

            LineKind::Unknown(raw) => {
                if parser.decoder.options().strict {
                    return Err(parser.syntax_error(
                        line_no,
                        format!("Unrecognized line: '{}'", raw),
                        Some("Expected `key: value`, `key:`, `- item` or a merge directive".into()),
                        102,
                    ));
                }
                debug!("page '{}' line {}: skipping unrecognized line '{}'", parser.page, line_no, raw);
                curr + 1
            }

            LineKind::Blank | LineKind::Comment => curr + 1,
        };

        curr = next_substantive(lines, resume);
    }

    Ok((node, curr))
}

fn is_entry(kind: &LineKind) -> bool {
    matches!(
        kind,
        LineKind::BlockStart(_) | LineKind::KeyValue(..) | LineKind::Multiline { .. }
    )
}

/// Expand the target of `<<: x` into the references it names.
fn merge_targets(parser: &Parser, target: &str, line: usize) -> Result<Vec<String>, LpmlError> {
    let invalid = |found: &Value| {
        parser.structural_error(
            line,
            format!("Invalid merge target: expected a string or list of strings, got {}", found.kind()),
            Some("Use `<<: page` or `<<: [page, /path/file.lpml]`".into()),
            202,
        )
    };

    match parse_scalar(target.trim()) {
        Value::String(reference) => Ok(vec![reference]),
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(reference) => Ok(reference),
                other => Err(invalid(&other)),
            })
            .collect(),
        other => Err(invalid(&other)),
    }
}

fn insert(parser: &Parser, node: &mut Value, key: &str, value: Value, line: usize) -> Result<(), LpmlError> {
    match node {
        Value::Mapping(entries) => {
            entries.insert(key.to_string(), value);
            Ok(())
        }
        _ => Err(parser.structural_error(
            line,
            format!("Key '{}' cannot be added to a sequence", key),
            None,
            201,
        )),
    }
}

fn push(parser: &Parser, node: &mut Value, value: Value, line: usize) -> Result<(), LpmlError> {
    match node {
        Value::Sequence(items) => {
            items.push(value);
            Ok(())
        }
        _ => Err(parser.structural_error(
            line,
            "List item inside a mapping block".into(),
            Some("A block holds either `key: value` lines or `- item` lines, not both".into()),
            203,
        )),
    }
}
