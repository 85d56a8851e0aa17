// Author: Dustin Pilgrim
// License: MIT

use crate::lexer::{classify, leading_spaces, BlockStyle, Chomp, LineKind};

/// Gather the body of a `|` or `>` scalar starting at `start`.
///
/// Lines belong to the body while they are indented past `boundary` and do
/// not themselves look like a key or list item. A whitespace-only line
/// indented past `boundary` is part of the body; an empty line ends it.
/// Returns the chomped text and the index of the first line after the body.
pub fn collect_multiline(
    lines: &[&str],
    start: usize,
    boundary: usize,
    style: BlockStyle,
    mode: Chomp,
) -> (String, usize) {
    let filler = match style {
        BlockStyle::Preserve => '\n',
        BlockStyle::Join => ' ',
    };

    let mut text = String::new();
    let mut curr = start;

    while curr < lines.len() && leading_spaces(lines[curr]) > boundary {
        let line = lines[curr];

        match classify(line) {
            LineKind::Blank => text.push(filler),
            LineKind::Comment | LineKind::Unknown(_) => {
                text.push_str(line.trim_start_matches(' '));
                if style == BlockStyle::Preserve {
                    text.push('\n');
                }
            }
            _ => break,
        }
        curr += 1;
    }

    if mode != Chomp::Keep {
        text = text.trim_start_matches(filler).to_string();
    }

    (chomp(text, style, mode), curr)
}

/// Apply chomping to an assembled multiline body.
pub fn chomp(text: String, style: BlockStyle, mode: Chomp) -> String {
    match (style, mode) {
        (BlockStyle::Join, Chomp::Strip) => text.trim_end().to_string(),
        (BlockStyle::Join, Chomp::Clip) => format!("{}\n", text.trim_end()),
        (BlockStyle::Preserve, Chomp::Strip) => text.trim_end_matches('\n').to_string(),
        (BlockStyle::Preserve, Chomp::Clip) => text,
        (_, Chomp::Keep) => text + "\n",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_concatenates_without_separator() {
        let lines = ["desc: >", "  Hello", "  World"];
        let (text, next) = collect_multiline(&lines, 1, 0, BlockStyle::Join, Chomp::Clip);
        assert_eq!(text, "HelloWorld\n");
        assert_eq!(next, 3);
    }

    #[test]
    fn test_join_keeps_trailing_spaces_as_separators() {
        let lines = ["desc: >-", "  Hello ", "  World"];
        let (text, _) = collect_multiline(&lines, 1, 0, BlockStyle::Join, Chomp::Strip);
        assert_eq!(text, "Hello World");
    }

    #[test]
    fn test_join_blank_line_becomes_space() {
        let lines = ["desc: >-", "  one", "  ", "  two"];
        let (text, _) = collect_multiline(&lines, 1, 0, BlockStyle::Join, Chomp::Strip);
        assert_eq!(text, "one two");
    }

    #[test]
    fn test_empty_line_ends_body() {
        let lines = ["desc: >-", "  one", "", "  two"];
        let (text, next) = collect_multiline(&lines, 1, 0, BlockStyle::Join, Chomp::Strip);
        assert_eq!(text, "one");
        assert_eq!(next, 2);
    }

    #[test]
    fn test_preserve_clip_keeps_final_newline() {
        let lines = ["desc: |", "  Hello", "  World", "next: 1"];
        let (text, next) = collect_multiline(&lines, 1, 0, BlockStyle::Preserve, Chomp::Clip);
        assert_eq!(text, "Hello\nWorld\n");
        assert_eq!(next, 3);
    }

    #[test]
    fn test_preserve_keep_adds_newline() {
        let lines = ["desc: |+", "  Hello"];
        let (text, _) = collect_multiline(&lines, 1, 0, BlockStyle::Preserve, Chomp::Keep);
        assert_eq!(text, "Hello\n\n");
    }

    #[test]
    fn test_leading_blank_lines_are_dropped_unless_keep() {
        let lines = ["desc: |", "  ", "  body"];
        let (text, _) = collect_multiline(&lines, 1, 0, BlockStyle::Preserve, Chomp::Clip);
        assert_eq!(text, "body\n");

        let (kept, _) = collect_multiline(&lines, 1, 0, BlockStyle::Preserve, Chomp::Keep);
        assert_eq!(kept, "\nbody\n\n");
    }

    #[test]
    fn test_indented_trailing_blank_line_is_part_of_body() {
        let lines = ["desc: |", "  body", "  ", "other: 1"];
        let (text, next) = collect_multiline(&lines, 1, 0, BlockStyle::Preserve, Chomp::Clip);
        assert_eq!(text, "body\n\n");
        assert_eq!(next, 3);

        let (stripped, _) = collect_multiline(&lines, 1, 0, BlockStyle::Preserve, Chomp::Strip);
        assert_eq!(stripped, "body");
    }

    #[test]
    fn test_structured_line_ends_body_early() {
        let lines = ["desc: |", "  first", "  looks: structured", "  last"];
        let (text, next) = collect_multiline(&lines, 1, 0, BlockStyle::Preserve, Chomp::Clip);
        assert_eq!(text, "first\n");
        assert_eq!(next, 2);
    }

    #[test]
    fn test_comment_lines_are_body_text() {
        let lines = ["desc: |-", "  # not a comment here", "  text"];
        let (text, _) = collect_multiline(&lines, 1, 0, BlockStyle::Preserve, Chomp::Strip);
        assert_eq!(text, "# not a comment here\ntext");
    }

    #[test]
    fn test_outdented_line_ends_body() {
        let lines = ["  desc: >", "  same level"];
        let (text, next) = collect_multiline(&lines, 1, 2, BlockStyle::Join, Chomp::Clip);
        assert_eq!(text, "\n");
        assert_eq!(next, 1);
    }
}
