#[cfg(test)]
use super::*;

#[test]
fn test_blank_and_comment_lines() {
    assert_eq!(classify(""), LineKind::Blank);
    assert_eq!(classify("    "), LineKind::Blank);
    assert_eq!(classify("# heading"), LineKind::Comment);
    assert_eq!(classify("   # indented"), LineKind::Comment);
}

#[test]
fn test_merge_forms_win_over_sequence_and_key_value() {
    assert_eq!(classify("<<: base"), LineKind::MergeInline("base"));
    assert_eq!(classify("  - <<: base"), LineKind::MergeInline("base"));
    assert_eq!(classify("<<: [a, b]"), LineKind::MergeInline("[a, b]"));
    assert_eq!(classify("<<:"), LineKind::MergeStart);
    assert_eq!(classify("- <<:"), LineKind::MergeStart);
}

#[test]
fn test_sequence_element() {
    assert_eq!(classify("- sword"), LineKind::SequenceElement("sword"));
    assert_eq!(classify("  - - nested"), LineKind::SequenceElement("- nested"));
    assert_eq!(classify("- name: x"), LineKind::SequenceElement("name: x"));
}

#[test]
fn test_multiline_headers() {
    assert_eq!(
        classify("desc: |"),
        LineKind::Multiline { key: "desc", style: BlockStyle::Preserve, chomp: Chomp::Clip }
    );
    assert_eq!(
        classify("desc: >-"),
        LineKind::Multiline { key: "desc", style: BlockStyle::Join, chomp: Chomp::Strip }
    );
    assert_eq!(
        classify("  long: |+"),
        LineKind::Multiline { key: "long", style: BlockStyle::Preserve, chomp: Chomp::Keep }
    );
}

#[test]
fn test_pipe_followed_by_text_is_a_plain_value() {
    assert_eq!(classify("cmd: |grep"), LineKind::KeyValue("cmd", "|grep"));
}

#[test]
fn test_key_value_splits_on_first_colon_space() {
    assert_eq!(classify("name: Gesslar"), LineKind::KeyValue("name", "Gesslar"));
    assert_eq!(classify("note: a: b"), LineKind::KeyValue("note", "a: b"));
    assert_eq!(classify("url: http://x.y"), LineKind::KeyValue("url", "http://x.y"));
}

#[test]
fn test_block_start_and_unknown() {
    assert_eq!(classify("stats:"), LineKind::BlockStart("stats"));
    assert_eq!(classify("  nested:"), LineKind::BlockStart("nested"));
    assert_eq!(classify("just words"), LineKind::Unknown("just words"));
    assert_eq!(classify("key:value"), LineKind::Unknown("key:value"));
    assert_eq!(classify("-"), LineKind::Unknown("-"));
}

#[test]
fn test_leading_spaces() {
    assert_eq!(leading_spaces("a"), 0);
    assert_eq!(leading_spaces("    a: 1"), 4);
    assert_eq!(leading_spaces("\ta"), 0);
    assert_eq!(leading_spaces("   "), 3);
}

#[test]
fn test_next_substantive_skips_blank_and_comment_lines() {
    let lines = vec!["# top", "", "  # more", "a: 1", "b: 2"];
    assert_eq!(next_substantive(&lines, 0), 3);
    assert_eq!(next_substantive(&lines, 4), 4);
    assert_eq!(next_substantive(&lines, 5), 5);
    assert_eq!(next_substantive(&["", "#"], 0), 2);
}

#[test]
fn test_strip_comment_without_quotes() {
    assert_eq!(strip_inline_comment("hp: 10 # base"), "hp: 10 ");
    assert_eq!(strip_inline_comment("hp: 10"), "hp: 10");
}

#[test]
fn test_strip_comment_keeps_hash_inside_quotes() {
    assert_eq!(strip_inline_comment("msg: \"a#b\""), "msg: \"a#b\"");
    assert_eq!(strip_inline_comment("msg: 'a#b' # note"), "msg: 'a#b'");
    assert_eq!(strip_inline_comment("msg: \"x\" # trailing"), "msg: \"x\"");
}

#[test]
fn test_strip_comment_with_unterminated_quote_is_untouched() {
    assert_eq!(strip_inline_comment("msg: \"open # still"), "msg: \"open # still");
}

#[test]
fn test_strip_comment_prefers_double_quote() {
    // The first double quote decides which character closes the region.
    assert_eq!(strip_inline_comment("a: \"it's\" # c"), "a: \"it's\"");
}
