// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use regex::Regex;

mod scanner;

pub use scanner::{leading_spaces, next_substantive, strip_inline_comment};

/// `<<:` or `- <<:` with nothing after it.
static MERGE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:- )?<<:$").unwrap());

/// `key: |`, `key: >-`, `key: |+` ...
static MULTILINE_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?): ([|>])([-+]?)$").unwrap());

/// Trailing newline handling for multiline scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chomp {
    /// `-`
    Strip,
    /// `+`
    Keep,
    /// no indicator
    Clip,
}

impl Chomp {
    fn from_indicator(indicator: &str) -> Self {
        match indicator {
            "-" => Chomp::Strip,
            "+" => Chomp::Keep,
            _ => Chomp::Clip,
        }
    }
}

/// How continuation lines of a multiline scalar are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// `|` keeps one newline per line.
    Preserve,
    /// `>` concatenates lines.
    Join,
}

/// Syntactic category of a single line, borrowing captured fields from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    MergeInline(&'a str),
    MergeStart,
    SequenceElement(&'a str),
    Multiline {
        key: &'a str,
        style: BlockStyle,
        chomp: Chomp,
    },
    KeyValue(&'a str, &'a str),
    BlockStart(&'a str),
    Unknown(&'a str),
}

impl LineKind<'_> {
    /// Blank and comment lines carry no content for the block parser.
    pub fn is_filler(&self) -> bool {
        matches!(self, LineKind::Blank | LineKind::Comment)
    }
}

/// Categorize one line. Merge forms are checked before sequence and
/// key/value forms since `- <<: x` also looks like a list item.
pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim_start();

    if line.is_empty() {
        return LineKind::Blank;
    }

    if line.starts_with('#') {
        return LineKind::Comment;
    }

    if let Some(target) = line.strip_prefix("- <<: ").or_else(|| line.strip_prefix("<<: ")) {
        return LineKind::MergeInline(target);
    }

    if MERGE_START.is_match(line) {
        return LineKind::MergeStart;
    }

    if let Some(item) = line.strip_prefix("- ") {
        return LineKind::SequenceElement(item);
    }

    if let Some(caps) = MULTILINE_HEADER.captures(line) {
        let key = caps.get(1).map_or("", |m| m.as_str());
        let style = if &caps[2] == "|" {
            BlockStyle::Preserve
        } else {
            BlockStyle::Join
        };
        return LineKind::Multiline {
            key,
            style,
            chomp: Chomp::from_indicator(&caps[3]),
        };
    }

    if let Some((key, value)) = line.split_once(": ") {
        return LineKind::KeyValue(key, value);
    }

    if let Some(key) = line.strip_suffix(':') {
        return LineKind::BlockStart(key);
    }

    LineKind::Unknown(line)
}

#[cfg(test)]
mod tests;
