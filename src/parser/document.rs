// Author: Dustin Pilgrim
// License: MIT

use super::*;

/// Literal line that separates pages.
pub const PAGE_SEPARATOR: &str = "---\n";

/// First-line prefix that names a page.
pub const TITLE_PREFIX: &str = "#@";

impl Document {
    /// Split `text` into pages on `---\n`.
    ///
    /// The split is a plain substring split, so a separator inside a multiline
    /// body also starts a new page. A single leading separator and a trailing
    /// empty page are dropped.
    pub fn paginate(text: &str) -> Self {
        let body = text.strip_prefix(PAGE_SEPARATOR).unwrap_or(text);
        let mut chunks: Vec<&str> = body.split(PAGE_SEPARATOR).collect();
        if chunks.len() > 1 && chunks.last().is_some_and(|c| c.is_empty()) {
            chunks.pop();
        }

        let pages = chunks
            .into_iter()
            .enumerate()
            .map(|(index, chunk)| {
                let mut source = chunk.to_string();
                if !source.ends_with('\n') {
                    source.push('\n');
                }

                let title = source
                    .lines()
                    .next()
                    .and_then(|first| first.strip_prefix(TITLE_PREFIX))
                    .filter(|t| !t.is_empty())
                    .map(str::to_string);

                match title {
                    Some(title) => {
                        let body = source.split_once('\n').map_or(String::new(), |(_, rest)| rest.to_string());
                        Page::new(title, body)
                    }
                    None => Page::new(index.to_string(), source),
                }
            })
            .collect();

        Document { pages }
    }

    /// A one-page document, used for merged files.
    pub fn single(title: String, text: &str) -> Self {
        Document {
            pages: vec![Page::new(title, text.to_string())],
        }
    }
}

/// Parse a page, or hand back its memoized result.
pub(crate) fn parse_page(
    decoder: &Decoder,
    document: &Document,
    page: &Page,
    files: &RefCell<Vec<PathBuf>>,
) -> Result<Value, LpmlError> {
    if let Some(value) = page.result.get() {
        return Ok(value.clone());
    }

    if page.resolving.get() {
        return Err(LpmlError::ReferenceError {
            reference: page.title.clone(),
            message: "Circular merge: page is already being parsed".into(),
            hint: Some("Remove the merge that leads back to this page".into()),
            code: Some(304),
        });
    }

    debug!("parsing page '{}'", page.title);
    page.resolving.set(true);
    let lines: Vec<&str> = page.source.lines().collect();
    let parsed = Parser::new(decoder, document, page, files).parse_lines(&lines);
    page.resolving.set(false);

    let value = parsed?;
    Ok(page.result.get_or_init(|| value).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_pages_use_their_index() {
        let doc = Document::paginate("a: 1\n---\nb: 2\n");
        assert_eq!(doc.titles(), vec!["0", "1"]);
        assert_eq!(doc.pages[0].source, "a: 1\n");
        assert_eq!(doc.pages[1].source, "b: 2\n");
    }

    #[test]
    fn test_title_line_is_removed_from_source() {
        let doc = Document::paginate("#@base\na: 1\n---\n<<: base\n");
        assert_eq!(doc.titles(), vec!["base", "1"]);
        assert_eq!(doc.pages[0].source, "a: 1\n");
        assert!(doc.page("base").is_some());
        assert!(doc.page("missing").is_none());
    }

    #[test]
    fn test_title_is_taken_verbatim() {
        let doc = Document::paginate("#@ base\na: 1\n---\n#@\nb: 2\n");
        assert_eq!(doc.titles(), vec![" base", "1"]);
        assert!(doc.page("base").is_none());
    }

    #[test]
    fn test_trailing_newline_is_guaranteed() {
        let doc = Document::paginate("a: 1");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.pages[0].source, "a: 1\n");
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        let doc = Document::paginate("---\na: 1\n---\n");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.pages[0].title, "0");
    }

    #[test]
    fn test_empty_input_is_one_empty_page() {
        let doc = Document::paginate("");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.pages[0].source, "\n");
    }

    #[test]
    fn test_separator_without_newline_does_not_split() {
        let doc = Document::paginate("a: 1\n---");
        assert_eq!(doc.len(), 1);
    }
}
