//! Companion file parsing: optional `{tags}` line, title line, markdown body.

use pulldown_cmark::{Options, Parser, html};
use std::path::Path;

use crate::error::CrawlError;
use crate::utils::config::{HEADING_MARKER, TAG_CLOSE, TAG_OPEN};

/// Everything a companion file contributes to a [`Record`](crate::Record).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    pub tags: Option<String>,
    pub title: String,
    pub markdown_description: String,
    pub description: String,
}

/// Read and parse the companion file at `path`.
pub fn parse_companion(path: &Path) -> Result<Metadata, CrawlError> {
    let text = std::fs::read_to_string(path).map_err(|e| CrawlError::io(path, e))?;
    parse_companion_str(&text, path)
}

/// Parse companion text. `path` is only used for error reporting.
pub fn parse_companion_str(text: &str, path: &Path) -> Result<Metadata, CrawlError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let (first, mut rest) =
        next_line(text).ok_or_else(|| CrawlError::EmptyCompanion(path.to_path_buf()))?;

    let mut tags = None;
    let mut title_line = first;
    if first.starts_with(TAG_OPEN) {
        tags = Some(strip_tag_markers(first));
        let (line, after) =
            next_line(rest).ok_or_else(|| CrawlError::MissingTitle(path.to_path_buf()))?;
        title_line = line;
        rest = after;
    }

    let markdown_description = rest.to_string();
    let description = render_markdown(&markdown_description);
    Ok(Metadata {
        tags,
        title: strip_heading(title_line),
        markdown_description,
        description,
    })
}

/// Render a markdown body to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Split off one line; terminator (`\n` or `\r\n`) is dropped. None at end of input.
fn next_line(s: &str) -> Option<(&str, &str)> {
    if s.is_empty() {
        return None;
    }
    let (line, rest) = match s.find('\n') {
        Some(i) => (&s[..i], &s[i + 1..]),
        None => (s, ""),
    };
    Some((line.strip_suffix('\r').unwrap_or(line), rest))
}

fn strip_tag_markers(line: &str) -> String {
    line.replace([TAG_OPEN, TAG_CLOSE], "").trim().to_string()
}

fn strip_heading(line: &str) -> String {
    line.trim()
        .trim_start_matches(HEADING_MARKER)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Metadata {
        parse_companion_str(text, Path::new("x.md")).unwrap()
    }

    #[test]
    fn tag_line_then_heading() {
        let m = parse("{a, b}\n# My Talk\n\nHello.");
        assert_eq!(m.tags.as_deref(), Some("a, b"));
        assert_eq!(m.title, "My Talk");
        assert_eq!(m.markdown_description, "\nHello.");
        assert_eq!(m.description, "<p>Hello.</p>\n");
    }

    #[test]
    fn tag_whitespace_is_trimmed() {
        assert_eq!(parse("{   a, b  }\nT").tags.as_deref(), Some("a, b"));
        assert_eq!(parse("{a, b}   \nT").tags.as_deref(), Some("a, b"));
        assert_eq!(parse("{ tag1, tag2, tag3 }\nT").tags.as_deref(), Some("tag1, tag2, tag3"));
    }

    #[test]
    fn no_tag_line_means_first_line_is_title() {
        let m = parse("# Raw Title\nBody text.");
        assert_eq!(m.tags, None);
        assert_eq!(m.title, "Raw Title");
        assert_eq!(m.markdown_description, "Body text.");
    }

    #[test]
    fn plain_title_and_multiple_heading_markers() {
        assert_eq!(parse("Plain").title, "Plain");
        assert_eq!(parse("### Deep ###x\n").title, "Deep ###x");
    }

    #[test]
    fn empty_title_is_valid() {
        let m = parse("{x}\n#\nbody");
        assert_eq!(m.title, "");
        assert_eq!(m.markdown_description, "body");
    }

    #[test]
    fn crlf_terminators_are_dropped_from_header_lines() {
        let m = parse("{a}\r\n# T\r\nline\r\n");
        assert_eq!(m.tags.as_deref(), Some("a"));
        assert_eq!(m.title, "T");
        assert_eq!(m.markdown_description, "line\r\n");
    }

    #[test]
    fn bom_is_ignored() {
        let m = parse("\u{feff}{a}\n# T");
        assert_eq!(m.tags.as_deref(), Some("a"));
        assert_eq!(m.title, "T");
        assert_eq!(m.markdown_description, "");
    }

    #[test]
    fn empty_file_is_an_error() {
        let err = parse_companion_str("", Path::new("e.md")).unwrap_err();
        assert!(matches!(err, CrawlError::EmptyCompanion(_)));
        assert!(!err.is_structural());
    }

    #[test]
    fn tag_line_without_title_is_an_error() {
        let err = parse_companion_str("{a, b}\n", Path::new("t.md")).unwrap_err();
        assert!(matches!(err, CrawlError::MissingTitle(_)));
    }

    #[test]
    fn render_markdown_emphasis() {
        assert_eq!(render_markdown("*hi*"), "<p><em>hi</em></p>\n");
        assert_eq!(render_markdown(""), "");
    }
}
