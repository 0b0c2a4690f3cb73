//! Crawl progress events and their console rendering.

use std::path::PathBuf;

use crate::utils::Colors;
use crate::utils::config::PLACEHOLDER_TITLE;

/// One step of the crawl, emitted in traversal order. `depth` is 1 for entries directly under the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrawlEvent {
    Directory { depth: usize, name: String },
    /// Final mode: a media file was found (before its companion is looked up).
    MediaFile { depth: usize, name: String },
    StubWritten { depth: usize, path: PathBuf },
    Found { depth: usize, title: String },
}

impl CrawlEvent {
    /// True for records whose title is still the stub placeholder.
    pub fn needs_edit(&self) -> bool {
        matches!(self, CrawlEvent::Found { title, .. } if title == PLACEHOLDER_TITLE)
    }
}

fn pad(depth: usize) -> String {
    "\t".repeat(depth)
}

/// Render an event as the indented, colored line the CLI prints.
pub fn render_event(event: &CrawlEvent) -> String {
    match event {
        CrawlEvent::Directory { depth, name } => {
            format!("{}{}", pad(*depth), Colors::colorize(Colors::DIRECTORY, name))
        }
        CrawlEvent::MediaFile { depth, name } => {
            format!("{}{}", pad(*depth), Colors::colorize(Colors::MEDIA, name))
        }
        CrawlEvent::StubWritten { depth, path } => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let text = format!("Writing out default markdown to {name}");
            format!("{}{}", pad(*depth), Colors::colorize(Colors::STUB, &text))
        }
        CrawlEvent::Found { depth, title } => {
            let color = if event.needs_edit() {
                Colors::NEEDS_EDIT
            } else {
                Colors::FOUND
            };
            let text = format!("Found: \"{title}\"");
            format!("{}{}", pad(*depth), Colors::colorize(color, &text))
        }
    }
}

/// Print an event to stdout.
pub fn print_event(event: &CrawlEvent) {
    println!("{}", render_event(event));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_title_needs_edit() {
        let stub = CrawlEvent::Found {
            depth: 2,
            title: PLACEHOLDER_TITLE.to_string(),
        };
        let done = CrawlEvent::Found {
            depth: 2,
            title: "My Talk".to_string(),
        };
        assert!(stub.needs_edit());
        assert!(!done.needs_edit());
    }

    #[test]
    fn rendered_lines_are_indented_by_depth() {
        colored::control::set_override(false);
        let line = render_event(&CrawlEvent::Found {
            depth: 2,
            title: "My Talk".to_string(),
        });
        assert_eq!(line, "\t\tFound: \"My Talk\"");
        let line = render_event(&CrawlEvent::StubWritten {
            depth: 1,
            path: PathBuf::from("/r/1_Mon/Talk.md"),
        });
        assert_eq!(line, "\tWriting out default markdown to Talk.md");
    }
}
