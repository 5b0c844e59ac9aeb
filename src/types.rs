//! Core types for docdeck.
//!
//! The display tree defined here is the boundary between document projection
//! and terminal painting: the renderer consumes it without knowing anything
//! about markdown, and the content side produces it without knowing anything
//! about ANSI.

use std::fmt;

// =============================================================================
// Identifier
// =============================================================================

/// Stable document identifier derived from a discovery path
/// (prefix and suffix stripped). Used for index lookup and routing.
pub type DocId = String;

// =============================================================================
// Text Style (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Inline text attributes as a bitfield for cheap comparison.
    ///
    /// Combine with bitwise OR: `Style::BOLD | Style::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Style: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const CODE = 1 << 2;
        const DIM = 1 << 3;
    }
}

// =============================================================================
// Span
// =============================================================================

/// A run of text with a uniform style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::NONE,
        }
    }

    /// Create a styled span.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if the span contains no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// =============================================================================
// Block
// =============================================================================

/// A block-level element of the display tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading, level 1-6.
    Heading { level: u8, spans: Vec<Span> },
    /// Flowing text, wrapped at paint time.
    Paragraph(Vec<Span>),
    /// Fenced code. Lines are kept verbatim, never wrapped.
    Code {
        lang: Option<String>,
        lines: Vec<String>,
    },
    /// List item. Depth counts nesting levels starting at 0.
    ListItem { depth: u8, spans: Vec<Span> },
    /// Block quote.
    Quote(Vec<Span>),
    /// Thematic break.
    Rule,
}

// =============================================================================
// DisplayTree
// =============================================================================

/// Renderer-agnostic projection of a document.
///
/// An empty tree is the projection of "no document selected": painting it
/// produces nothing, so the renderer needs no special absent-state handling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayTree {
    pub blocks: Vec<Block>,
}

impl DisplayTree {
    /// The neutral tree for the absent state.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

impl fmt::Display for DisplayTree {
    /// Plain-text rendering, mainly useful in tests and logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            match block {
                Block::Heading { spans, .. }
                | Block::Paragraph(spans)
                | Block::Quote(spans)
                | Block::ListItem { spans, .. } => {
                    for span in spans {
                        write!(f, "{}", span.text)?;
                    }
                    writeln!(f)?;
                }
                Block::Code { lines, .. } => {
                    for line in lines {
                        writeln!(f, "{line}")?;
                    }
                }
                Block::Rule => writeln!(f, "---")?,
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_combination() {
        let style = Style::BOLD | Style::ITALIC;
        assert!(style.contains(Style::BOLD));
        assert!(style.contains(Style::ITALIC));
        assert!(!style.contains(Style::CODE));
    }

    #[test]
    fn test_empty_tree() {
        let tree = DisplayTree::empty();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.to_string(), "");
    }

    #[test]
    fn test_display_plain_text() {
        let tree = DisplayTree {
            blocks: vec![
                Block::Heading {
                    level: 1,
                    spans: vec![Span::plain("Title")],
                },
                Block::Paragraph(vec![
                    Span::plain("hello "),
                    Span::styled("world", Style::BOLD),
                ]),
            ],
        };
        assert_eq!(tree.to_string(), "Title\nhello world\n");
    }
}
