//! Renderer Module - Terminal projection of the display tree.
//!
//! The display tree is laid out into styled lines at the current terminal
//! width (word-wrapped paragraphs, indented lists and quotes, verbatim code)
//! and the visible window is painted with ANSI SGR styling. Painting is the
//! only place that knows about the terminal; the core never reaches it.
//!
//! # API
//!
//! - `layout(tree, width)` - Display tree to styled lines
//! - `AnsiRenderer::draw(tree, width, height, scroll)` - Paint one frame

mod output;

pub use output::OutputBuffer;

use std::io;

use crate::types::{Block, DisplayTree, Span, Style};

// =============================================================================
// Layout
// =============================================================================

/// A laid-out terminal line: a sequence of styled spans that fits the width.
pub type Line = Vec<Span>;

/// Lay a display tree out into terminal lines at the given width.
///
/// Deterministic for a given `(tree, width)`. Blocks are separated by one
/// blank line; code lines are never wrapped (the terminal may clip them).
pub fn layout(tree: &DisplayTree, width: u16) -> Vec<Line> {
    let width = width.max(10) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (i, block) in tree.blocks.iter().enumerate() {
        if i > 0 {
            lines.push(Vec::new());
        }
        match block {
            Block::Heading { level, spans } => {
                let mut line: Line = vec![Span::styled(
                    format!("{} ", "#".repeat(*level as usize)),
                    Style::DIM,
                )];
                for span in spans {
                    line.push(Span::styled(span.text.clone(), span.style | Style::BOLD));
                }
                lines.push(line);
            }
            Block::Paragraph(spans) => {
                lines.extend(wrap_spans(spans, width, "", ""));
            }
            Block::Code { lines: code, .. } => {
                for code_line in code {
                    lines.push(vec![Span::styled(
                        format!("    {code_line}"),
                        Style::CODE,
                    )]);
                }
            }
            Block::ListItem { depth, spans } => {
                let indent = "  ".repeat(*depth as usize);
                let first = format!("{indent}• ");
                let rest = format!("{indent}  ");
                lines.extend(wrap_spans(spans, width, &first, &rest));
            }
            Block::Quote(spans) => {
                lines.extend(wrap_spans(spans, width, "│ ", "│ "));
            }
            Block::Rule => {
                lines.push(vec![Span::styled("─".repeat(width), Style::DIM)]);
            }
        }
    }

    lines
}

/// Greedy word wrap across styled spans.
///
/// `first_prefix` starts the first line, `rest_prefix` the continuation
/// lines (hanging indent for lists, quote bars, etc.). Prefixes carry DIM.
fn wrap_spans(spans: &[Span], width: usize, first_prefix: &str, rest_prefix: &str) -> Vec<Line> {
    let words: Vec<Span> = spans
        .iter()
        .flat_map(|span| {
            span.text
                .split_whitespace()
                .map(|word| Span::styled(word, span.style))
                .collect::<Vec<_>>()
        })
        .collect();

    let mut lines = Vec::new();
    let mut line: Line = Vec::new();
    let mut used = prefix_width(first_prefix);

    for word in words {
        let word_width = word.text.chars().count();
        let sep = usize::from(!line.is_empty());

        if !line.is_empty() && used + sep + word_width > width {
            lines.push(finish_line(line, lines.is_empty(), first_prefix, rest_prefix));
            line = Vec::new();
            used = prefix_width(rest_prefix);
        }

        if let Some(last) = line.last_mut() {
            if last.style == word.style {
                last.text.push(' ');
                last.text.push_str(&word.text);
            } else {
                line.push(Span::styled(format!(" {}", word.text), word.style));
            }
            used += 1 + word_width;
        } else {
            used += word_width;
            line.push(word);
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(finish_line(line, lines.is_empty(), first_prefix, rest_prefix));
    }
    lines
}

fn prefix_width(prefix: &str) -> usize {
    prefix.chars().count()
}

fn finish_line(line: Line, is_first: bool, first_prefix: &str, rest_prefix: &str) -> Line {
    let prefix = if is_first { first_prefix } else { rest_prefix };
    if prefix.is_empty() {
        return line;
    }
    let mut with_prefix: Line = vec![Span::styled(prefix, Style::DIM)];
    with_prefix.extend(line);
    with_prefix
}

// =============================================================================
// AnsiRenderer
// =============================================================================

/// Paints laid-out lines to the terminal with SGR styling.
///
/// Holds only the output buffer; all document state lives upstream in the
/// reactive pipeline, so drawing the same frame twice writes the same bytes.
#[derive(Debug, Default)]
pub struct AnsiRenderer {
    out: OutputBuffer,
}

impl AnsiRenderer {
    pub fn new() -> Self {
        Self {
            out: OutputBuffer::new(),
        }
    }

    /// Paint one frame: clear the screen, then write the window of `height`
    /// lines starting at `scroll`.
    pub fn draw(
        &mut self,
        tree: &DisplayTree,
        width: u16,
        height: u16,
        scroll: u16,
    ) -> io::Result<()> {
        let lines = layout(tree, width);
        self.out.write_str("\x1b[2J\x1b[H");

        let start = (scroll as usize).min(lines.len());
        let end = (start + height as usize).min(lines.len());

        for line in &lines[start..end] {
            write_line(&mut self.out, line);
        }

        self.out.flush_stdout()
    }

    /// Paint into an arbitrary writer (used in tests).
    pub fn draw_to<W: io::Write>(
        &mut self,
        writer: &mut W,
        tree: &DisplayTree,
        width: u16,
        height: u16,
        scroll: u16,
    ) -> io::Result<()> {
        let lines = layout(tree, width);
        let start = (scroll as usize).min(lines.len());
        let end = (start + height as usize).min(lines.len());
        for line in &lines[start..end] {
            write_line(&mut self.out, line);
        }
        self.out.flush_to(writer)
    }
}

fn write_line(out: &mut OutputBuffer, line: &Line) {
    for span in line {
        let codes = sgr_codes(span.style);
        if !codes.is_empty() {
            out.write_sgr(&codes);
        }
        out.write_str(&span.text);
        if !codes.is_empty() {
            out.write_sgr(&[0]);
        }
    }
    out.write_str("\r\n");
}

/// Map a span style to SGR codes. CODE renders cyan, on top of any weight.
fn sgr_codes(style: Style) -> Vec<u8> {
    let mut codes = Vec::new();
    if style.contains(Style::BOLD) {
        codes.push(1);
    }
    if style.contains(Style::DIM) {
        codes.push(2);
    }
    if style.contains(Style::ITALIC) {
        codes.push(3);
    }
    if style.contains(Style::CODE) {
        codes.push(36);
    }
    codes
}

// =============================================================================
// Tests
// =============================================================================
