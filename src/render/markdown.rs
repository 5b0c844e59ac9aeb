//! Markdown reader - raw text to display blocks.
//!
//! A deliberately small, deterministic block-level reader covering what the
//! content set actually uses: ATX headings, fenced code, unordered and
//! ordered list items, block quotes, thematic breaks, and paragraphs with
//! bold / italic / inline-code spans. Unterminated inline markers fall back
//! to literal text rather than erroring: a document always projects to
//! *something*.

use crate::types::{Block, Span, Style};

// =============================================================================
// Block-level reading
// =============================================================================

/// Convert a markdown body into display blocks.
pub fn to_blocks(body: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut quote: Vec<String> = Vec::new();
    let mut lines = body.lines().peekable();

    while let Some(line) = lines.next() {
        let trimmed = line.trim_end();

        // Fenced code swallows everything until the closing fence.
        if let Some(rest) = trimmed.trim_start().strip_prefix("```") {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_quote(&mut quote, &mut blocks);

            let lang = match rest.trim() {
                "" => None,
                lang => Some(lang.to_string()),
            };
            let mut code_lines = Vec::new();
            for code_line in lines.by_ref() {
                if code_line.trim_start().starts_with("```") {
                    break;
                }
                code_lines.push(code_line.to_string());
            }
            blocks.push(Block::Code {
                lang,
                lines: code_lines,
            });
            continue;
        }

        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_quote(&mut quote, &mut blocks);
            continue;
        }

        if let Some((level, text)) = heading(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_quote(&mut quote, &mut blocks);
            blocks.push(Block::Heading {
                level,
                spans: spans(text),
            });
            continue;
        }

        if is_rule(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_quote(&mut quote, &mut blocks);
            blocks.push(Block::Rule);
            continue;
        }

        if let Some(text) = trimmed.trim_start().strip_prefix('>') {
            flush_paragraph(&mut paragraph, &mut blocks);
            quote.push(text.trim_start().to_string());
            continue;
        }
        flush_quote(&mut quote, &mut blocks);

        if let Some((depth, text)) = list_item(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::ListItem {
                depth,
                spans: spans(text),
            });
            continue;
        }

        paragraph.push(trimmed.trim_start().to_string());
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    flush_quote(&mut quote, &mut blocks);
    blocks
}

fn flush_paragraph(pending: &mut Vec<String>, blocks: &mut Vec<Block>) {
    if pending.is_empty() {
        return;
    }
    let text = pending.join(" ");
    pending.clear();
    blocks.push(Block::Paragraph(spans(&text)));
}

fn flush_quote(pending: &mut Vec<String>, blocks: &mut Vec<Block>) {
    if pending.is_empty() {
        return;
    }
    let text = pending.join(" ");
    pending.clear();
    blocks.push(Block::Quote(spans(&text)));
}

/// ATX heading: 1-6 `#` followed by a space.
fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    rest.strip_prefix(' ')
        .map(|text| (hashes as u8, text.trim()))
}

/// Thematic break: three or more of the same `-`, `*`, or `_`, nothing else.
fn is_rule(line: &str) -> bool {
    let line = line.trim();
    if line.len() < 3 {
        return false;
    }
    for marker in ['-', '*', '_'] {
        if line.chars().all(|c| c == marker) {
            return true;
        }
    }
    false
}

/// Unordered (`-`, `*`, `+`) or ordered (`1.` / `1)`) list item.
/// Depth counts one level per two leading spaces.
fn list_item(line: &str) -> Option<(u8, &str)> {
    let indent = line.len() - line.trim_start().len();
    let rest = line.trim_start();

    let text = if let Some(text) = rest
        .strip_prefix("- ")
        .or_else(|| rest.strip_prefix("* "))
        .or_else(|| rest.strip_prefix("+ "))
    {
        text
    } else {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        match rest.as_bytes().get(digits) {
            Some(b'.') | Some(b')') => rest[digits + 1..].strip_prefix(' ')?,
            _ => return None,
        }
    };

    Some(((indent / 2).min(u8::MAX as usize) as u8, text))
}

// =============================================================================
// Inline spans
// =============================================================================

/// Split inline text into styled spans.
///
/// Recognizes `` `code` ``, `**bold**`, `*italic*`, and `_italic_`. Markers
/// without a closing partner stay literal. Styles do not nest.
pub fn spans(text: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        let (consumed, styled) = next_marker(rest);
        match styled {
            Some((span, after)) => {
                push_plain(&mut plain, &mut out);
                out.push(span);
                rest = after;
            }
            None => {
                // No marker matched at the front: move one char to plain.
                let Some(ch) = rest.chars().next() else { break };
                plain.push(ch);
                rest = &rest[consumed..];
            }
        }
    }

    push_plain(&mut plain, &mut out);
    out
}

fn push_plain(plain: &mut String, out: &mut Vec<Span>) {
    if !plain.is_empty() {
        out.push(Span::plain(std::mem::take(plain)));
    }
}

/// Try to read a styled span at the front of `rest`.
///
/// Returns `(chars_to_skip_on_miss, Some((span, remainder)))` on a match,
/// or `(len_of_first_char, None)` when the front is plain text.
fn next_marker(rest: &str) -> (usize, Option<(Span, &str)>) {
    let step = rest.chars().next().map_or(1, char::len_utf8);

    for (open, close, style) in [
        ("`", "`", Style::CODE),
        ("**", "**", Style::BOLD),
        ("*", "*", Style::ITALIC),
        ("_", "_", Style::ITALIC),
    ] {
        if let Some(inner) = rest.strip_prefix(open) {
            if let Some(end) = inner.find(close) {
                // Zero-width match means an unpaired run of markers; literal.
                if end == 0 {
                    continue;
                }
                let span = Span::styled(&inner[..end], style);
                let after = &inner[end + close.len()..];
                return (step, Some((span, after)));
            }
        }
    }

    (step, None)
}

// =============================================================================
// Tests
// =============================================================================
