use std::io::IsTerminal;

use crate::Position;

/// Characters of context shown on each side of the offending offset.
const CONTEXT_WIDTH: usize = 50;

const ANSI_RED_OPEN: &str = "\x1b[31m";
const ANSI_RED_CLOSE: &str = "\x1b[39m";
const PLAIN_OPEN: &str = "-->";
const PLAIN_CLOSE: &str = "<--";

/// How the offending character is delimited in a rendered excerpt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Red foreground colour, for terminals.
    Ansi,
    /// `-->x<--` arrows, for logs and anything without colour support.
    Plain,
}

impl MarkerStyle {
    pub fn detect() -> Self {
        if std::io::stderr().is_terminal() {
            MarkerStyle::Ansi
        } else {
            MarkerStyle::Plain
        }
    }

    fn markers(self) -> (&'static str, &'static str) {
        match self {
            MarkerStyle::Ansi => (ANSI_RED_OPEN, ANSI_RED_CLOSE),
            MarkerStyle::Plain => (PLAIN_OPEN, PLAIN_CLOSE),
        }
    }
}

fn floor_boundary(source: &str, mut index: usize) -> usize {
    if index >= source.len() {
        return source.len();
    }
    while !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Quotes the source window around `position`, marking the character that
/// starts at the offset.
///
/// ```text
/// "...
/// <up to 50 chars>-->x<--<up to 49 chars>..."
/// ```
pub fn render_excerpt(position: &Position, style: MarkerStyle) -> String {
    let source = position.source();
    let offset = floor_boundary(source, position.offset());

    // Up to CONTEXT_WIDTH characters before the offset, and CONTEXT_WIDTH
    // characters starting at it.
    let start = source[..offset]
        .char_indices()
        .rev()
        .nth(CONTEXT_WIDTH - 1)
        .map_or(0, |(index, _)| index);
    let end = source[offset..]
        .char_indices()
        .nth(CONTEXT_WIDTH)
        .map_or(source.len(), |(index, _)| offset + index);
    let window = &source[start..end];
    let error_index = offset - start;

    let marked_end = window[error_index..]
        .chars()
        .next()
        .map_or(error_index, |c| error_index + c.len_utf8());

    let (open, close) = style.markers();
    let mut excerpt = String::from("\"");

    if start != 0 {
        excerpt.push_str("...\n");
    }
    excerpt.push_str(&window[..error_index]);
    excerpt.push_str(open);
    excerpt.push_str(&window[error_index..marked_end]);
    excerpt.push_str(close);
    excerpt.push_str(&window[marked_end..]);
    if end < source.len() {
        excerpt.push_str("...");
    }
    excerpt.push('"');

    excerpt
}
