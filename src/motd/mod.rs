//! MOTD decoding.
//!
//! Server MOTDs use the legacy formatting convention: a `§` marker followed by
//! a one-character code. This module turns such text (after HTML entity
//! decoding) into an ordered list of [`StyledSpan`]s. Only the sixteen color
//! codes are mapped; any other code is kept as literal text so nothing the
//! server sent is silently dropped.
//!
//! Formatting is total: every input produces spans, and in the worst case all
//! of them are unstyled.

mod color;

pub use color::ColorCode;

use std::borrow::Cow;

/// The legacy formatting marker (section sign).
pub const MARKER: char = '§';

/// A server MOTD as delivered by the status API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Motd {
    /// The whole MOTD as one string
    PlainText(String),
    /// One string per MOTD line
    LineList(Vec<String>),
}

impl Motd {
    /// The MOTD as a single string; lines are joined with one space.
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            Motd::PlainText(text) => Cow::Borrowed(text),
            Motd::LineList(lines) => Cow::Owned(lines.join(" ")),
        }
    }
}

/// A run of text sharing one optional color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub color: Option<ColorCode>,
}

impl StyledSpan {
    /// An unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    /// A span in the given color.
    pub fn colored(text: impl Into<String>, color: ColorCode) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }

    /// Canonical name of the span's color, if it has one.
    pub fn color_name(&self) -> Option<&'static str> {
        self.color.map(ColorCode::name)
    }
}

/// Format a MOTD into styled spans.
///
/// Line lists are joined with a single space first, so
/// `LineList(["Line1", "Line2"])` formats exactly like `"Line1 Line2"`.
pub fn format_motd(motd: &Motd) -> Vec<StyledSpan> {
    format_text(&motd.joined())
}

/// Format one MOTD string into styled spans.
///
/// - HTML entities are decoded before codes are read. Decoding is applied to
///   the text between markers, so an entity such as `&sect;` yields a literal
///   `§` and never starts a code.
/// - Text before the first marker becomes an unstyled span, even when empty.
/// - `§` plus a color code starts a colored span holding the rest of that
///   segment. Zero-length colored spans are kept.
/// - `§` plus anything else, or a `§` with nothing after it, is kept verbatim
///   as unstyled text.
///
/// Concatenating the span texts gives the decoded input with every color
/// code pair removed.
///
/// # Examples
///
/// ```
/// use mcpinger::motd::{format_text, ColorCode, StyledSpan};
///
/// let spans = format_text("§aHello§r World");
/// assert_eq!(
///     spans,
///     vec![
///         StyledSpan::plain(""),
///         StyledSpan::colored("Hello", ColorCode::Green),
///         StyledSpan::plain("§r World"),
///     ]
/// );
/// ```
pub fn format_text(text: &str) -> Vec<StyledSpan> {
    let mut segments = text
        .split(MARKER)
        .map(|segment| html_escape::decode_html_entities(segment));

    let mut spans = Vec::new();
    // `split` always yields at least one segment
    if let Some(first) = segments.next() {
        spans.push(StyledSpan::plain(first));
    }

    for segment in segments {
        let mut chars = segment.chars();
        match chars.next().and_then(ColorCode::from_code) {
            Some(color) => spans.push(StyledSpan::colored(chars.as_str(), color)),
            None => {
                let mut literal = String::with_capacity(MARKER.len_utf8() + segment.len());
                literal.push(MARKER);
                literal.push_str(&segment);
                spans.push(StyledSpan::plain(literal));
            }
        }
    }

    spans
}

/// Concatenate span texts, discarding color.
pub fn visible_text(spans: &[StyledSpan]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}
