//! crates/logging/src/format.rs
//! Positional format strings: tokenizer, renderer and template reconstruction.
//!
//! A format string mixes literal text with `{index}` placeholders that refer to
//! positional arguments supplied when the message is written. A placeholder
//! may carry a padding spec after a colon (`{0:>8}`, `{1:*^10}`). Brace runs
//! that do not form a valid placeholder, including doubled braces, stay in the
//! surrounding literal text unchanged.
//!
//! Tokens borrow from the format string; parsing never allocates per token
//! beyond the output vector.

use std::fmt;

mod render;
mod spec;

pub use render::{RenderedSegment, format_message, render_all};
pub use spec::{Alignment, Padding};

/// A parsed segment of a format string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormatToken<'a> {
    /// Literal text, emitted verbatim.
    Literal(&'a str),
    /// A positional argument placeholder.
    Property(PropertyToken<'a>),
}

impl<'a> FormatToken<'a> {
    /// Reports whether the token is a placeholder.
    #[must_use]
    pub const fn is_property(&self) -> bool {
        matches!(self, Self::Property(_))
    }

    /// Appends the token's source text to `out`.
    pub fn write_template(&self, out: &mut String) {
        match self {
            Self::Literal(text) => out.push_str(text),
            Self::Property(property) => out.push_str(property.source),
        }
    }
}

/// A `{index[:spec]}` placeholder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PropertyToken<'a> {
    source: &'a str,
    index: usize,
    spec: Option<&'a str>,
    padding: Padding,
}

impl<'a> PropertyToken<'a> {
    /// The placeholder text including both braces.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Zero-based argument index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The raw spec text after the colon, if one was present.
    #[must_use]
    pub const fn spec(&self) -> Option<&'a str> {
        self.spec
    }

    /// Padding parsed from the spec.
    #[must_use]
    pub const fn padding(&self) -> Padding {
        self.padding
    }
}

impl fmt::Display for PropertyToken<'_> {
    /// Writes the placeholder exactly as it appeared in the format string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}

/// Splits `format` into literal and placeholder tokens, left to right.
///
/// An empty string yields no tokens; a string without placeholders yields a
/// single literal. Argument indices are not validated here.
///
/// # Examples
///
/// ```
/// use logging::format::{FormatToken, parse};
///
/// let tokens = parse("copied {0} files in {1:>5}s");
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0], FormatToken::Literal("copied "));
/// assert!(tokens[1].is_property());
/// ```
#[must_use]
pub fn parse(format: &str) -> Vec<FormatToken<'_>> {
    let bytes = format.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut position = 0;

    while position < bytes.len() {
        if bytes[position] == b'{' {
            if let Some((property, end)) = parse_property(format, position) {
                if literal_start < position {
                    tokens.push(FormatToken::Literal(&format[literal_start..position]));
                }
                tokens.push(FormatToken::Property(property));
                position = end;
                literal_start = end;
                continue;
            }
        }
        position += 1;
    }

    if literal_start < format.len() {
        tokens.push(FormatToken::Literal(&format[literal_start..]));
    }

    tokens
}

/// Parses a placeholder whose opening brace sits at `open`.
///
/// Returns the token and the byte offset just past the closing brace.
fn parse_property(format: &str, open: usize) -> Option<(PropertyToken<'_>, usize)> {
    let body_start = open + 1;
    let close = body_start + format[body_start..].find('}')?;
    let body = &format[body_start..close];

    let (index_text, spec) = match body.split_once(':') {
        Some((index_text, spec)) => (index_text, Some(spec)),
        None => (body, None),
    };

    if index_text.is_empty() || !index_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = index_text.parse::<usize>().ok()?;
    let padding = match spec {
        Some(spec) => Padding::parse(spec)?,
        None => Padding::NONE,
    };

    Some((
        PropertyToken {
            source: &format[open..=close],
            index,
            spec,
            padding,
        },
        close + 1,
    ))
}

/// Rebuilds the source text of `tokens`.
///
/// For any format string `s`, `to_template(&parse(s)) == s`.
#[must_use]
pub fn to_template(tokens: &[FormatToken<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        token.write_template(&mut out);
    }
    out
}
