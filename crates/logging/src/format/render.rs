//! Rendering tokens against positional arguments.

use std::borrow::Cow;
use std::fmt::Display;

use super::{FormatToken, PropertyToken, parse};
use crate::error::RenderError;

impl<'a> FormatToken<'a> {
    /// Produces the text emitted for this token.
    ///
    /// Literals borrow from the format string and ignore `args`. Placeholders
    /// render the referenced argument through [`Display`] and apply their
    /// padding.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ArgumentOutOfRange`] when a placeholder refers
    /// past the end of `args`.
    pub fn render(&self, args: &[&dyn Display]) -> Result<Cow<'a, str>, RenderError> {
        match self {
            Self::Literal(text) => Ok(Cow::Borrowed(*text)),
            Self::Property(property) => property.render(args).map(Cow::Owned),
        }
    }
}

impl PropertyToken<'_> {
    /// Renders the referenced argument.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ArgumentOutOfRange`] when the index is not
    /// covered by `args`.
    pub fn render(&self, args: &[&dyn Display]) -> Result<String, RenderError> {
        let value = args
            .get(self.index)
            .ok_or(RenderError::ArgumentOutOfRange {
                index: self.index,
                len: args.len(),
            })?;
        Ok(self.padding.apply(value.to_string()))
    }
}

/// A token paired with its rendered text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedSegment<'a> {
    /// The token that produced the text.
    pub token: FormatToken<'a>,
    /// The rendered text.
    pub text: Cow<'a, str>,
}

/// Renders every token, stopping at the first failure.
///
/// Nothing is returned on failure, so callers that emit only after this
/// succeeds never produce partial output.
pub fn render_all<'a>(
    tokens: &[FormatToken<'a>],
    args: &[&dyn Display],
) -> Result<Vec<RenderedSegment<'a>>, RenderError> {
    tokens
        .iter()
        .map(|token| {
            token.render(args).map(|text| RenderedSegment {
                token: *token,
                text,
            })
        })
        .collect()
}

/// Parses `format` and renders it into a single string.
///
/// # Examples
///
/// ```
/// use logging::format::format_message;
///
/// let message = format_message("Hello {0}, you are {1}", &[&"Ann", &42])?;
/// assert_eq!(message, "Hello Ann, you are 42");
/// # Ok::<(), logging::RenderError>(())
/// ```
pub fn format_message(format: &str, args: &[&dyn Display]) -> Result<String, RenderError> {
    let mut message = String::with_capacity(format.len());
    for token in parse(format) {
        message.push_str(&token.render(args)?);
    }
    Ok(message)
}
