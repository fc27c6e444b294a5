//! Placeholder padding specs of the form `[[fill]align][width]`.

/// Horizontal alignment within a padded field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Alignment {
    /// `<`: pad on the right.
    #[default]
    Left,
    /// `>`: pad on the left.
    Right,
    /// `^`: split the padding, extra column on the right.
    Center,
}

impl Alignment {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '^' => Some(Self::Center),
            _ => None,
        }
    }
}

/// Fill, alignment and minimum width applied to a rendered argument.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Padding {
    /// Character used to fill the field.
    pub fill: char,
    /// Where the text sits within the field.
    pub alignment: Alignment,
    /// Minimum field width in characters.
    pub width: usize,
}

impl Padding {
    /// Largest accepted field width; wider specs are not placeholders.
    pub const MAX_WIDTH: usize = 999_999;

    /// No padding.
    pub const NONE: Self = Self {
        fill: ' ',
        alignment: Alignment::Left,
        width: 0,
    };

    /// Parses a spec; returns `None` when the text is not a valid spec.
    ///
    /// An empty spec is valid and means no padding. Widths above
    /// [`MAX_WIDTH`](Self::MAX_WIDTH) are rejected.
    #[must_use]
    pub fn parse(spec: &str) -> Option<Self> {
        let mut chars = spec.chars();
        let first = chars.next();
        let second = chars.next();

        let (fill, alignment, rest) = match (first, second) {
            (Some(fill), Some(align)) if Alignment::from_char(align).is_some() => (
                fill,
                Alignment::from_char(align)?,
                &spec[fill.len_utf8() + align.len_utf8()..],
            ),
            (Some(align), _) if Alignment::from_char(align).is_some() => {
                (' ', Alignment::from_char(align)?, &spec[align.len_utf8()..])
            }
            _ => (' ', Alignment::Left, spec),
        };

        if !rest.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let width = if rest.is_empty() {
            0
        } else {
            rest.parse().ok().filter(|width| *width <= Self::MAX_WIDTH)?
        };

        Some(Self {
            fill,
            alignment,
            width,
        })
    }

    /// Pads `text` to the configured width; shorter or equal widths return it unchanged.
    #[must_use]
    pub fn apply(&self, text: String) -> String {
        let length = text.chars().count();
        if length >= self.width {
            return text;
        }

        let padding = self.width - length;
        let (before, after) = match self.alignment {
            Alignment::Left => (0, padding),
            Alignment::Right => (padding, 0),
            Alignment::Center => (padding / 2, padding - padding / 2),
        };

        let capacity = padding
            .checked_mul(self.fill.len_utf8())
            .and_then(|fill| fill.checked_add(text.len()))
            .unwrap_or(text.len());
        let mut padded = String::with_capacity(capacity);
        padded.extend(std::iter::repeat_n(self.fill, before));
        padded.push_str(&text);
        padded.extend(std::iter::repeat_n(self.fill, after));
        padded
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::NONE
    }
}
