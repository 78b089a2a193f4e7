use std::fmt::{self, Display, Formatter};
use std::iter;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PadError;

/// A single padding character. Defaults to a space.
///
/// Multi-character fills are rejected when parsing, so a padded result can
/// never overshoot the requested width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fill(char);

impl Fill {
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl Default for Fill {
    fn default() -> Self {
        Self(' ')
    }
}

impl From<char> for Fill {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl FromStr for Fill {
    type Err = PadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(PadError::InvalidFill(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Fill {
    type Error = PadError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Fill> for String {
    fn from(fill: Fill) -> Self {
        fill.0.to_string()
    }
}

impl Display for Fill {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Clamps a signed width to a usable one. Negative widths mean no padding.
pub fn width(cols: i64) -> usize {
    usize::try_from(cols).unwrap_or(0)
}

/// Left-pads the textual representation of `value` to at least `cols`
/// characters by prepending `fill`.
///
/// The result is never truncated: if the text is already `cols` characters
/// or longer it is returned unchanged. Length is counted in `char`s.
///
/// ```
/// use leftpad::{pad, Fill};
///
/// assert_eq!(pad("test", 10, Fill::default()), "      test");
/// assert_eq!(pad(&3, 10, Fill::new('0')), "0000000003");
/// assert_eq!(pad("test", 2, Fill::default()), "test");
/// ```
pub fn pad<T: Display + ?Sized>(value: &T, cols: usize, fill: Fill) -> String {
    let text = value.to_string();
    let len = text.chars().count();

    if len >= cols {
        return text;
    }

    let mut padded: String = iter::repeat_n(fill.0, cols - len).collect();
    padded.push_str(&text);
    padded
}

/// [`pad`] with the default space fill.
pub fn pad_default<T: Display + ?Sized>(value: &T, cols: usize) -> String {
    pad(value, cols, Fill::default())
}
