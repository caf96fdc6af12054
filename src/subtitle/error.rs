use thiserror::Error;

use super::value::{Field, Value, Warning};

/// Reasons a style could not be constructed. No partially valid style is
/// ever produced alongside one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Style.{field} must be a str, not {found}")]
    NotText { field: Field, found: Value },

    #[error("Style.name must not be empty")]
    EmptyName,

    #[error("Style.font_size must be interpretable as int, not {0}")]
    FontSize(Value),

    #[error("colour {found:?} given for Style.{field}, not interpretable as hex colour")]
    HexColour { field: Field, found: String },

    #[error("colour {found} given for Style.{field}, not interpretable as colour")]
    Colour { field: Field, found: Value },

    #[error("Style.{field} must be an integer, not {found}")]
    NotInteger { field: Field, found: Value },

    #[error("{0} is not a valid border style")]
    BorderStyle(Value),

    #[error("Style.{field} must be one of 0, 1, 2, 3, 4, not {found}")]
    OutOfRange { field: Field, found: Value },

    #[error("{0} is not a valid alignment")]
    Alignment(Value),

    #[error("Coercion rejected: {0}")]
    Coerced(Box<Warning>),

    #[error("Not a style line: {0:?}")]
    NotAStyleLine(String),

    #[error("Style line has {0} fields, expected {expected}", expected = Field::ALL.len())]
    FieldCount(usize),
}

/// The two broad classes of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value could not be interpreted as the type the field requires.
    Type,

    /// The value has the right type, but is not one of the values the field
    /// allows.
    Value,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotText { .. }
            | Self::FontSize(_)
            | Self::HexColour { .. }
            | Self::Colour { .. }
            | Self::NotInteger { .. }
            | Self::Coerced(_)
            | Self::NotAStyleLine(_)
            | Self::FieldCount(_) => ErrorKind::Type,
            Self::EmptyName
            | Self::BorderStyle(_)
            | Self::OutOfRange { .. }
            | Self::Alignment(_) => ErrorKind::Value,
        }
    }

    /// The field the error relates to, if it can be attributed to a single one.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::NotText { field, .. }
            | Self::HexColour { field, .. }
            | Self::Colour { field, .. }
            | Self::NotInteger { field, .. }
            | Self::OutOfRange { field, .. } => Some(*field),
            Self::EmptyName => Some(Field::Name),
            Self::FontSize(_) => Some(Field::FontSize),
            Self::BorderStyle(_) => Some(Field::BorderStyle),
            Self::Alignment(_) => Some(Field::Alignment),
            Self::Coerced(warning) => Some(warning.field),
            Self::NotAStyleLine(_) | Self::FieldCount(_) => None,
        }
    }
}
