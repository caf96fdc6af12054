//! Inputs accepted when building a [`Style`](super::Style), and the coercion
//! rules that turn each of them into the value stored for its field.
//!
//! Every coercion function either returns the normalized value, together
//! with any [`Warning`]s about how the input was reinterpreted, or an
//! [`Error`] if the input cannot be made legal.

use std::fmt;

use serde::Deserialize;

use super::error::Error;
use super::{Alignment, BorderStyle, Colour};

/// A loosely typed input value for one style field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Text(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! value_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Value {
                fn from(value: $int) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Colour> for Value {
    fn from(value: Colour) -> Self {
        Self::Int(i64::from(value.rgb()))
    }
}

impl From<BorderStyle> for Value {
    fn from(value: BorderStyle) -> Self {
        Self::Int(i64::from(value.code()))
    }
}

impl From<Alignment> for Value {
    fn from(value: Alignment) -> Self {
        Self::Int(i64::from(value.pack()))
    }
}

/// The twenty fields of a style, in the order they appear in the
/// `Format:` line and in every `Style:` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    FontName,
    FontSize,
    PrimaryColour,
    SecondaryColour,
    OutlineColour,
    BackColour,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    BorderStyle,
    Outline,
    Shadow,
    Alignment,
    MarginL,
    MarginR,
    MarginV,
    AlphaLevel,
    Encoding,
}

impl Field {
    /// All fields in positional order. Emitting and parsing both go by this.
    pub const ALL: [Self; 20] = [
        Self::Name,
        Self::FontName,
        Self::FontSize,
        Self::PrimaryColour,
        Self::SecondaryColour,
        Self::OutlineColour,
        Self::BackColour,
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Strikethrough,
        Self::BorderStyle,
        Self::Outline,
        Self::Shadow,
        Self::Alignment,
        Self::MarginL,
        Self::MarginR,
        Self::MarginV,
        Self::AlphaLevel,
        Self::Encoding,
    ];

    /// The name of the field on the Rust side, e.g. `font_size`.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FontName => "font_name",
            Self::FontSize => "font_size",
            Self::PrimaryColour => "primary_colour",
            Self::SecondaryColour => "secondary_colour",
            Self::OutlineColour => "outline_colour",
            Self::BackColour => "back_colour",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::BorderStyle => "border_style",
            Self::Outline => "outline",
            Self::Shadow => "shadow",
            Self::Alignment => "alignment",
            Self::MarginL => "margin_l",
            Self::MarginR => "margin_r",
            Self::MarginV => "margin_v",
            Self::AlphaLevel => "alpha_level",
            Self::Encoding => "encoding",
        }
    }

    /// The name used for the field in the `Format:` line, e.g. `Fontsize`.
    #[must_use]
    pub const fn format_name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::FontName => "Fontname",
            Self::FontSize => "Fontsize",
            Self::PrimaryColour => "PrimaryColour",
            Self::SecondaryColour => "SecondaryColour",
            Self::OutlineColour => "OutlineColour",
            Self::BackColour => "BackColour",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::Strikethrough => "Strikethrough",
            Self::BorderStyle => "BorderStyle",
            Self::Outline => "Outline",
            Self::Shadow => "Shadow",
            Self::Alignment => "Alignment",
            Self::MarginL => "MarginL",
            Self::MarginR => "MarginR",
            Self::MarginV => "MarginV",
            Self::AlphaLevel => "AlphaLevel",
            Self::Encoding => "Encoding",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// The input had a different type than the field, and was converted.
    Reinterpreted,

    /// A colour was outside `[0, 0xFFFFFF]` and was masked to its lower 24 bits.
    OutOfRange,
}

/// A non-fatal notice that an input was repaired during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub field: Field,
    pub kind: WarningKind,

    /// The input as given, formatted for display.
    pub original: String,

    /// The value that was stored instead.
    pub corrected: String,
}

impl Warning {
    fn reinterpreted<C: fmt::Display>(field: Field, original: &Value, corrected: C) -> Self {
        Self {
            field,
            kind: WarningKind::Reinterpreted,
            original: original.to_string(),
            corrected: corrected.to_string(),
        }
    }

    fn out_of_range(field: Field, original: i128, corrected: u32) -> Self {
        Self {
            field,
            kind: WarningKind::OutOfRange,
            original: format!("{original} == #{}", padded_hex(original)),
            corrected: corrected.to_string(),
        }
    }

    /// Reports the warning through `tracing`.
    pub fn log(&self) {
        tracing::warn!(
            target: "ssa_style",
            field = self.field.attribute(),
            original = %self.original,
            corrected = %self.corrected,
            "{}",
            self
        );
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::Reinterpreted => write!(
                f,
                "Passed {} as Style.{}. Converted to {}",
                self.original, self.field, self.corrected
            ),
            WarningKind::OutOfRange => write!(
                f,
                "colour {} given for Style.{}, outside [0, 0xFFFFFF]. Using {} instead.",
                self.original, self.field, self.corrected
            ),
        }
    }
}

/// Six-digit uppercase hex, with the sign counted towards the width.
fn padded_hex(value: i128) -> String {
    if value < 0 {
        format!("-{:05X}", value.unsigned_abs())
    } else {
        format!("{value:06X}")
    }
}

/// A value together with the warnings produced while normalizing it.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Normalized<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Normalized<T> {
    pub const fn clean(value: T) -> Self {
        Self {
            value,
            warnings: vec![],
        }
    }

    fn warned(value: T, warning: Warning) -> Self {
        Self {
            value,
            warnings: vec![warning],
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Discards the warnings.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Treats any warning as an error.
    ///
    /// # Errors
    /// Returns [`Error::Coerced`] with the first warning, if there were any.
    pub fn into_strict(self) -> Result<T, Error> {
        match self.warnings.into_iter().next() {
            Some(warning) => Err(Error::Coerced(Box::new(warning))),
            None => Ok(self.value),
        }
    }

    /// Moves the warnings into `sink` and returns the value.
    pub(crate) fn drain_into(self, sink: &mut Vec<Warning>) -> T {
        sink.extend(self.warnings);
        self.value
    }
}

/// Converts a float to an integer the way a truncating cast would, refusing
/// values that have no integer counterpart.
#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> Option<i64> {
    // `i64::MAX as f64` rounds up to 2^63, hence the exclusive upper bound
    #[allow(clippy::cast_precision_loss)]
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && in_range).then(|| value.trunc() as i64)
}

/// Text fields must be given as text.
///
/// # Errors
/// Returns [`Error::NotText`] for any other kind of value.
pub fn text(field: Field, value: Value) -> Result<String, Error> {
    match value {
        Value::Text(text) => Ok(text),
        found => Err(Error::NotText { field, found }),
    }
}

/// Plain integer fields (margins, alpha level, encoding) accept integers only.
///
/// # Errors
/// Returns [`Error::NotInteger`] for non-integers, or integers that do not
/// fit into an `i32`.
pub fn integer(field: Field, value: &Value) -> Result<i32, Error> {
    match value {
        Value::Int(int) => i32::try_from(*int).map_err(|_| Error::NotInteger {
            field,
            found: value.clone(),
        }),
        _ => Err(Error::NotInteger {
            field,
            found: value.clone(),
        }),
    }
}

/// The font size is converted to an integer if it is not one already.
///
/// # Errors
/// Returns [`Error::FontSize`] if the value has no integer interpretation.
pub fn font_size(value: &Value) -> Result<Normalized<i32>, Error> {
    let error = || Error::FontSize(value.clone());

    let converted = match value {
        Value::Int(int) => return i32::try_from(*int).map(Normalized::clean).map_err(|_| error()),
        Value::Bool(flag) => i64::from(*flag),
        Value::Float(float) => truncate(*float).ok_or_else(error)?,
        Value::Text(text) => text.trim().parse::<i64>().map_err(|_| error())?,
    };

    let size = i32::try_from(converted).map_err(|_| error())?;
    Ok(Normalized::warned(
        size,
        Warning::reinterpreted(Field::FontSize, value, size),
    ))
}

/// Reads a hex number the way colour text is written in practice: surrounding
/// whitespace and any number of leading `#` are ignored, and a sign, a `0x`
/// prefix and single `_` separators between digits are allowed.
fn hex(text: &str) -> Option<i128> {
    let text = text.trim().trim_start_matches('#').trim_start();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let prefixed = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"));
    let digits = match prefixed {
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None => unsigned,
    };

    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let magnitude = i128::from_str_radix(&digits, 16).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Normalizes one colour field: hex strings (with or without leading `#`)
/// and floats are reinterpreted as integers, and integers outside
/// `[0, 0xFFFFFF]` are masked to their lower 24 bits.
///
/// # Errors
/// Returns [`Error::HexColour`] for text that is not a hex number, and
/// [`Error::Colour`] for floats that are not finite.
pub fn colour(field: Field, value: &Value) -> Result<Normalized<Colour>, Error> {
    let mut warnings = vec![];

    let int: i128 = match value {
        Value::Int(int) => i128::from(*int),
        Value::Text(text) => {
            let parsed = hex(text).ok_or_else(|| Error::HexColour {
                field,
                found: text.clone(),
            })?;
            warnings.push(Warning::reinterpreted(field, value, parsed));
            parsed
        }
        Value::Float(float) => {
            let truncated = truncate(*float).ok_or_else(|| Error::Colour {
                field,
                found: value.clone(),
            })?;
            warnings.push(Warning::reinterpreted(field, value, truncated));
            i128::from(truncated)
        }
        Value::Bool(flag) => {
            let converted = i128::from(*flag);
            warnings.push(Warning::reinterpreted(field, value, converted));
            converted
        }
    };

    let rgb = match u32::try_from(int).ok().and_then(Colour::from_rgb) {
        Some(colour) => colour,
        None => {
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let masked = Colour::masked(int as u32);
            warnings.push(Warning::out_of_range(field, int, masked.rgb()));
            masked
        }
    };

    Ok(Normalized {
        value: rgb,
        warnings,
    })
}

/// Flags take any truthy or falsy value: nonzero numbers and non-empty text
/// are true.
pub fn flag(field: Field, value: &Value) -> Normalized<bool> {
    let converted = match value {
        Value::Bool(flag) => return Normalized::clean(*flag),
        Value::Int(int) => *int != 0,
        Value::Float(float) => *float != 0.0,
        Value::Text(text) => !text.is_empty(),
    };

    Normalized::warned(converted, Warning::reinterpreted(field, value, converted))
}

/// # Errors
/// Returns [`Error::BorderStyle`] unless the value is one of the codes
/// of [`BorderStyle`].
pub fn border_style(value: &Value) -> Result<BorderStyle, Error> {
    match value {
        Value::Int(code) => BorderStyle::try_from(*code),
        _ => Err(Error::BorderStyle(value.clone())),
    }
}

/// Outline and shadow widths are integers between 0 and 4 inclusive.
///
/// # Errors
/// Returns [`Error::OutOfRange`] for anything else. No coercion is attempted.
pub fn width(field: Field, value: &Value) -> Result<u8, Error> {
    match value {
        Value::Int(int @ 0..=4) => u8::try_from(*int).map_err(|_| Error::OutOfRange {
            field,
            found: value.clone(),
        }),
        _ => Err(Error::OutOfRange {
            field,
            found: value.clone(),
        }),
    }
}

/// # Errors
/// Returns [`Error::Alignment`] unless the value is one of the nine packed
/// alignments, see [`Alignment::validate`].
pub fn alignment(value: &Value) -> Result<Alignment, Error> {
    match value {
        Value::Int(packed) => Alignment::validate(*packed),
        _ => Err(Error::Alignment(value.clone())),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches2::assert_matches;

    use super::*;

    #[test]
    fn hex_colours() -> Result<(), Error> {
        let normalized = colour(Field::PrimaryColour, &Value::from("#FF8000"))?;
        assert_eq!(normalized.value.rgb(), 0x00FF_8000);
        assert_eq!(normalized.warnings.len(), 1);
        assert_eq!(normalized.warnings[0].kind, WarningKind::Reinterpreted);
        assert_eq!(
            normalized.warnings[0].to_string(),
            "Passed \"#FF8000\" as Style.primary_colour. Converted to 16744448"
        );

        let normalized = colour(Field::PrimaryColour, &Value::from("00ff80"))?;
        assert_eq!(normalized.value.rgb(), 0x0000_FF80);
        assert_eq!(normalized.warnings.len(), 1);

        assert_matches!(
            colour(Field::OutlineColour, &Value::from("#nothex")),
            Err(Error::HexColour { field: Field::OutlineColour, found })
        );
        assert_eq!(found, "#nothex");
        for invalid in ["", "#", "  ", "0x", "-", "FF__00", "_FF", "FF_", "+-FF", "# F F"] {
            assert_matches!(
                colour(Field::OutlineColour, &Value::from(invalid)),
                Err(Error::HexColour { .. })
            );
        }

        Ok(())
    }

    #[test]
    fn loosely_written_hex_colours() -> Result<(), Error> {
        for text in [
            "0xFF0000",
            "0XFF0000",
            " #FF0000",
            "##FF0000",
            "FF_0000",
            "#FF0000 ",
            "\t#0x_FF_00_00\n",
            "+FF0000",
        ] {
            let normalized = colour(Field::PrimaryColour, &Value::from(text))?;
            assert_eq!(normalized.value.rgb(), 0x00FF_0000, "{text:?}");
            assert_eq!(normalized.warnings.len(), 1, "{text:?}");
            assert_eq!(normalized.warnings[0].kind, WarningKind::Reinterpreted);
        }

        let normalized = colour(Field::PrimaryColour, &Value::from("-0x1"))?;
        assert_eq!(normalized.value, Colour::WHITE);
        assert_eq!(normalized.warnings.len(), 2);
        assert_eq!(normalized.warnings[1].kind, WarningKind::OutOfRange);

        Ok(())
    }

    #[test]
    fn oversized_hex_colours_are_masked() -> Result<(), Error> {
        let normalized = colour(Field::BackColour, &Value::from("#1FF0000"))?;
        assert_eq!(normalized.value.rgb(), 0x00FF_0000);
        assert_eq!(normalized.warnings.len(), 2);
        assert_eq!(normalized.warnings[1].kind, WarningKind::OutOfRange);
        Ok(())
    }

    #[test]
    fn in_range_integers_are_clean() -> Result<(), Error> {
        for rgb in [0, 1, 0x0012_3456, i64::from(Colour::MAX)] {
            let normalized = colour(Field::PrimaryColour, &Value::Int(rgb))?;
            assert!(normalized.is_clean());
            assert_eq!(i64::from(normalized.value.rgb()), rgb);
        }
        Ok(())
    }

    #[test]
    fn out_of_range_integers_are_masked() -> Result<(), Error> {
        for rgb in [0x0100_0000, 0x0123_4567, -1, -0x0100_0000, i64::MAX, i64::MIN] {
            let normalized = colour(Field::SecondaryColour, &Value::Int(rgb))?;
            assert_eq!(i64::from(normalized.value.rgb()), rgb & 0x00FF_FFFF);
            assert_eq!(normalized.warnings.len(), 1);
            assert_eq!(normalized.warnings[0].kind, WarningKind::OutOfRange);
        }

        let normalized = colour(Field::SecondaryColour, &Value::Int(0x0100_0001))?;
        assert_eq!(
            normalized.warnings[0].to_string(),
            "colour 16777217 == #1000001 given for Style.secondary_colour, outside [0, 0xFFFFFF]. Using 1 instead."
        );

        let normalized = colour(Field::SecondaryColour, &Value::Int(-1))?;
        assert_eq!(normalized.warnings[0].original, "-1 == #-00001");
        assert_eq!(normalized.warnings[0].corrected, "16777215");

        Ok(())
    }

    #[test]
    fn float_colours() -> Result<(), Error> {
        let normalized = colour(Field::PrimaryColour, &Value::Float(255.9))?;
        assert_eq!(normalized.value.rgb(), 255);
        assert_eq!(normalized.warnings.len(), 1);

        assert_matches!(
            colour(Field::PrimaryColour, &Value::Float(f64::NAN)),
            Err(Error::Colour { field: Field::PrimaryColour, .. })
        );
        assert_matches!(
            colour(Field::PrimaryColour, &Value::Float(f64::INFINITY)),
            Err(Error::Colour { .. })
        );

        Ok(())
    }

    #[test]
    fn font_sizes() -> Result<(), Error> {
        let normalized = font_size(&Value::Int(20))?;
        assert_eq!(normalized.value, 20);
        assert!(normalized.is_clean());

        let normalized = font_size(&Value::Float(20.7))?;
        assert_eq!(normalized.value, 20);
        assert_eq!(
            normalized.warnings[0].to_string(),
            "Passed 20.7 as Style.font_size. Converted to 20"
        );

        let normalized = font_size(&Value::from(" 18 "))?;
        assert_eq!(normalized.value, 18);
        assert_eq!(normalized.warnings.len(), 1);

        assert_matches!(font_size(&Value::from("large")), Err(Error::FontSize(_)));
        assert_matches!(font_size(&Value::Float(f64::NAN)), Err(Error::FontSize(_)));
        assert_matches!(font_size(&Value::Int(i64::MAX)), Err(Error::FontSize(_)));

        Ok(())
    }

    #[test]
    fn flags() {
        let normalized = flag(Field::Bold, &Value::Bool(true));
        assert!(normalized.value);
        assert!(normalized.is_clean());

        for (input, expected) in [
            (Value::Int(1), true),
            (Value::Int(-1), true),
            (Value::Int(0), false),
            (Value::Float(0.0), false),
            (Value::Float(0.5), true),
            (Value::from(""), false),
            (Value::from("0"), true),
        ] {
            let normalized = flag(Field::Italic, &input);
            assert_eq!(normalized.value, expected, "{input}");
            assert_eq!(normalized.warnings.len(), 1);
        }
    }

    #[test]
    fn widths() {
        for int in 0..=4 {
            assert_matches!(width(Field::Outline, &Value::Int(int)), Ok(w));
            assert_eq!(i64::from(w), int);
        }

        for value in [Value::Int(5), Value::Int(-1), Value::Float(1.0), Value::from("1")] {
            assert_matches!(
                width(Field::Shadow, &value),
                Err(Error::OutOfRange { field: Field::Shadow, .. })
            );
        }
    }

    #[test]
    fn integers() {
        assert_matches!(integer(Field::MarginL, &Value::Int(-5)), Ok(-5));
        assert_matches!(
            integer(Field::MarginL, &Value::Float(1.5)),
            Err(Error::NotInteger { field: Field::MarginL, .. })
        );
        assert_matches!(
            integer(Field::Encoding, &Value::Int(i64::from(i32::MAX) + 1)),
            Err(Error::NotInteger { .. })
        );
    }

    #[test]
    fn texts() {
        assert_matches!(text(Field::Name, Value::from("Sign")), Ok(name));
        assert_eq!(name, "Sign");
        assert_matches!(
            text(Field::FontName, Value::Int(3)),
            Err(Error::NotText { field: Field::FontName, found: Value::Int(3) })
        );
    }

    #[test]
    fn field_order() {
        assert_eq!(Field::ALL.len(), 20);
        assert_eq!(Field::ALL[2].format_name(), "Fontsize");
        assert_eq!(Field::ALL[14], Field::Alignment);
        assert!(Field::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn deserialize_values() -> Result<(), serde_json::Error> {
        let values: Vec<Value> = serde_json::from_str(r#"[true, 3, 2.5, "text"]"#)?;
        assert_eq!(
            values,
            vec![
                Value::Bool(true),
                Value::Int(3),
                Value::Float(2.5),
                Value::Text("text".to_owned())
            ]
        );
        Ok(())
    }
}
