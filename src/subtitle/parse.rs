//! Reading styles back from `Style:` lines.
//!
//! This undoes the encodings of [`super::emit`]: colours are swapped back
//! from `0xBBGGRR`, and `-1`/`0` flags become booleans. The resulting values
//! go through the same validation as any other input.

use super::emit::STYLE_PREFIX;
use super::error::Error;
use super::style::{Style, StyleOptions};
use super::value::{self, Field, Normalized, Value, Warning};
use super::Colour;

/// Parse one `Style:` line.
///
/// Values are split on commas and trimmed, so text fields that contain a
/// comma or begin or end with whitespace do not survive a round trip.
///
/// # Errors
/// Errors if the line does not start with `Style:`, does not have exactly
/// twenty fields, or if any field fails validation.
pub fn style_line(line: &str) -> Result<Normalized<Style>, Error> {
    let line = line.trim();
    let Some(fields_str) = line.strip_prefix(STYLE_PREFIX.trim_end()) else {
        return Err(Error::NotAStyleLine(line.to_owned()));
    };

    let fields: Vec<&str> = fields_str.split(',').map(str::trim).collect();
    let &[
        name,
        font_name,
        font_size,
        primary_colour,
        secondary_colour,
        outline_colour,
        back_colour,
        bold,
        italic,
        underline,
        strikethrough,
        border_style,
        outline,
        shadow,
        alignment,
        margin_l,
        margin_r,
        margin_v,
        alpha_level,
        encoding,
    ] = fields.as_slice()
    else {
        return Err(Error::FieldCount(fields.len()));
    };

    let mut warnings: Vec<Warning> = vec![];
    let mut colour = |field: Field, raw: &str| {
        value::colour(field, &number(raw))
            .map(|normalized| Value::from(unswap(normalized.drain_into(&mut warnings))))
    };

    let options = StyleOptions {
        name: Some(name.into()),
        font_name: Some(font_name.into()),
        font_size: Some(number(font_size)),
        primary_colour: Some(colour(Field::PrimaryColour, primary_colour)?),
        secondary_colour: Some(colour(Field::SecondaryColour, secondary_colour)?),
        outline_colour: Some(colour(Field::OutlineColour, outline_colour)?),
        back_colour: Some(colour(Field::BackColour, back_colour)?),
        bold: Some(flag(bold)),
        italic: Some(flag(italic)),
        underline: Some(flag(underline)),
        strikethrough: Some(flag(strikethrough)),
        border_style: Some(number(border_style)),
        outline: Some(number(outline)),
        shadow: Some(number(shadow)),
        alignment: Some(number(alignment)),
        margin_l: Some(number(margin_l)),
        margin_r: Some(number(margin_r)),
        margin_v: Some(number(margin_v)),
        alpha_level: Some(number(alpha_level)),
        encoding: Some(number(encoding)),
    };

    let mut built = options.build()?;
    warnings.append(&mut built.warnings);

    Ok(Normalized {
        value: built.value,
        warnings,
    })
}

/// Integers become [`Value::Int`]; anything else is kept as text, so that
/// validation can report it against the right field.
fn number(raw: &str) -> Value {
    raw.parse::<i64>().map_or_else(|_| raw.into(), Value::Int)
}

fn flag(raw: &str) -> Value {
    match raw {
        "-1" => Value::Bool(true),
        "0" => Value::Bool(false),
        _ => number(raw),
    }
}

/// The emitted value was `0xBBGGRR`; swapping again gives back `0xRRGGBB`.
fn unswap(bgr: Colour) -> Colour {
    Colour::masked(bgr.to_bgr())
}
