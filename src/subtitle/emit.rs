//! Functions for writing styles in the SSA `[V4 Styles]` format.
//!
//! The format is positional: the `Style:` line carries no keys, so values
//! must be written in exactly the order of the `Format:` line. Both are
//! driven by [`Field::ALL`].

use std::fmt;

use super::style::Style;
use super::value::Field;
use super::{Alignment, BorderStyle, Colour};

pub const SECTION_HEADER: &str = "[V4 Styles]";
pub const FORMAT_PREFIX: &str = "Format: ";
pub const STYLE_PREFIX: &str = "Style: ";
pub const SEPARATOR: &str = ", ";

pub trait EmitValue {
    fn emit_value<W>(&self, sink: &mut W) -> Result<(), fmt::Error>
    where
        W: fmt::Write;
}

/// The section header together with its `Format:` line, for use with
/// `Display`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Header;

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        header(f)
    }
}

/// Writes `[V4 Styles]` and the `Format:` line naming all twenty fields.
/// No newline is written after the `Format:` line.
///
/// # Errors
/// Errors only if the sink does.
pub fn header<W>(sink: &mut W) -> Result<(), fmt::Error>
where
    W: fmt::Write,
{
    sink.write_str(SECTION_HEADER)?;
    sink.write_char('\n')?;
    sink.write_str(FORMAT_PREFIX)?;

    for (i, field) in Field::ALL.iter().enumerate() {
        if i > 0 {
            sink.write_str(SEPARATOR)?;
        }
        sink.write_str(field.format_name())?;
    }

    Ok(())
}

/// Writes the `Style:` line for `style`, without a trailing newline.
///
/// # Errors
/// Errors only if the sink does.
pub fn style_line<W>(sink: &mut W, style: &Style) -> Result<(), fmt::Error>
where
    W: fmt::Write,
{
    sink.write_str(STYLE_PREFIX)?;

    for (i, field) in Field::ALL.iter().enumerate() {
        if i > 0 {
            sink.write_str(SEPARATOR)?;
        }
        field_value(sink, style, *field)?;
    }

    Ok(())
}

fn field_value<W>(sink: &mut W, style: &Style, field: Field) -> Result<(), fmt::Error>
where
    W: fmt::Write,
{
    match field {
        Field::Name => style.name().emit_value(sink),
        Field::FontName => style.font_name().emit_value(sink),
        Field::FontSize => style.font_size().emit_value(sink),
        Field::PrimaryColour => style.primary_colour().emit_value(sink),
        Field::SecondaryColour => style.secondary_colour().emit_value(sink),
        Field::OutlineColour => style.outline_colour().emit_value(sink),
        Field::BackColour => style.back_colour().emit_value(sink),
        Field::Bold => style.bold().emit_value(sink),
        Field::Italic => style.italic().emit_value(sink),
        Field::Underline => style.underline().emit_value(sink),
        Field::Strikethrough => style.strikethrough().emit_value(sink),
        Field::BorderStyle => style.border_style().emit_value(sink),
        Field::Outline => style.outline().emit_value(sink),
        Field::Shadow => style.shadow().emit_value(sink),
        Field::Alignment => style.alignment().emit_value(sink),
        Field::MarginL => style.margins().left.emit_value(sink),
        Field::MarginR => style.margins().right.emit_value(sink),
        Field::MarginV => style.margins().vertical.emit_value(sink),
        Field::AlphaLevel => style.alpha_level().emit_value(sink),
        Field::Encoding => style.encoding().emit_value(sink),
    }
}

impl EmitValue for &str {
    fn emit_value<W>(&self, sink: &mut W) -> Result<(), fmt::Error>
    where
        W: fmt::Write,
    {
        sink.write_str(self)
    }
}

/// SSA flags are `-1` for true and `0` for false.
impl EmitValue for bool {
    fn emit_value<W>(&self, sink: &mut W) -> Result<(), fmt::Error>
    where
        W: fmt::Write,
    {
        (-i32::from(*self)).emit_value(sink)
    }
}

impl EmitValue for u8 {
    fn emit_value<W>(&self, sink: &mut W) -> Result<(), fmt::Error>
    where
        W: fmt::Write,
    {
        write!(sink, "{}", *self)
    }
}

impl EmitValue for i32 {
    fn emit_value<W>(&self, sink: &mut W) -> Result<(), fmt::Error>
    where
        W: fmt::Write,
    {
        write!(sink, "{}", *self)
    }
}

impl EmitValue for u32 {
    fn emit_value<W>(&self, sink: &mut W) -> Result<(), fmt::Error>
    where
        W: fmt::Write,
    {
        write!(sink, "{}", *self)
    }
}

/// Colours are written as decimal `0xBBGGRR`.
impl EmitValue for Colour {
    fn emit_value<W>(&self, sink: &mut W) -> Result<(), fmt::Error>
    where
        W: fmt::Write,
    {
        self.to_bgr().emit_value(sink)
    }
}

impl EmitValue for BorderStyle {
    fn emit_value<W>(&self, sink: &mut W) -> Result<(), fmt::Error>
    where
        W: fmt::Write,
    {
        self.code().emit_value(sink)
    }
}

impl EmitValue for Alignment {
    fn emit_value<W>(&self, sink: &mut W) -> Result<(), fmt::Error>
    where
        W: fmt::Write,
    {
        self.pack().emit_value(sink)
    }
}
