use std::fmt;

use serde::Deserialize;

use super::emit;
use super::error::Error;
use super::value::{self, Field, Normalized, Value, Warning};
use super::{Alignment, BorderStyle, Colour, Margins};

/// A named set of font, colour and layout properties, as stored in the
/// `[V4 Styles]` section of an SSA file.
///
/// A `Style` is always valid: it can only be obtained through
/// [`StyleOptions::build`] (or [`Style::default`]), which checks every field.
/// There are no setters. To change a style, go through [`Style::to_options`]
/// and build it again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Style {
    name: String,
    font_name: String,
    font_size: i32,

    primary_colour: Colour,
    secondary_colour: Colour,
    outline_colour: Colour,
    back_colour: Colour,

    bold: bool,
    italic: bool,
    underline: bool,
    strikethrough: bool,

    border_style: BorderStyle,
    outline: u8,
    shadow: u8,

    alignment: Alignment,
    margins: Margins,

    alpha_level: i32,
    encoding: i32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            name: "Default".to_owned(),
            font_name: "Arial".to_owned(),
            font_size: 14,
            primary_colour: Colour::WHITE,
            secondary_colour: Colour::WHITE,
            outline_colour: Colour::WHITE,
            back_colour: Colour::BLACK,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            border_style: BorderStyle::Outline,
            outline: 1,
            shadow: 1,
            alignment: Alignment::default(),
            margins: Margins::default(),
            alpha_level: 0,
            encoding: 0,
        }
    }
}

impl Style {
    /// Start building a style. Every field not set on the returned options
    /// takes its default.
    pub fn builder() -> StyleOptions {
        StyleOptions::default()
    }

    /// Options that would build this exact style again.
    pub fn to_options(&self) -> StyleOptions {
        StyleOptions {
            name: Some(self.name.clone().into()),
            font_name: Some(self.font_name.clone().into()),
            font_size: Some(self.font_size.into()),
            primary_colour: Some(self.primary_colour.into()),
            secondary_colour: Some(self.secondary_colour.into()),
            outline_colour: Some(self.outline_colour.into()),
            back_colour: Some(self.back_colour.into()),
            bold: Some(self.bold.into()),
            italic: Some(self.italic.into()),
            underline: Some(self.underline.into()),
            strikethrough: Some(self.strikethrough.into()),
            border_style: Some(self.border_style.into()),
            outline: Some(self.outline.into()),
            shadow: Some(self.shadow.into()),
            alignment: Some(self.alignment.into()),
            margin_l: Some(self.margins.left.into()),
            margin_r: Some(self.margins.right.into()),
            margin_v: Some(self.margins.vertical.into()),
            alpha_level: Some(self.alpha_level.into()),
            encoding: Some(self.encoding.into()),
        }
    }

    /// The `[V4 Styles]` section header, including the `Format:` line.
    /// Does not end in a newline.
    #[must_use]
    pub fn header() -> String {
        emit::Header.to_string()
    }

    /// Parse a `Style:` line, as produced by this type's `Display`
    /// implementation.
    ///
    /// # Errors
    /// See [`super::parse::style_line`].
    pub fn load(line: &str) -> Result<Normalized<Self>, Error> {
        super::parse::style_line(line)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    #[must_use]
    pub const fn font_size(&self) -> i32 {
        self.font_size
    }

    #[must_use]
    pub const fn primary_colour(&self) -> Colour {
        self.primary_colour
    }

    #[must_use]
    pub const fn secondary_colour(&self) -> Colour {
        self.secondary_colour
    }

    #[must_use]
    pub const fn outline_colour(&self) -> Colour {
        self.outline_colour
    }

    #[must_use]
    pub const fn back_colour(&self) -> Colour {
        self.back_colour
    }

    #[must_use]
    pub const fn bold(&self) -> bool {
        self.bold
    }

    #[must_use]
    pub const fn italic(&self) -> bool {
        self.italic
    }

    #[must_use]
    pub const fn underline(&self) -> bool {
        self.underline
    }

    #[must_use]
    pub const fn strikethrough(&self) -> bool {
        self.strikethrough
    }

    #[must_use]
    pub const fn border_style(&self) -> BorderStyle {
        self.border_style
    }

    /// Width of the outline in pixels, if the border style is
    /// [`BorderStyle::Outline`].
    #[must_use]
    pub const fn outline(&self) -> u8 {
        self.outline
    }

    /// Depth of the drop shadow in pixels, if the border style is
    /// [`BorderStyle::Outline`]. SSA forces an outline of 1 pixel if a shadow
    /// is used without one.
    #[must_use]
    pub const fn shadow(&self) -> u8 {
        self.shadow
    }

    #[must_use]
    pub const fn alignment(&self) -> Alignment {
        self.alignment
    }

    #[must_use]
    pub const fn margins(&self) -> Margins {
        self.margins
    }

    /// Transparency of the text. Unused by SSA, but kept as given.
    #[must_use]
    pub const fn alpha_level(&self) -> i32 {
        self.alpha_level
    }

    /// Windows font charset number. Usually 0 for Western/ANSI.
    #[must_use]
    pub const fn encoding(&self) -> i32 {
        self.encoding
    }
}

impl fmt::Display for Style {
    /// Writes the `Style:` line for this style, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        emit::style_line(f, self)
    }
}

/// Unvalidated input for a [`Style`]. Every field left as `None` takes the
/// value of [`Style::default`].
///
/// The fields can be set directly, through the builder methods of the same
/// name, or by deserializing from any serde format.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOptions {
    pub name: Option<Value>,
    pub font_name: Option<Value>,
    pub font_size: Option<Value>,

    pub primary_colour: Option<Value>,
    pub secondary_colour: Option<Value>,
    pub outline_colour: Option<Value>,
    pub back_colour: Option<Value>,

    pub bold: Option<Value>,
    pub italic: Option<Value>,
    pub underline: Option<Value>,
    pub strikethrough: Option<Value>,

    pub border_style: Option<Value>,
    pub outline: Option<Value>,
    pub shadow: Option<Value>,
    pub alignment: Option<Value>,

    pub margin_l: Option<Value>,
    pub margin_r: Option<Value>,
    pub margin_v: Option<Value>,

    pub alpha_level: Option<Value>,
    pub encoding: Option<Value>,
}

macro_rules! setters {
    ($($field:ident),* $(,)?) => {
        $(
            pub fn $field<V: Into<Value>>(mut self, value: V) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

impl StyleOptions {
    setters!(
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
    );

    /// Validates and normalizes all fields, in positional order. Inputs that
    /// can be repaired produce warnings, which are also logged; anything else
    /// fails the whole build.
    ///
    /// # Errors
    /// Returns the first field error encountered. Colours are checked one
    /// after the other, so only the first bad colour is reported.
    pub fn build(self) -> Result<Normalized<Style>, Error> {
        let defaults = Style::default();
        let mut warnings: Vec<Warning> = vec![];

        let name = value::text(Field::Name, or_default(self.name, defaults.name))?;
        let font_name = value::text(
            Field::FontName,
            or_default(self.font_name, defaults.font_name),
        )?;
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let font_size = value::font_size(&or_default(self.font_size, defaults.font_size))?
            .drain_into(&mut warnings);

        let mut colour = |field: Field, input: Option<Value>, default: Colour| {
            value::colour(field, &or_default(input, default))
                .map(|normalized| normalized.drain_into(&mut warnings))
        };
        let primary_colour = colour(
            Field::PrimaryColour,
            self.primary_colour,
            defaults.primary_colour,
        )?;
        let secondary_colour = colour(
            Field::SecondaryColour,
            self.secondary_colour,
            defaults.secondary_colour,
        )?;
        let outline_colour = colour(
            Field::OutlineColour,
            self.outline_colour,
            defaults.outline_colour,
        )?;
        let back_colour = colour(Field::BackColour, self.back_colour, defaults.back_colour)?;

        let mut flag = |field: Field, input: Option<Value>, default: bool| {
            value::flag(field, &or_default(input, default)).drain_into(&mut warnings)
        };
        let bold = flag(Field::Bold, self.bold, defaults.bold);
        let italic = flag(Field::Italic, self.italic, defaults.italic);
        let underline = flag(Field::Underline, self.underline, defaults.underline);
        let strikethrough = flag(
            Field::Strikethrough,
            self.strikethrough,
            defaults.strikethrough,
        );

        let border_style =
            value::border_style(&or_default(self.border_style, defaults.border_style))?;
        let outline = value::width(Field::Outline, &or_default(self.outline, defaults.outline))?;
        let shadow = value::width(Field::Shadow, &or_default(self.shadow, defaults.shadow))?;
        let alignment = value::alignment(&or_default(self.alignment, defaults.alignment))?;

        let margins = Margins {
            left: value::integer(
                Field::MarginL,
                &or_default(self.margin_l, defaults.margins.left),
            )?,
            right: value::integer(
                Field::MarginR,
                &or_default(self.margin_r, defaults.margins.right),
            )?,
            vertical: value::integer(
                Field::MarginV,
                &or_default(self.margin_v, defaults.margins.vertical),
            )?,
        };
        let alpha_level = value::integer(
            Field::AlphaLevel,
            &or_default(self.alpha_level, defaults.alpha_level),
        )?;
        let encoding = value::integer(
            Field::Encoding,
            &or_default(self.encoding, defaults.encoding),
        )?;

        let style = Style {
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
            margins,
            alpha_level,
            encoding,
        };

        for warning in &warnings {
            warning.log();
        }
        tracing::trace!(
            target: "ssa_style",
            name = style.name(),
            warnings = warnings.len(),
            "built style"
        );

        Ok(Normalized {
            value: style,
            warnings,
        })
    }
}

fn or_default<D: Into<Value>>(input: Option<Value>, default: D) -> Value {
    input.unwrap_or_else(|| default.into())
}
