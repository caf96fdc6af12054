//! This module contains the types making up an SSA style record,
//! the validation that keeps them in a legal state, and the logic
//! for encoding them into `[V4 Styles]` lines.

pub mod emit;
pub mod error;
pub mod parse;
pub mod style;
pub mod value;

pub use error::{Error, ErrorKind};
pub use style::{Style, StyleOptions};
pub use value::{Field, Normalized, Value, Warning, WarningKind};

/// Style-specific left, right, and vertical margins in pixels,
/// corresponding to SSA `MarginL` etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Margins {
    /// Distance from the left edge of the screen.
    pub left: i32,

    /// Distance from the right edge of the screen.
    pub right: i32,

    /// Distance from the bottom edge for subtitles, or from the top edge
    /// for toptitles. Ignored for midtitles, which are vertically centered.
    pub vertical: i32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 10,
            right: 10,
            vertical: 10,
        }
    }
}

/// A 24-bit colour, stored as `0xRRGGBB`.
///
/// SSA itself wants colours as `0xBBGGRR`; the conversion only happens
/// when emitting (see [`Colour::to_bgr`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour(u32);

impl Colour {
    /// The largest representable colour, `#FFFFFF`.
    pub const MAX: u32 = 0x00FF_FFFF;

    pub const WHITE: Self = Self(Self::MAX);
    pub const BLACK: Self = Self(0);

    /// Creates a colour from a packed `0xRRGGBB` value. Returns `None` if
    /// the value has bits set above the lower 24.
    #[must_use]
    pub const fn from_rgb(rgb: u32) -> Option<Self> {
        if rgb > Self::MAX {
            None
        } else {
            Some(Self(rgb))
        }
    }

    /// Creates a colour from a packed `0xBBGGRR` value, as found in SSA
    /// style lines.
    #[must_use]
    pub const fn from_bgr(bgr: u32) -> Option<Self> {
        match Self::from_rgb(bgr) {
            Some(colour) => Some(Self(reformat_colour(colour.0))),
            None => None,
        }
    }

    /// Creates a colour from the lower 24 bits of `packed`, discarding the rest.
    #[must_use]
    pub const fn masked(packed: u32) -> Self {
        Self(packed & Self::MAX)
    }

    #[must_use]
    pub const fn from_components(red: u8, green: u8, blue: u8) -> Self {
        Self((red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// The packed `0xRRGGBB` value.
    #[must_use]
    pub const fn rgb(self) -> u32 {
        self.0
    }

    /// The packed `0xBBGGRR` value SSA expects.
    #[must_use]
    pub const fn to_bgr(self) -> u32 {
        reformat_colour(self.0)
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        ((self.0 & 0x00FF_0000) >> 16) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        ((self.0 & 0x0000_FF00) >> 8) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        (self.0 & 0x0000_00FF) as u8
    }
}

/// Swaps the outer two bytes of a 24-bit colour, converting `0xRRGGBB` to
/// `0xBBGGRR` and back. Applying it twice gives the original value.
/// Bits above the lower 24 are discarded.
#[must_use]
pub const fn reformat_colour(packed: u32) -> u32 {
    let outer_high = (packed & 0x00FF_0000) >> 16;
    let middle = (packed & 0x0000_FF00) >> 8;
    let outer_low = packed & 0x0000_00FF;

    (outer_low << 16) | (middle << 8) | outer_high
}

/// Where on the screen text is placed, as a combination of a horizontal
/// and a vertical selector. SSA packs both into one integer by OR-ing
/// them together, see [`Alignment::pack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    #[must_use]
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Checks whether `packed` is one of the nine combinations of exactly one
    /// horizontal and one vertical value, and returns that combination.
    ///
    /// # Errors
    /// Returns [`Error::Alignment`] if no combination produces `packed`.
    pub fn validate(packed: i64) -> Result<Self, Error> {
        for horizontal in HorizontalAlignment::ALL {
            for vertical in VerticalAlignment::ALL {
                let candidate = Self::new(horizontal, vertical);
                if i64::from(candidate.pack()) == packed {
                    return Ok(candidate);
                }
            }
        }

        Err(Error::Alignment(Value::Int(packed)))
    }

    /// The packed integer used in the `Alignment` column.
    #[must_use]
    pub const fn pack(self) -> i32 {
        self.horizontal as i32 | self.vertical as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    Left = 0b0001,
    #[default]
    Center = 0b0010,
    Right = 0b0011,
}

impl HorizontalAlignment {
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];
}

/// SSA v4 vertical placement. Note that these differ from the `\an`
/// numbering of ASS: toptitles add 4, midtitles add 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    #[default]
    Bottom = 0b0000,
    Top = 0b0100,
    Middle = 0b1000,
}

impl VerticalAlignment {
    pub const ALL: [Self; 3] = [Self::Bottom, Self::Middle, Self::Top];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    /// Outline plus drop shadow. The widths are given by the `Outline` and
    /// `Shadow` columns.
    #[default]
    Outline = 1,

    /// An opaque box behind the text.
    OpaqueBox = 3,
}

impl BorderStyle {
    /// The integer written to the `BorderStyle` column.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i64> for BorderStyle {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            x if x == i64::from(Self::Outline.code()) => Ok(Self::Outline),
            x if x == i64::from(Self::OpaqueBox.code()) => Ok(Self::OpaqueBox),
            _ => Err(Error::BorderStyle(Value::Int(value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches2::assert_matches;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn reformat_is_self_inverse() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(0x55A);

        for _ in 0..10_000 {
            let rgb = rng.random_range(0..=Colour::MAX);
            assert_eq!(reformat_colour(reformat_colour(rgb)), rgb);
        }

        for rgb in [0, Colour::MAX, 0x0012_3456, 0x00FF_0000, 0x0000_00FF] {
            assert_eq!(reformat_colour(reformat_colour(rgb)), rgb);
        }
    }

    #[test]
    fn reformat_swaps_red_and_blue() {
        assert_eq!(reformat_colour(0x0012_3456), 0x0056_3412);
        assert_eq!(reformat_colour(0x00FF_0000), 0x0000_00FF);
        assert_eq!(reformat_colour(0x0000_FF00), 0x0000_FF00);
        assert_eq!(reformat_colour(Colour::MAX), Colour::MAX);
    }

    #[test]
    fn colour_components() {
        let colour = Colour::from_components(0x12, 0x34, 0x56);
        assert_eq!(colour.rgb(), 0x0012_3456);
        assert_eq!(colour.red(), 0x12);
        assert_eq!(colour.green(), 0x34);
        assert_eq!(colour.blue(), 0x56);
        assert_eq!(colour.to_bgr(), 0x0056_3412);

        assert_matches!(Colour::from_bgr(0x0056_3412), Some(back));
        assert_eq!(back, colour);
        assert_matches!(Colour::from_rgb(0x0100_0000), None);
    }

    #[test]
    fn masking_keeps_lower_24_bits() {
        assert_eq!(Colour::masked(0x0012_3456).rgb(), 0x0012_3456);
        assert_eq!(Colour::masked(0xAB12_3456).rgb(), 0x0012_3456);
        assert_eq!(Colour::masked(u32::MAX), Colour::WHITE);
        assert_eq!(Colour::masked(0x0100_0000), Colour::BLACK);
    }

    #[test]
    fn alignment_accepts_exactly_nine_values() {
        let legal: Vec<i64> = (-64..64)
            .filter(|packed| Alignment::validate(*packed).is_ok())
            .collect();
        assert_eq!(legal, vec![1, 2, 3, 5, 6, 7, 9, 10, 11]);

        for packed in [0, 4, 8, 12, 13, 15, -1, i64::MAX] {
            assert_matches!(Alignment::validate(packed), Err(Error::Alignment(Value::Int(found))));
            assert_eq!(found, packed);
        }
    }

    #[test]
    fn alignment_pack() {
        assert_eq!(Alignment::default().pack(), 2);
        assert_eq!(
            Alignment::new(HorizontalAlignment::Left, VerticalAlignment::Top).pack(),
            5
        );
        assert_eq!(
            Alignment::new(HorizontalAlignment::Right, VerticalAlignment::Middle).pack(),
            11
        );

        assert_matches!(Alignment::validate(9), Ok(alignment));
        assert_eq!(alignment.horizontal, HorizontalAlignment::Left);
        assert_eq!(alignment.vertical, VerticalAlignment::Middle);
    }

    #[test]
    fn border_style_codes() {
        assert_matches!(BorderStyle::try_from(1_i64), Ok(BorderStyle::Outline));
        assert_matches!(BorderStyle::try_from(3_i64), Ok(BorderStyle::OpaqueBox));

        for code in [0_i64, 2, 4, -1] {
            assert_matches!(BorderStyle::try_from(code), Err(error));
            assert_eq!(error.kind(), ErrorKind::Value);
        }
    }
}
