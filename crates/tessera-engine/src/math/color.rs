use core::fmt;

use super::finite::require_finite;
use super::{NumberError, Proportion};

const E: Proportion = Proportion::EMPTY;
const F: Proportion = Proportion::FULL;

/// Straight-alpha RGBA color with [`Proportion`] channels.
///
/// Values are immutable. [`Color::rgba`] hands back the shared constant for
/// transparent, black and white instead of building an equal value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    red: Proportion,
    green: Proportion,
    blue: Proportion,
    alpha: Proportion,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_channels(E, E, E, E);
    pub const BLACK: Color = Color::from_channels(E, E, E, F);
    pub const WHITE: Color = Color::from_channels(F, F, F, F);
    pub const RED: Color = Color::from_channels(F, E, E, F);
    pub const GREEN: Color = Color::from_channels(E, F, E, F);
    pub const BLUE: Color = Color::from_channels(E, E, F, F);
    pub const CYAN: Color = Color::from_channels(E, F, F, F);
    pub const MAGENTA: Color = Color::from_channels(F, E, F, F);
    pub const YELLOW: Color = Color::from_channels(F, F, E, F);

    /// Opaque 80% gray, the demo's background.
    pub const GRAY_80: Color = {
        let g = Proportion::from_percent_unchecked(80.0);
        Color::from_channels(g, g, g, F)
    };

    const fn from_channels(red: Proportion, green: Proportion, blue: Proportion, alpha: Proportion) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Creates a color from channel proportions.
    pub fn rgba(red: Proportion, green: Proportion, blue: Proportion, alpha: Proportion) -> Self {
        let rgb_empty = red.is_empty() && green.is_empty() && blue.is_empty();

        if rgb_empty && alpha.is_empty() {
            return Self::TRANSPARENT;
        }
        if rgb_empty && alpha.is_full() {
            return Self::BLACK;
        }
        if red.is_full() && green.is_full() && blue.is_full() && alpha.is_full() {
            return Self::WHITE;
        }
        Self::from_channels(red, green, blue, alpha)
    }

    /// Opaque color from channel proportions.
    #[inline]
    pub fn rgb(red: Proportion, green: Proportion, blue: Proportion) -> Self {
        Self::rgba(red, green, blue, Proportion::FULL)
    }

    /// Creates a color from channel percentages, clamping each into `0..=100`.
    ///
    /// Fails with [`NumberError::InvalidNumber`] naming the first non-finite
    /// channel.
    pub fn rgba_percent(red: f64, green: f64, blue: f64, alpha: f64) -> Result<Self, NumberError> {
        let red = require_finite(red, "red percent")?;
        let green = require_finite(green, "green percent")?;
        let blue = require_finite(blue, "blue percent")?;
        let alpha = require_finite(alpha, "alpha percent")?;

        Ok(Self::rgba(
            Proportion::from_finite(red),
            Proportion::from_finite(green),
            Proportion::from_finite(blue),
            Proportion::from_finite(alpha),
        ))
    }

    /// [`rgba_percent`](Self::rgba_percent) with alpha at 100%.
    #[inline]
    pub fn rgb_percent(red: f64, green: f64, blue: f64) -> Result<Self, NumberError> {
        Self::rgba_percent(red, green, blue, 100.0)
    }

    #[inline]
    pub const fn red(self) -> Proportion {
        self.red
    }

    #[inline]
    pub const fn green(self) -> Proportion {
        self.green
    }

    #[inline]
    pub const fn blue(self) -> Proportion {
        self.blue
    }

    #[inline]
    pub const fn alpha(self) -> Proportion {
        self.alpha
    }

    /// Same color with the alpha channel replaced.
    #[inline]
    pub fn with_alpha(self, alpha: Proportion) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Packs as `0xAABBGGRR`.
    ///
    /// On little-endian targets the in-memory byte order is R, G, B, A, which
    /// is what normalized `u8x4` vertex attributes expect.
    pub fn to_abgr8888(self) -> u32 {
        (u32::from(self.alpha.to_u8()) << 24)
            | (u32::from(self.blue.to_u8()) << 16)
            | (u32::from(self.green.to_u8()) << 8)
            | u32::from(self.red.to_u8())
    }

    /// Packs as `0xRRGGBBAA`, the layout clear-color APIs take.
    pub fn to_rgba8888(self) -> u32 {
        (u32::from(self.red.to_u8()) << 24)
            | (u32::from(self.green.to_u8()) << 16)
            | (u32::from(self.blue.to_u8()) << 8)
            | u32::from(self.alpha.to_u8())
    }

    /// Channels as `[r, g, b, a]` rates in `[0, 1]`.
    #[inline]
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [self.red.ratef(), self.green.ratef(), self.blue.ratef(), self.alpha.ratef()]
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.red, self.green, self.blue, self.alpha)
    }
}
