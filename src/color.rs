// Packed RGBA colors plus the two color operations every other module leans on:
// the caption-text contrast test and per-channel linear blending.

use serde::{Serialize, Serializer};
use std::fmt;

/// 32-bit RGBA color. Red is in the least significant byte, alpha in the most
/// significant one, so the RGB part has the same layout as a Win32 `COLORREF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba(0x0000_0000);
    pub const OPAQUE_BLACK: Rgba = Rgba(0xFF00_0000);
    pub const OPAQUE_WHITE: Rgba = Rgba(0xFFFF_FFFF);

    const ALPHA_MASK: u32 = 0xFF00_0000;

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba((r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24))
    }

    /// Convert from the `0xAARRGGBB` layout used by DWM and its registry values.
    pub const fn from_argb(argb: u32) -> Self {
        Rgba::new(
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
            (argb >> 24) as u8,
        )
    }

    pub const fn r(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub const fn b(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Same color with alpha forced to 0xFF.
    pub const fn opaque(self) -> Self {
        Rgba(self.0 | Self::ALPHA_MASK)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Rgba((self.0 & !Self::ALPHA_MASK) | ((a as u32) << 24))
    }

    /// Contrast test used for caption text: a background is dark when
    /// `2R + 5G + B <= 1024`. Text on a dark background is white.
    pub fn is_dark(self) -> bool {
        let weighted = 2 * self.r() as u32 + 5 * self.g() as u32 + self.b() as u32;
        weighted <= 1024
    }

    /// Linear blend `self * (1 - f) + other * f`, applied to every channel
    /// including alpha and truncated toward zero.
    pub fn blend(self, other: Rgba, f: f32) -> Rgba {
        let mix = |a: u8, b: u8| -> u8 { (a as f32 * (1.0 - f) + b as f32 * f) as u8 };
        Rgba::new(
            mix(self.r(), other.r()),
            mix(self.g(), other.g()),
            mix(self.b(), other.b()),
            mix(self.a(), other.a()),
        )
    }
}

impl From<u32> for Rgba {
    fn from(value: u32) -> Self {
        Rgba(value)
    }
}

impl From<Rgba> for u32 {
    fn from(value: Rgba) -> Self {
        value.0
    }
}

/// `#RRGGBBAA`
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
