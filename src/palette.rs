use serde::Serialize;

use crate::color::Rgba;
use crate::hsv::{darker_shade, from_hsv, lighter_shade, to_hsv, Hsv};

/// Accent color and its six shades, as exposed by `UISettings` on Windows 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccentPalette {
    /// Base accent color
    pub accent: Rgba,
    pub darkest: Rgba,
    pub darker: Rgba,
    pub dark: Rgba,
    pub light: Rgba,
    pub lighter: Rgba,
    pub lightest: Rgba,
}

impl AccentPalette {
    /// Derive the six shades from a single base color. `accent` is the base
    /// itself; every shade keeps the base alpha.
    pub fn synthesize(base: Rgba) -> Self {
        let base_hsv = to_hsv(base);
        let alpha = base.a();

        let ramp = |step: fn(Hsv, Hsv) -> Hsv| -> [Rgba; 3] {
            let first = step(base_hsv, base_hsv);
            let second = step(first, base_hsv);
            let third = step(second, base_hsv);
            [first, second, third].map(|hsv| from_hsv(hsv, alpha))
        };

        let [light, lighter, lightest] = ramp(lighter_shade);
        let [dark, darker, darkest] = ramp(darker_shade);

        Self {
            accent: base,
            darkest,
            darker,
            dark,
            light,
            lighter,
            lightest,
        }
    }

    /// Palette where every shade is the same color.
    pub fn flat(color: Rgba) -> Self {
        Self {
            accent: color,
            darkest: color,
            darker: color,
            dark: color,
            light: color,
            lighter: color,
            lightest: color,
        }
    }

    /// Shades ordered from darkest to lightest, with their names.
    pub fn shades(&self) -> [(&'static str, Rgba); 7] {
        [
            ("darkest", self.darkest),
            ("darker", self.darker),
            ("dark", self.dark),
            ("accent", self.accent),
            ("light", self.light),
            ("lighter", self.lighter),
            ("lightest", self.lightest),
        ]
    }
}
