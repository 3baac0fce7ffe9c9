// The resolver never talks to the OS directly. Everything it needs comes
// through `ColorSource`, implemented by the Windows adapter and by test fakes.

use serde::Serialize;

use crate::color::Rgba;
use crate::error::{ColorError, Result};
use crate::palette::AccentPalette;

/// Win32 system colors the resolver may fall back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemColor {
    ActiveCaption,
    InactiveCaption,
    CaptionText,
    InactiveCaptionText,
    Highlight,
}

/// DWM colorization state: the colorization color and how strongly it tints
/// the frame over the base gray, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DwmColors {
    pub colorization_color: Rgba,
    pub balance: u8,
}

impl DwmColors {
    pub fn new(colorization_color: Rgba, balance: u8) -> Self {
        Self {
            colorization_color,
            balance: balance.min(100),
        }
    }
}

/// Everything the resolver asks of the platform.
///
/// Fallible queries report `ColorError::Unavailable` when the source does not
/// exist and `ColorError::QueryFailed` when it exists but the call failed.
pub trait ColorSource {
    /// All seven accent shades straight from the OS.
    fn native_accent_palette(&self) -> Result<AccentPalette>;

    fn colorization_color(&self) -> Result<Rgba>;

    /// Colorization balance in percent, `0..=100`.
    fn colorization_balance(&self) -> Result<u8>;

    fn system_color(&self, kind: SystemColor) -> Result<Rgba>;

    fn high_contrast_active(&self) -> bool;

    /// Whether the user chose to show the accent color on title bars.
    fn title_bar_coloring_enabled(&self) -> bool;

    fn is_windows_10_or_later(&self) -> bool;

    fn apps_use_light_theme(&self) -> Result<bool> {
        Err(ColorError::Unavailable("AppsUseLightTheme"))
    }

    fn system_uses_light_theme(&self) -> Result<bool> {
        Err(ColorError::Unavailable("SystemUsesLightTheme"))
    }

    /// Whether Start, taskbar and action center use the accent color.
    fn start_taskbar_colored(&self) -> Result<bool> {
        Err(ColorError::Unavailable("ColorPrevalence"))
    }

    /// Colorization color and balance together, if both can be read.
    fn dwm_colors(&self) -> Result<DwmColors> {
        let color = self.colorization_color()?;
        let balance = self.colorization_balance()?;
        Ok(DwmColors::new(color, balance))
    }
}

impl<S: ColorSource + ?Sized> ColorSource for &S {
    fn native_accent_palette(&self) -> Result<AccentPalette> {
        (**self).native_accent_palette()
    }

    fn colorization_color(&self) -> Result<Rgba> {
        (**self).colorization_color()
    }

    fn colorization_balance(&self) -> Result<u8> {
        (**self).colorization_balance()
    }

    fn system_color(&self, kind: SystemColor) -> Result<Rgba> {
        (**self).system_color(kind)
    }

    fn high_contrast_active(&self) -> bool {
        (**self).high_contrast_active()
    }

    fn title_bar_coloring_enabled(&self) -> bool {
        (**self).title_bar_coloring_enabled()
    }

    fn is_windows_10_or_later(&self) -> bool {
        (**self).is_windows_10_or_later()
    }

    fn apps_use_light_theme(&self) -> Result<bool> {
        (**self).apps_use_light_theme()
    }

    fn system_uses_light_theme(&self) -> Result<bool> {
        (**self).system_uses_light_theme()
    }

    fn start_taskbar_colored(&self) -> Result<bool> {
        (**self).start_taskbar_colored()
    }

    fn dwm_colors(&self) -> Result<DwmColors> {
        (**self).dwm_colors()
    }
}
