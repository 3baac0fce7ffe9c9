// Accent palette and frame color resolution.
//
// Accent palette tiers, best first:
//   1. native palette from UISettings                     -> Exact
//   2. palette synthesized from the DWM colorization color -> Guessed
//   3. Highlight system color, synthesized or flat         -> Guessed
// Each tier is tried once, in order. Only when all three fail does the
// resolver return `ColorError::Fatal`.

use serde::Serialize;
use tracing::debug;

use crate::error::{ColorError, Result};
use crate::frame::{
    accented_frame_colors, system_frame_colors, FrameColorSet, FrameOptions, SystemFrameColors,
};
use crate::palette::AccentPalette;
use crate::source::{ColorSource, SystemColor};

/// How much a resolved value can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Synthesized or approximated; not what the OS itself would use.
    Guessed,
    /// Straight from the authoritative API.
    Exact,
}

/// A successfully resolved value and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub confidence: Confidence,
}

impl<T> Resolved<T> {
    pub fn exact(value: T) -> Self {
        Self {
            value,
            confidence: Confidence::Exact,
        }
    }

    pub fn guessed(value: T) -> Self {
        Self {
            value,
            confidence: Confidence::Guessed,
        }
    }

    pub fn is_guessed(&self) -> bool {
        self.confidence == Confidence::Guessed
    }
}

/// Which areas of the shell are drawn in the accent color, or in dark or
/// light mode otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SysPartsMode {
    AccentColor,
    Dark,
    Light,
}

pub struct AccentResolver<S> {
    source: S,
}

impl<S: ColorSource> AccentResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn resolve_accent_palette(&self) -> Result<Resolved<AccentPalette>> {
        match self.source.native_accent_palette() {
            Ok(palette) => return Ok(Resolved::exact(palette)),
            Err(err) => debug!("native accent palette unavailable: {err}"),
        }

        match self.source.colorization_color() {
            Ok(color) => return Ok(Resolved::guessed(AccentPalette::synthesize(color))),
            Err(err) => debug!("colorization color unavailable: {err}"),
        }

        match self.source.system_color(SystemColor::Highlight) {
            Ok(color) if self.source.high_contrast_active() => {
                Ok(Resolved::guessed(AccentPalette::flat(color)))
            }
            Ok(color) => Ok(Resolved::guessed(AccentPalette::synthesize(color))),
            Err(err) => {
                debug!("highlight system color unavailable: {err}");
                Err(ColorError::Fatal)
            }
        }
    }

    pub fn resolve_frame_colors(&self, options: FrameOptions) -> Result<Resolved<FrameColorSet>> {
        if self.source.high_contrast_active() {
            return self.high_contrast_frame_colors();
        }

        let accent = self.resolve_accent_palette()?;
        let glass = options.contains(FrameOptions::GLASS_EFFECT);
        let title_bars_colored = options.contains(FrameOptions::TITLE_BARS_COLORED)
            || !self.source.is_windows_10_or_later()
            || self.source.title_bar_coloring_enabled();

        let mut confidence = accent.confidence;
        let dwm = if glass {
            None
        } else {
            match self.source.dwm_colors() {
                Ok(dwm) => Some(dwm),
                Err(err) => {
                    debug!("DWM colors unavailable, using accent for the frame: {err}");
                    confidence = Confidence::Guessed;
                    None
                }
            }
        };

        let frame = accented_frame_colors(accent.value.accent, dwm, glass, title_bars_colored);
        Ok(Resolved {
            value: frame,
            confidence,
        })
    }

    fn high_contrast_frame_colors(&self) -> Result<Resolved<FrameColorSet>> {
        let color = |kind| {
            self.source.system_color(kind).map_err(|err| {
                debug!("system color {kind:?} unavailable: {err}");
                ColorError::Fatal
            })
        };
        let sys = SystemFrameColors {
            active_caption: color(SystemColor::ActiveCaption)?,
            inactive_caption: color(SystemColor::InactiveCaption)?,
            caption_text: color(SystemColor::CaptionText)?,
            inactive_caption_text: color(SystemColor::InactiveCaptionText)?,
        };
        Ok(Resolved::exact(system_frame_colors(&sys)))
    }

    /// Whether apps are set to dark mode. Light unless the user said otherwise.
    pub fn app_dark_mode_enabled(&self) -> Resolved<bool> {
        match self.source.apps_use_light_theme() {
            Ok(light) => Resolved::exact(!light),
            Err(err) => {
                debug!("app theme unavailable: {err}");
                Resolved::guessed(false)
            }
        }
    }

    /// Whether Start, taskbar and action center are dark. Without the setting
    /// (before light system parts existed) they are.
    pub fn sys_parts_dark_mode_enabled(&self) -> Resolved<bool> {
        match self.source.system_uses_light_theme() {
            Ok(light) => Resolved::exact(!light),
            Err(err) => {
                debug!("system theme unavailable: {err}");
                Resolved::guessed(true)
            }
        }
    }

    pub fn sys_parts_mode(&self) -> Resolved<SysPartsMode> {
        let accent = match self.source.start_taskbar_colored() {
            Ok(colored) => Resolved::exact(colored),
            Err(err) => {
                debug!("start/taskbar colorization unavailable: {err}");
                Resolved::guessed(false)
            }
        };
        if accent.value {
            return Resolved {
                value: SysPartsMode::AccentColor,
                confidence: accent.confidence,
            };
        }

        let dark = self.sys_parts_dark_mode_enabled();
        let value = if dark.value {
            SysPartsMode::Dark
        } else {
            SysPartsMode::Light
        };
        Resolved {
            value,
            confidence: accent.confidence.min(dark.confidence),
        }
    }
}
