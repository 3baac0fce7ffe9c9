// Colors for painting a custom window frame the way Windows 10 paints its own.

use bitflags::bitflags;
use serde::Serialize;

use crate::color::Rgba;
use crate::source::DwmColors;

/// Base gray the DWM colorization color is blended onto for the active frame.
pub const ACTIVE_FRAME_BASE: Rgba = Rgba(0xFFD9_D9D9);

/// Inactive frame color. Not derived from anything the system reports; it
/// looks like a 50% blend of 0xFFAAAAAA over transparent black.
pub const INACTIVE_FRAME: Rgba = Rgba(0x7F56_5656);

/// How far inactive caption text is pulled towards the caption background.
pub const INACTIVE_TEXT_BLEND: f32 = 0.6;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FrameOptions: u32 {
        /// Produce colors for a frame drawn with blur-behind.
        const GLASS_EFFECT = 0x1;
        /// Color the active caption with the accent color whatever the
        /// user setting says.
        const TITLE_BARS_COLORED = 0x2;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameColorSet {
    pub active_caption_text: Rgba,
    pub active_caption_bg: Rgba,
    /// Usually drawn by DWM itself.
    pub active_frame: Rgba,
    pub inactive_caption_text: Rgba,
    pub inactive_caption_bg: Rgba,
    /// Usually drawn by DWM itself.
    pub inactive_frame: Rgba,
}

impl FrameColorSet {
    pub fn entries(&self) -> [(&'static str, Rgba); 6] {
        [
            ("active caption text", self.active_caption_text),
            ("active caption bg", self.active_caption_bg),
            ("active frame", self.active_frame),
            ("inactive caption text", self.inactive_caption_text),
            ("inactive caption bg", self.inactive_caption_bg),
            ("inactive frame", self.inactive_frame),
        ]
    }
}

/// Raw system colors used while high contrast is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemFrameColors {
    pub active_caption: Rgba,
    pub inactive_caption: Rgba,
    pub caption_text: Rgba,
    pub inactive_caption_text: Rgba,
}

/// High contrast: system colors as-is, made opaque. Only the inactive caption
/// text is blended towards its background.
pub fn system_frame_colors(sys: &SystemFrameColors) -> FrameColorSet {
    let inactive_caption_bg = sys.inactive_caption.opaque();
    let raw_inactive_text = sys.inactive_caption_text.opaque();
    FrameColorSet {
        active_caption_text: sys.caption_text.opaque(),
        active_caption_bg: sys.active_caption.opaque(),
        active_frame: sys.caption_text.opaque(),
        inactive_caption_text: raw_inactive_text.blend(inactive_caption_bg, INACTIVE_TEXT_BLEND),
        inactive_caption_bg,
        inactive_frame: sys.inactive_caption_text.opaque(),
    }
}

/// Frame colors derived from the accent color and, when known, the DWM
/// colorization state.
pub fn accented_frame_colors(
    accent: Rgba,
    dwm: Option<DwmColors>,
    glass: bool,
    title_bars_colored: bool,
) -> FrameColorSet {
    let active_caption_bg = if glass {
        Rgba::TRANSPARENT
    } else if title_bars_colored {
        accent
    } else {
        Rgba::OPAQUE_WHITE
    };

    let active_caption_text = if active_caption_bg.is_dark() {
        Rgba::OPAQUE_WHITE
    } else {
        Rgba::OPAQUE_BLACK
    };

    let active_frame = match (glass, dwm) {
        (true, _) => Rgba::TRANSPARENT,
        (false, Some(dwm)) => ACTIVE_FRAME_BASE.blend(
            dwm.colorization_color.opaque(),
            dwm.balance as f32 / 100.0,
        ),
        (false, None) => accent,
    };

    let inactive_caption_bg = if glass {
        Rgba::TRANSPARENT
    } else {
        Rgba::OPAQUE_WHITE
    };

    FrameColorSet {
        active_caption_text,
        active_caption_bg,
        active_frame,
        inactive_caption_text: Rgba::OPAQUE_BLACK.blend(inactive_caption_bg, INACTIVE_TEXT_BLEND),
        inactive_caption_bg,
        inactive_frame: INACTIVE_FRAME,
    }
}
