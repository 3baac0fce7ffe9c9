// `ColorSource` backed by WinRT UISettings, DWM, the registry and GetSysColor.

use std::cell::OnceCell;

use tracing::debug;
use windows::core::BOOL;
use windows::Win32::Foundation::E_NOINTERFACE;
use windows::Win32::Graphics::Dwm::DwmGetColorizationColor;
use windows::Win32::Graphics::Gdi::{
    GetSysColor, COLOR_ACTIVECAPTION, COLOR_CAPTIONTEXT, COLOR_HIGHLIGHT, COLOR_INACTIVECAPTION,
    COLOR_INACTIVECAPTIONTEXT, SYS_COLOR_INDEX,
};
use windows::Win32::UI::Accessibility::{HCF_HIGHCONTRASTON, HIGHCONTRASTW};
use windows::Win32::UI::WindowsAndMessaging::{
    SystemParametersInfoW, SPI_GETHIGHCONTRAST, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS,
};
use windows::UI::ViewManagement::{UIColorType, UISettings};

use super::registry::{
    query_dword, query_flag, Hive, CURRENT_VERSION_KEY, DWM_KEY, PERSONALIZE_KEY,
};
use crate::color::Rgba;
use crate::error::{ColorError, Result};
use crate::palette::AccentPalette;
use crate::source::{ColorSource, SystemColor};

fn to_rgba(color: windows::UI::Color) -> Rgba {
    Rgba::new(color.R, color.G, color.B, color.A)
}

fn winrt_error(what: &'static str, err: windows::core::Error) -> ColorError {
    // IUISettings3 only exists from Windows 10 on
    if err.code() == E_NOINTERFACE {
        ColorError::Unavailable(what)
    } else {
        ColorError::QueryFailed {
            what,
            code: err.code().0 as u32,
        }
    }
}

/// Queries the running system. Create it on a thread with COM initialized;
/// see [`super::init_com`].
#[derive(Default)]
pub struct WindowsColorSource {
    // Activated on first use, then reused.
    ui_settings: OnceCell<Option<UISettings>>,
}

impl WindowsColorSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn ui_settings(&self) -> Result<&UISettings> {
        self.ui_settings
            .get_or_init(|| match UISettings::new() {
                Ok(settings) => Some(settings),
                Err(err) => {
                    debug!("activating Windows.UI.ViewManagement.UISettings failed: {err}");
                    None
                }
            })
            .as_ref()
            .ok_or(ColorError::Unavailable("UISettings"))
    }

    fn registry_colorization_color() -> Result<Rgba> {
        query_dword(Hive::CurrentUser, DWM_KEY, "ColorizationColor").map(Rgba::from_argb)
    }

    fn dwm_colorization_color() -> Result<Rgba> {
        let mut color: u32 = 0;
        let mut opaque_blend = BOOL::default();
        unsafe { DwmGetColorizationColor(&mut color, &mut opaque_blend) }
            .map_err(|err| ColorError::QueryFailed {
                what: "DwmGetColorizationColor",
                code: err.code().0 as u32,
            })?;
        Ok(Rgba::from_argb(color))
    }
}

impl ColorSource for WindowsColorSource {
    fn native_accent_palette(&self) -> Result<AccentPalette> {
        let settings = self.ui_settings()?;
        let value = |kind: UIColorType| {
            settings
                .GetColorValue(kind)
                .map(to_rgba)
                .map_err(|err| winrt_error("UISettings accent colors", err))
        };

        Ok(AccentPalette {
            darkest: value(UIColorType::AccentDark3)?,
            darker: value(UIColorType::AccentDark2)?,
            dark: value(UIColorType::AccentDark1)?,
            accent: value(UIColorType::Accent)?,
            light: value(UIColorType::AccentLight1)?,
            lighter: value(UIColorType::AccentLight2)?,
            lightest: value(UIColorType::AccentLight3)?,
        })
    }

    fn colorization_color(&self) -> Result<Rgba> {
        Self::registry_colorization_color().or_else(|err| {
            debug!("registry colorization color unavailable: {err}");
            Self::dwm_colorization_color()
        })
    }

    fn colorization_balance(&self) -> Result<u8> {
        query_dword(Hive::CurrentUser, DWM_KEY, "ColorizationColorBalance")
            .map(|balance| balance.min(100) as u8)
    }

    fn system_color(&self, kind: SystemColor) -> Result<Rgba> {
        let index: SYS_COLOR_INDEX = match kind {
            SystemColor::ActiveCaption => COLOR_ACTIVECAPTION,
            SystemColor::InactiveCaption => COLOR_INACTIVECAPTION,
            SystemColor::CaptionText => COLOR_CAPTIONTEXT,
            SystemColor::InactiveCaptionText => COLOR_INACTIVECAPTIONTEXT,
            SystemColor::Highlight => COLOR_HIGHLIGHT,
        };
        // COLORREF is 0x00BBGGRR, the RGB layout of Rgba
        let colorref = unsafe { GetSysColor(index) };
        Ok(Rgba(colorref).opaque())
    }

    fn high_contrast_active(&self) -> bool {
        let mut hc = HIGHCONTRASTW {
            cbSize: std::mem::size_of::<HIGHCONTRASTW>() as u32,
            ..Default::default()
        };
        let queried = unsafe {
            SystemParametersInfoW(
                SPI_GETHIGHCONTRAST,
                hc.cbSize,
                Some(&mut hc as *mut HIGHCONTRASTW as *mut std::ffi::c_void),
                SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
            )
        };
        queried.is_ok() && (hc.dwFlags.0 & HCF_HIGHCONTRASTON.0) != 0
    }

    fn title_bar_coloring_enabled(&self) -> bool {
        // Windows 10 1607 and later
        match query_flag(Hive::CurrentUser, DWM_KEY, "ColorPrevalence") {
            Ok(colored) => return colored,
            Err(err) => debug!("DWM ColorPrevalence: {err}"),
        }
        // Windows 10 1511. Later versions use this one for Start and taskbar only.
        match query_flag(Hive::CurrentUser, PERSONALIZE_KEY, "ColorPrevalence") {
            Ok(colored) => colored,
            Err(err) => {
                debug!("Personalize ColorPrevalence: {err}");
                false
            }
        }
    }

    fn is_windows_10_or_later(&self) -> bool {
        // The value only exists from Windows 10 on.
        query_dword(Hive::LocalMachine, CURRENT_VERSION_KEY, "CurrentMajorVersionNumber")
            .map(|major| major >= 10)
            .unwrap_or(false)
    }

    fn apps_use_light_theme(&self) -> Result<bool> {
        query_flag(Hive::CurrentUser, PERSONALIZE_KEY, "AppsUseLightTheme")
    }

    fn system_uses_light_theme(&self) -> Result<bool> {
        query_flag(Hive::CurrentUser, PERSONALIZE_KEY, "SystemUsesLightTheme")
    }

    fn start_taskbar_colored(&self) -> Result<bool> {
        query_flag(Hive::CurrentUser, PERSONALIZE_KEY, "ColorPrevalence")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::AccentResolver;
    use crate::FrameOptions;

    #[test]
    fn resolves_on_this_machine() {
        crate::platform::init_com();
        let resolver = AccentResolver::new(WindowsColorSource::new());
        let palette = resolver.resolve_accent_palette().unwrap();
        assert_ne!(palette.value.accent.a(), 0);
        let frame = resolver.resolve_frame_colors(FrameOptions::empty()).unwrap();
        assert_eq!(frame.value.active_caption_bg.a(), 0xFF);
    }
}
