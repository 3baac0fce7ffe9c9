//! Windows 10 accent colors and the colors Windows uses to paint window frames.
//!
//! [`AccentResolver`] asks a [`ColorSource`] for the accent palette, falling
//! back from the native UISettings palette to one synthesized from the DWM
//! colorization color, then to the system highlight color. Results carry a
//! [`Confidence`] so callers can tell real values from approximations.
//!
//! On Windows, `platform::WindowsColorSource` queries the running system.

pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod hsv;
pub mod palette;
#[cfg(windows)]
pub mod platform;
pub mod report;
pub mod resolver;
pub mod source;

pub use color::Rgba;
pub use error::{ColorError, Result};
pub use frame::{FrameColorSet, FrameOptions};
pub use palette::AccentPalette;
pub use resolver::{AccentResolver, Confidence, Resolved, SysPartsMode};
pub use source::{ColorSource, DwmColors, SystemColor};
