// What the command line tool prints: one serializable report, rendered either
// as JSON or as plain text with one color per line.

use serde::Serialize;
use std::fmt::Write;

use crate::color::Rgba;
use crate::error::Result;
use crate::frame::{FrameColorSet, FrameOptions};
use crate::palette::AccentPalette;
use crate::resolver::{AccentResolver, Resolved, SysPartsMode};
use crate::source::ColorSource;

/// A resolved part of the report, or why it could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Section<T> {
    Resolved(Resolved<T>),
    Failed { error: String },
}

impl<T> From<Result<Resolved<T>>> for Section<T> {
    fn from(result: Result<Resolved<T>>) -> Self {
        match result {
            Ok(resolved) => Section::Resolved(resolved),
            Err(err) => Section::Failed {
                error: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeReport {
    pub app_dark_mode: Resolved<bool>,
    pub sys_parts_dark_mode: Resolved<bool>,
    pub sys_parts: Resolved<SysPartsMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    pub accent: bool,
    pub frame: bool,
    pub theme: bool,
}

impl Sections {
    pub const ALL: Sections = Sections {
        accent: true,
        frame: true,
        theme: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<Section<AccentPalette>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<Section<FrameColorSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeReport>,
}

impl Report {
    pub fn collect<S: ColorSource>(
        resolver: &AccentResolver<S>,
        sections: Sections,
        options: FrameOptions,
    ) -> Self {
        Report {
            accent: sections
                .accent
                .then(|| resolver.resolve_accent_palette().into()),
            frame: sections
                .frame
                .then(|| resolver.resolve_frame_colors(options).into()),
            theme: sections.theme.then(|| ThemeReport {
                app_dark_mode: resolver.app_dark_mode_enabled(),
                sys_parts_dark_mode: resolver.sys_parts_dark_mode_enabled(),
                sys_parts: resolver.sys_parts_mode(),
            }),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if let Some(accent) = &self.accent {
            write_section(&mut out, "Accent color", accent, |out, palette| {
                for (name, color) in palette.shades() {
                    write_color(out, name, color);
                }
            });
        }

        if let Some(frame) = &self.frame {
            write_section(&mut out, "Frame colors", frame, |out, frame| {
                for (name, color) in frame.entries() {
                    write_color(out, name, color);
                }
            });
        }

        if let Some(theme) = &self.theme {
            let _ = writeln!(out, "Theme");
            write_value(&mut out, "app dark mode", &theme.app_dark_mode);
            write_value(&mut out, "sys dark mode", &theme.sys_parts_dark_mode);
            write_value(&mut out, "sys parts", &theme.sys_parts);
        }

        out
    }
}

/// `r, g, b, a` in decimal.
pub fn format_rgba(color: Rgba) -> String {
    format!("{}, {}, {}, {}", color.r(), color.g(), color.b(), color.a())
}

fn guessed_tag<T>(resolved: &Resolved<T>) -> &'static str {
    if resolved.is_guessed() {
        " (guessed)"
    } else {
        ""
    }
}

fn write_section<T>(
    out: &mut String,
    title: &str,
    section: &Section<T>,
    body: impl FnOnce(&mut String, &T),
) {
    match section {
        Section::Resolved(resolved) => {
            let _ = writeln!(out, "{title}{}", guessed_tag(resolved));
            body(out, &resolved.value);
        }
        Section::Failed { error } => {
            let _ = writeln!(out, "{title}: {error}");
        }
    }
}

fn write_color(out: &mut String, name: &str, color: Rgba) {
    let _ = writeln!(out, "  {name:<22}{}", format_rgba(color));
}

fn write_value<T: std::fmt::Debug>(out: &mut String, name: &str, resolved: &Resolved<T>) {
    let _ = writeln!(out, "  {name:<22}{:?}{}", resolved.value, guessed_tag(resolved));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;

    #[test]
    fn rgba_prints_as_decimal_components() {
        assert_eq!(format_rgba(Rgba::new(0, 120, 215, 255)), "0, 120, 215, 255");
    }

    #[test]
    fn failed_section_renders_error() {
        let report = Report {
            accent: Some(Section::from(Err::<Resolved<AccentPalette>, _>(
                ColorError::Fatal,
            ))),
            ..Default::default()
        };
        assert_eq!(
            report.to_text(),
            "Accent color: no color source produced a usable value\n"
        );
    }

    #[test]
    fn guessed_palette_is_tagged() {
        let report = Report {
            accent: Some(Section::Resolved(Resolved::guessed(AccentPalette::flat(
                Rgba::OPAQUE_WHITE,
            )))),
            ..Default::default()
        };
        let text = report.to_text();
        assert!(text.starts_with("Accent color (guessed)\n"));
        assert!(text.contains("  accent                255, 255, 255, 255\n"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn json_omits_missing_sections() {
        let report = Report {
            accent: Some(Section::Resolved(Resolved::exact(AccentPalette::flat(
                Rgba::new(0, 120, 215, 255),
            )))),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["accent"]["confidence"], "exact");
        assert_eq!(json["accent"]["value"]["accent"], "#0078D7FF");
        assert!(json.get("frame").is_none());
    }
}
