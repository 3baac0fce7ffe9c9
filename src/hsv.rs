// Fixed-point HSV used to derive accent shades from a single base color.
//
// Hue covers [0, 6 * SCALE), one SCALE per sector of the color wheel.
// Saturation and value cover [0, SCALE]. Everything stays in integers so the
// generated shades are reproducible bit for bit.

use crate::color::Rgba;

pub const SCALE: i32 = 0x8000;

/// Value at or above which lighter shades start to lose saturation (0.7 * SCALE).
pub const DESATURATE_THRESHOLD: i32 = 22937;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: i32,
    pub s: i32,
    pub v: i32,
}

pub fn to_hsv(rgba: Rgba) -> Hsv {
    let (r, g, b) = (rgba.r() as i32, rgba.g() as i32, rgba.b() as i32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let h = if chroma == 0 {
        0
    } else if max == r {
        let h = (g - b) * SCALE / chroma;
        if h < 0 {
            h + 6 * SCALE
        } else {
            h
        }
    } else if max == g {
        (b - r) * SCALE / chroma + 2 * SCALE
    } else {
        (r - g) * SCALE / chroma + 4 * SCALE
    };

    let s = if max != 0 { chroma * SCALE / max } else { 0 };
    let v = max * SCALE / 255;

    Hsv { h, s, v }
}

pub fn from_hsv(hsv: Hsv, alpha: u8) -> Rgba {
    let s = hsv.s.clamp(0, SCALE);
    let v = hsv.v.clamp(0, SCALE);
    let h = hsv.h.rem_euclid(6 * SCALE);

    let chroma = v * s / SCALE;
    let x = chroma * (SCALE - ((h % (2 * SCALE)) - SCALE).abs()) / SCALE;
    let m = v - chroma;

    let (r, g, b) = match h / SCALE {
        0 => (chroma, x, 0),
        1 => (x, chroma, 0),
        2 => (0, chroma, x),
        3 => (0, x, chroma),
        4 => (x, 0, chroma),
        _ => (chroma, 0, x),
    };

    let channel = |c: i32| (((c + m) * 255 + SCALE / 2) / SCALE).clamp(0, 255) as u8;
    Rgba::new(channel(r), channel(g), channel(b), alpha)
}

/// Next lighter shade. The step is a quarter of the base value; once the
/// value passes the threshold the saturation drops to 75% so the ramp fades
/// towards white instead of a neon tint.
pub fn lighter_shade(prev: Hsv, base: Hsv) -> Hsv {
    let step = base.v / 4;
    let v = (prev.v + step).min(SCALE);
    let s = if v >= DESATURATE_THRESHOLD {
        prev.s * 192 / 256
    } else {
        prev.s
    };
    Hsv { h: prev.h, s, v }
}

/// Next darker shade. Saturation is left alone.
pub fn darker_shade(prev: Hsv, base: Hsv) -> Hsv {
    let step = base.v / 4;
    Hsv {
        h: prev.h,
        s: prev.s,
        v: (prev.v - step).max(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: u8, b: u8) -> bool {
        (a as i32 - b as i32).abs() <= 1
    }

    #[test]
    fn pure_red() {
        let hsv = to_hsv(Rgba(0xFF00_00FF));
        assert_eq!(hsv, Hsv { h: 0, s: SCALE, v: SCALE });
    }

    #[test]
    fn primaries_land_on_sector_starts() {
        assert_eq!(to_hsv(Rgba::new(0, 255, 0, 255)).h, 2 * SCALE);
        assert_eq!(to_hsv(Rgba::new(0, 0, 255, 255)).h, 4 * SCALE);
        // magenta sits just below the wrap point
        assert_eq!(to_hsv(Rgba::new(255, 0, 255, 255)).h, 5 * SCALE);
    }

    #[test]
    fn grays_are_achromatic() {
        for level in [0u8, 1, 64, 127, 128, 200, 255] {
            let hsv = to_hsv(Rgba::new(level, level, level, 255));
            assert_eq!(hsv.h, 0);
            assert_eq!(hsv.s, 0);
        }
    }

    #[test]
    fn round_trips_grays() {
        for level in 0..=255u8 {
            let c = Rgba::new(level, level, level, 0x42);
            let back = from_hsv(to_hsv(c), c.a());
            assert!(close(back.r(), level) && close(back.g(), level) && close(back.b(), level));
            assert_eq!(back.a(), 0x42);
        }
    }

    #[test]
    fn round_trips_saturated_colors() {
        for max in 1..=255u8 {
            for mid in 0..=max {
                let permutations = [
                    (max, mid, 0),
                    (mid, max, 0),
                    (0, max, mid),
                    (0, mid, max),
                    (mid, 0, max),
                    (max, 0, mid),
                ];
                for (r, g, b) in permutations {
                    let c = Rgba::new(r, g, b, 0xFF);
                    let back = from_hsv(to_hsv(c), 0xFF);
                    assert!(
                        close(back.r(), r) && close(back.g(), g) && close(back.b(), b),
                        "{c} came back as {back}"
                    );
                }
            }
        }
    }

    #[test]
    fn from_hsv_passes_alpha_through() {
        let back = from_hsv(Hsv { h: 0, s: 0, v: SCALE }, 0x7F);
        assert_eq!(back, Rgba(0x7FFF_FFFF));
    }

    #[test]
    fn lighter_shades_saturate_at_scale() {
        let base = to_hsv(Rgba::new(0, 0, 192, 255));
        let mut shade = base;
        for _ in 0..10 {
            shade = lighter_shade(shade, base);
            assert!(shade.v <= SCALE);
        }
        assert_eq!(shade.v, SCALE);
    }

    #[test]
    fn darker_shades_stop_at_zero() {
        let base = to_hsv(Rgba::new(30, 200, 90, 255));
        let mut shade = base;
        for _ in 0..10 {
            shade = darker_shade(shade, base);
            assert!(shade.v >= 0);
            assert_eq!(shade.s, base.s);
        }
        assert_eq!(shade.v, 0);
    }

    #[test]
    fn lighter_only_desaturates_past_threshold() {
        let base = Hsv { h: SCALE, s: 20000, v: 8000 };
        let first = lighter_shade(base, base);
        assert_eq!(first, Hsv { h: SCALE, s: 20000, v: 10000 });

        let near = Hsv { h: SCALE, s: 20000, v: 21000 };
        let crossed = lighter_shade(near, base);
        assert_eq!(crossed.v, 23000);
        assert_eq!(crossed.s, 15000);
    }

    #[test]
    fn step_uses_base_value_not_prev() {
        let base = Hsv { h: 0, s: SCALE, v: 16000 };
        let prev = Hsv { h: 0, s: SCALE, v: 8000 };
        assert_eq!(darker_shade(prev, base).v, 4000);
    }
}
