//! Colorspace normalization.
//!
//! Every supported colorspace collapses to a canonical 8-bit RGB triple plus
//! a 0–1 alpha. HSB and LAB go through `palette` (LAB via the XYZ→sRGB
//! pipeline with the D65 reference white); CMYK uses the standard naive
//! formula. Both are approximations, not colorimetrically exact — good
//! enough for style output, which is all this engine produces.

use palette::{convert::FromColorUnclamped, Hsv, Lab, Srgb};
use serde::{Deserialize, Serialize};

/// A color in whichever space the decoder found it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "camelCase")]
pub enum Color {
    /// 8-bit RGB
    Rgb { r: u8, g: u8, b: u8 },
    /// 8-bit RGB plus a raw alpha of auto-detected unit
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Fractional RGB, channels in 0–1
    FloatRgb { r: f64, g: f64, b: f64 },
    /// Grayscale, 0 = white and 255 = black (inverted, as stored)
    Grayscale { k: f64 },
    /// Hue in degrees, saturation/brightness in 0–100
    Hsb { h: f64, s: f64, b: f64 },
    /// Channels in 0–100
    Cmyk { c: f64, m: f64, y: f64, k: f64 },
    /// L in 0–100, a/b in roughly -128–127
    Lab { l: f64, a: f64, b: f64 },
    /// Loosely-typed numeric channels of unknown bit depth:
    /// `[r, g, b]` or `[r, g, b, alpha]`, each unit auto-detected
    Channels { values: Vec<f64> },
}

/// Canonical color: RGB in 0–255, alpha in 0–1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub fn normalize(&self) -> NormalizedColor {
        match self {
            Color::Rgb { r, g, b } => NormalizedColor {
                r: *r,
                g: *g,
                b: *b,
                a: 1.0,
            },
            Color::Rgba { r, g, b, a } => NormalizedColor {
                r: *r,
                g: *g,
                b: *b,
                a: normalize_alpha(Some(*a)),
            },
            Color::FloatRgb { r, g, b } => NormalizedColor {
                r: fraction_to_u8(*r),
                g: fraction_to_u8(*g),
                b: fraction_to_u8(*b),
                a: 1.0,
            },
            Color::Grayscale { k } => {
                let k = if k.is_finite() { k.clamp(0.0, 255.0) } else { 0.0 };
                let value = fraction_to_u8(1.0 - k / 255.0);
                NormalizedColor {
                    r: value,
                    g: value,
                    b: value,
                    a: 1.0,
                }
            }
            Color::Hsb { h, s, b } => {
                let hsv = Hsv::new(
                    *h as f32,
                    (s / 100.0).clamp(0.0, 1.0) as f32,
                    (b / 100.0).clamp(0.0, 1.0) as f32,
                );
                let srgb: Srgb = Srgb::from_color_unclamped(hsv);
                srgb_to_normalized(srgb)
            }
            Color::Cmyk { c, m, y, k } => {
                let c = (c / 100.0).clamp(0.0, 1.0);
                let m = (m / 100.0).clamp(0.0, 1.0);
                let y = (y / 100.0).clamp(0.0, 1.0);
                let k = (k / 100.0).clamp(0.0, 1.0);
                NormalizedColor {
                    r: fraction_to_u8((1.0 - c) * (1.0 - k)),
                    g: fraction_to_u8((1.0 - m) * (1.0 - k)),
                    b: fraction_to_u8((1.0 - y) * (1.0 - k)),
                    a: 1.0,
                }
            }
            Color::Lab { l, a, b } => {
                let lab = Lab::new(*l as f32, *a as f32, *b as f32);
                let srgb: Srgb = Srgb::from_color_unclamped(lab);
                srgb_to_normalized(srgb)
            }
            Color::Channels { values } => NormalizedColor {
                r: normalize_channel(values.first().copied()),
                g: normalize_channel(values.get(1).copied()),
                b: normalize_channel(values.get(2).copied()),
                a: normalize_alpha(values.get(3).copied()),
            },
        }
    }
}

impl NormalizedColor {
    /// Render as CSS: `#rrggbb` at full opacity, `rgba(...)` otherwise, so
    /// partial transparency is never silently dropped.
    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            self.hex()
        } else {
            format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.a)
        }
    }

    /// Alpha-less hex form, used where the CSS grammar wants a plain color
    /// (gradient stop lists).
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Auto-detect the bit depth of an untyped channel value and rescale to 8-bit.
///
/// Heuristic: (0,1] is a fraction, (1,255] already 8-bit, (255,4095] 12-bit,
/// anything above 16-bit. Zero, negative and non-finite values all map to 0.
pub fn normalize_channel(value: Option<f64>) -> u8 {
    let n = match value {
        Some(n) if n.is_finite() && n > 0.0 => n,
        _ => return 0,
    };
    if n <= 1.0 {
        fraction_to_u8(n)
    } else if n <= 255.0 {
        n.round() as u8
    } else if n <= 4095.0 {
        (n * 255.0 / 4095.0).round().min(255.0) as u8
    } else {
        (n * 255.0 / 65535.0).round().min(255.0) as u8
    }
}

/// Auto-detect an alpha value's unit and rescale to 0–1.
///
/// Same ladder shape as [`normalize_channel`], with an extra (1,100] percent
/// rung. Absent alpha means fully opaque.
pub fn normalize_alpha(value: Option<f64>) -> f64 {
    let a = match value {
        Some(a) if a.is_finite() => a,
        Some(_) => return 0.0,
        None => return 1.0,
    };
    if a <= 0.0 {
        0.0
    } else if a <= 1.0 {
        a
    } else if a <= 100.0 {
        a / 100.0
    } else if a <= 255.0 {
        a / 255.0
    } else if a <= 4095.0 {
        a / 4095.0
    } else {
        (a / 65535.0).min(1.0)
    }
}

fn fraction_to_u8(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn srgb_to_normalized(srgb: Srgb) -> NormalizedColor {
    let clamp = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    NormalizedColor {
        r: clamp(srgb.red),
        g: clamp(srgb.green),
        b: clamp(srgb.blue),
        a: 1.0,
    }
}
