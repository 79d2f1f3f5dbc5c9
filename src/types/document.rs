//! Input tree types produced by the external document decoder.
//!
//! The engine only reads these; construction and ownership of the tree
//! belong to the decoder. A parent node exclusively owns its children,
//! so the structure is a tree by construction (no cycles possible).

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A decoded layered document: pixel dimensions plus the top-level layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document width in pixels
    pub width: u32,
    /// Document height in pixels
    pub height: u32,
    /// Top-level layers in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayerNode>,
}

/// Rectangle bounds in document pixel coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// One node of the decoded layer tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerNode {
    pub name: String,
    pub visible: bool,
    pub bounds: Rect,
    /// Layer opacity, 0–1
    pub opacity: f32,
    /// Blend-mode identifier as emitted by the decoder (e.g. "multiply")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
    /// Child layers in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayerNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raster: Option<RasterPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<EffectSet>,
}

impl LayerNode {
    /// A minimal invisible-content node; tests and decoders fill in the rest.
    pub fn new(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            visible: true,
            bounds,
            opacity: 1.0,
            blend_mode: None,
            children: Vec::new(),
            text: None,
            raster: None,
            effects: None,
        }
    }
}

/// Decoded RGBA8 pixels of a raster layer.
///
/// Consumed only through the [`RasterEncoder`](crate::raster::RasterEncoder)
/// capability; the engine itself never touches the pixel data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterPayload {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes
    pub rgba: Vec<u8>,
}

/// Text content plus its typography records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPayload {
    /// Literal text content
    pub content: String,
    #[serde(default)]
    pub character: CharacterStyle,
    #[serde(default)]
    pub paragraph: ParagraphStyle,
    /// Affine transform from text-box space to document space
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<TextTransform>,
    /// Explicit text bounding box, overriding the layer rectangle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Rect>,
}

/// Six-coefficient 2D affine transform `[a, b, c, d, e, f]`:
/// `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct TextTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl TextTransform {
    /// All-zero coefficients mean "no transform recorded".
    pub fn is_zero(&self) -> bool {
        self.a == 0.0
            && self.b == 0.0
            && self.c == 0.0
            && self.d == 0.0
            && self.e == 0.0
            && self.f == 0.0
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Magnitude of the horizontal basis vector; scales the font size.
    pub fn scale_factor(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

/// Character-level text formatting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStyle {
    pub font_family: Option<String>,
    /// Nominal font size in points, before transform correction
    pub font_size: Option<f64>,
    pub fill_color: Option<Color>,
    /// Tracking in thousandths of an em
    pub tracking: Option<f64>,
    /// Leading (line height) in pixels
    pub leading: Option<f64>,
    #[serde(default)]
    pub faux_bold: bool,
    #[serde(default)]
    pub faux_italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub strikethrough: bool,
    /// Horizontal glyph scale, 1.0 = none
    pub horizontal_scale: Option<f64>,
    /// Baseline shift in pixels, positive raises the text
    pub baseline_shift: Option<f64>,
    #[serde(default)]
    pub auto_kerning: bool,
    #[serde(default)]
    pub ligatures: bool,
}

/// Paragraph-level text formatting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<Justification>,
    pub indent_start: Option<f64>,
    pub indent_end: Option<f64>,
    pub space_before: Option<f64>,
    pub space_after: Option<f64>,
}

/// Paragraph justification.
///
/// Canonical form is the string enum; decoders that only have the numeric
/// code can map it via [`Justification::from_code`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    Left,
    Right,
    Center,
    Justify,
}

impl Justification {
    /// Numeric paragraph-justification codes: 0 left, 1 right, 2 center,
    /// 3–6 the justify-last variants (all collapse to justify).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Justification::Left),
            1 => Some(Justification::Right),
            2 => Some(Justification::Center),
            3..=6 => Some(Justification::Justify),
            _ => None,
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            Justification::Left => "left",
            Justification::Right => "right",
            Justification::Center => "center",
            Justification::Justify => "justify",
        }
    }
}

/// A layer's effect slots. Absent or disabled slots contribute nothing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EffectSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_shadow: Option<ShadowEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_shadow: Option<ShadowEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_glow: Option<GlowEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_glow: Option<GlowEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_overlay: Option<GradientOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_overlay: Option<PatternOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bevel: Option<BevelEffect>,
}

/// Drop or inner shadow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowEffect {
    pub enabled: bool,
    pub color: Color,
    /// Light direction in degrees
    pub angle: f64,
    /// Offset distance in pixels
    pub distance: f64,
    /// Blur radius in pixels
    pub blur: f64,
    /// Spread in pixels
    #[serde(default)]
    pub spread: f64,
}

/// Outer or inner glow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlowEffect {
    pub enabled: bool,
    pub color: Color,
    /// Glow extent in pixels, used as blur radius
    pub size: f64,
    /// Choke in pixels, used as spread
    #[serde(default)]
    pub choke: f64,
}

/// Stroke around layer content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeEffect {
    pub enabled: bool,
    pub color: Color,
    /// Stroke width in pixels
    pub size: f64,
    #[serde(default)]
    pub position: StrokePosition,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StrokePosition {
    Inside,
    #[default]
    Outside,
    Center,
}

/// Gradient fill over the layer content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientOverlay {
    pub enabled: bool,
    pub gradient: GradientSpec,
    /// Clip the fill to the glyph shapes of a text layer
    #[serde(default)]
    pub clip_to_content: bool,
}

/// Pattern fill over the layer content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternOverlay {
    pub enabled: bool,
    /// Decoder-supplied pattern image reference (URL or data URI)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub clip_to_content: bool,
}

/// Bevel/emboss, approximated as a highlight/shadow edge pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BevelEffect {
    pub enabled: bool,
    /// Light direction in degrees
    pub angle: f64,
    /// Edge offset in pixels
    pub size: f64,
    pub highlight_color: Color,
    pub shadow_color: Color,
}

/// Ordered gradient stops plus the gradient geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stops: Vec<GradientStop>,
    #[serde(default)]
    pub style: GradientStyle,
    /// Angle in degrees, clockwise from the document reference axis
    #[serde(default)]
    pub angle: f64,
    /// Noise gradients have no stop list worth rendering
    #[serde(default)]
    pub noise: bool,
}

/// One gradient anchor: a color plus a raw location of unspecified unit
/// (fraction, percent, 12-bit or 16-bit; auto-detected at render time).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    pub color: Color,
    pub location: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GradientStyle {
    #[default]
    Linear,
    Radial,
    Angle,
    Reflected,
    Diamond,
}
