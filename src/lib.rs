//! Layer Style Derivation Engine
//!
//! Derives a flat, renderable style description for each layer of a parsed
//! layered-image document: the nested layer tree and its per-layer visual
//! attributes (geometry, text formatting, color, blend mode, effects,
//! gradients) become one normalized [`StyleRecord`] per layer, consumable by
//! a UI layout system. Decoding the compressed binary document format is the
//! job of an external decoder; this crate starts from the in-memory tree.
//!
//! # Module Overview
//!
//! - [`types`] - Input tree and output record types
//! - [`color`] - Multi-colorspace color normalization
//! - [`geometry`] - Bounding-box resolution, transform-aware for text
//! - [`gradient`] - Gradient stops to CSS gradient functions
//! - [`effects`] - Layer effects to shadow/border/background fragments
//! - [`flatten`] - Layer classification and tree flattening
//! - [`assemble`] - Per-layer style assembly
//! - [`convert`] - The pipeline entry point
//! - [`raster`] - Raster-payload rendering capability boundary
//!
//! # Example
//!
//! ```
//! use layerstyle::{convert, ConvertOptions, Document, LayerNode, Rect, TextPayload};
//!
//! let mut title = LayerNode::new("title", Rect { left: 100.0, top: 50.0, right: 500.0, bottom: 120.0 });
//! title.text = Some(TextPayload {
//!     content: "Hello".to_string(),
//!     character: Default::default(),
//!     paragraph: Default::default(),
//!     transform: None,
//!     bounds: None,
//! });
//! let document = Document { width: 1920, height: 1080, children: vec![title] };
//!
//! let output = convert(&document, &ConvertOptions::default())?;
//! assert_eq!(output.texts.len(), 1);
//! assert_eq!(output.texts[0].get("left"), Some("100px"));
//! # Ok::<(), layerstyle::ConvertError>(())
//! ```

pub mod assemble;
pub mod color;
pub mod config;
pub mod context;
pub mod convert;
pub mod effects;
pub mod error;
pub mod flatten;
pub mod geometry;
pub mod gradient;
pub mod raster;
pub mod types;

pub use color::{normalize_alpha, normalize_channel, Color, NormalizedColor};
pub use config::{ConvertOptions, UnitMode};
pub use context::{ConvertContext, LogCallback};
pub use convert::{convert, convert_with_encoder, convert_with_log_sink};
pub use effects::EffectFragments;
pub use error::{ConvertError, ErrorKind, ErrorPayload, Result};
pub use flatten::LayerKind;
pub use geometry::{effective_font_size, resolve_bounds, Bounds};
pub use raster::{NoRasterEncoder, PngDataUriEncoder, RasterEncoder};
pub use types::{
    BevelEffect, CharacterStyle, Document, EffectSet, GlowEffect, GradientOverlay, GradientSpec,
    GradientStop, GradientStyle, Justification, LayerNode, ParagraphStyle, PatternOverlay,
    RasterPayload, Rect, ShadowEffect, StrokeEffect, StrokePosition, StyleOutput, StyleRecord,
    TextPayload, TextTransform,
};
