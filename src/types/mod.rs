//! Core data types: the decoder-produced input tree and the style records
//! the engine emits.

mod document;
mod style;

pub use document::{
    BevelEffect, CharacterStyle, Document, EffectSet, GlowEffect, GradientOverlay, GradientSpec,
    GradientStop, GradientStyle, Justification, LayerNode, ParagraphStyle, PatternOverlay,
    RasterPayload, Rect, ShadowEffect, StrokeEffect, StrokePosition, TextPayload, TextTransform,
};
pub use style::{StyleOutput, StyleRecord};
