//! Layer effects to CSS style fragments.
//!
//! Text and raster layers speak different CSS idioms: raster shadows go to
//! `box-shadow` (with spread), text shadows to `text-shadow` (no spread
//! concept), strokes become `-webkit-text-stroke` on text but borders or
//! inset shadows on raster, and inner glow has no text equivalent at all.

use crate::gradient;
use crate::types::{EffectSet, GlowEffect, ShadowEffect, StrokeEffect, StrokePosition};

/// Accumulated style fragments for one layer's effect set.
#[derive(Debug, Clone, Default)]
pub struct EffectFragments {
    /// `box-shadow` entries: drop shadow, inner shadow, glow, bevel
    pub box_shadows: Vec<String>,
    /// `text-shadow` entries: drop shadow, glow
    pub text_shadows: Vec<String>,
    pub border: Option<String>,
    pub background: Option<String>,
    /// Text-outline width/color pair (px width, css color)
    pub text_stroke: Option<(i64, String)>,
    /// Clip the background to glyph shapes and force the fill transparent
    pub clip_background_to_text: bool,
}

impl EffectFragments {
    pub fn box_shadow_css(&self) -> Option<String> {
        join_fragments(&self.box_shadows)
    }

    pub fn text_shadow_css(&self) -> Option<String> {
        join_fragments(&self.text_shadows)
    }
}

fn join_fragments(fragments: &[String]) -> Option<String> {
    let kept: Vec<&str> = fragments
        .iter()
        .map(String::as_str)
        .filter(|f| !f.is_empty())
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(", "))
    }
}

/// Render an effect set into style fragments.
pub fn render(effects: &EffectSet, is_text: bool) -> EffectFragments {
    let mut out = EffectFragments::default();

    if let Some(shadow) = enabled(&effects.drop_shadow, |s| s.enabled) {
        render_drop_shadow(shadow, is_text, &mut out);
    }
    if let Some(shadow) = enabled(&effects.inner_shadow, |s| s.enabled) {
        render_inner_shadow(shadow, &mut out);
    }
    if let Some(glow) = enabled(&effects.outer_glow, |g| g.enabled) {
        render_outer_glow(glow, is_text, &mut out);
    }
    if let Some(glow) = enabled(&effects.inner_glow, |g| g.enabled) {
        // No reasonable CSS idiom exists for inner glow on text.
        if !is_text {
            render_inner_glow(glow, &mut out);
        }
    }
    if let Some(stroke) = enabled(&effects.stroke, |s| s.enabled) {
        render_stroke(stroke, is_text, &mut out);
    }
    if let Some(overlay) = enabled(&effects.gradient_overlay, |o| o.enabled) {
        out.background = Some(gradient::render(&overlay.gradient));
        if overlay.clip_to_content && is_text {
            out.clip_background_to_text = true;
        }
    }
    if let Some(overlay) = enabled(&effects.pattern_overlay, |o| o.enabled) {
        if let Some(image) = &overlay.image {
            out.background = Some(format!("url({image})"));
            if overlay.clip_to_content && is_text {
                out.clip_background_to_text = true;
            }
        }
    }
    if let Some(bevel) = enabled(&effects.bevel, |b| b.enabled) {
        let (dx, dy) = offset(bevel.angle, bevel.size);
        let highlight = bevel.highlight_color.normalize().css();
        let shadow = bevel.shadow_color.normalize().css();
        out.box_shadows
            .push(format!("{dx}px {dy}px 0 0 {highlight}"));
        out.box_shadows.push(format!("{}px {}px 0 0 {shadow}", -dx, -dy));
    }

    out
}

fn enabled<T>(slot: &Option<T>, is_enabled: impl Fn(&T) -> bool) -> Option<&T> {
    slot.as_ref().filter(|e| is_enabled(*e))
}

/// Decompose the light direction into pixel offsets.
fn offset(angle_degrees: f64, distance: f64) -> (i64, i64) {
    let radians = angle_degrees.to_radians();
    (
        round_px(distance * radians.cos()),
        round_px(distance * radians.sin()),
    )
}

fn round_px(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

fn render_drop_shadow(shadow: &ShadowEffect, is_text: bool, out: &mut EffectFragments) {
    let (dx, dy) = offset(shadow.angle, shadow.distance);
    let blur = round_px(shadow.blur);
    let color = shadow.color.normalize().css();
    if is_text {
        out.text_shadows.push(format!("{dx}px {dy}px {blur}px {color}"));
    } else {
        let spread = round_px(shadow.spread);
        out.box_shadows
            .push(format!("{dx}px {dy}px {blur}px {spread}px {color}"));
    }
}

fn render_inner_shadow(shadow: &ShadowEffect, out: &mut EffectFragments) {
    let (dx, dy) = offset(shadow.angle, shadow.distance);
    let blur = round_px(shadow.blur);
    let spread = round_px(shadow.spread);
    let color = shadow.color.normalize().css();
    out.box_shadows
        .push(format!("inset {dx}px {dy}px {blur}px {spread}px {color}"));
}

fn render_outer_glow(glow: &GlowEffect, is_text: bool, out: &mut EffectFragments) {
    let size = round_px(glow.size);
    let color = glow.color.normalize().css();
    if is_text {
        out.text_shadows.push(format!("0 0 {size}px {color}"));
    } else {
        let choke = round_px(glow.choke);
        out.box_shadows.push(format!("0 0 {size}px {choke}px {color}"));
    }
}

fn render_inner_glow(glow: &GlowEffect, out: &mut EffectFragments) {
    let size = round_px(glow.size);
    let choke = round_px(glow.choke);
    let color = glow.color.normalize().css();
    out.box_shadows
        .push(format!("inset 0 0 {size}px {choke}px {color}"));
}

fn render_stroke(stroke: &StrokeEffect, is_text: bool, out: &mut EffectFragments) {
    let size = round_px(stroke.size);
    let color = stroke.color.normalize().css();
    if is_text {
        out.text_stroke = Some((size, color));
        return;
    }
    match stroke.position {
        StrokePosition::Inside => {
            out.box_shadows.push(format!("inset 0 0 0 {size}px {color}"));
        }
        // Center has no CSS equivalent; a plain border is the closest read.
        StrokePosition::Outside | StrokePosition::Center => {
            out.border = Some(format!("{size}px solid {color}"));
        }
    }
}
