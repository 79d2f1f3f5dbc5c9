//! Per-layer style assembly: geometry + typography + effect fragments
//! merged into one [`StyleRecord`].

use std::collections::BTreeMap;

use crate::config::UnitMode;
use crate::context::ConvertContext;
use crate::effects::{self, EffectFragments};
use crate::geometry::{self, Bounds};
use crate::raster::RasterEncoder;
use crate::types::{LayerNode, StyleRecord};

/// Blend modes with a direct `mix-blend-mode` counterpart. Anything else is
/// omitted rather than passed through verbatim.
pub const SUPPORTED_BLEND_MODES: [&str; 16] = [
    "normal",
    "multiply",
    "screen",
    "overlay",
    "soft-light",
    "hard-light",
    "color-dodge",
    "color-burn",
    "darken",
    "lighten",
    "difference",
    "exclusion",
    "hue",
    "saturation",
    "color",
    "luminosity",
];

/// Assemble the style record for a text layer.
pub fn assemble_text(layer: &LayerNode, ctx: &ConvertContext) -> Result<StyleRecord, String> {
    let bounds = checked_bounds(layer)?;
    let mut properties = base_properties(layer, &bounds, ctx);

    let text = layer
        .text
        .as_ref()
        .ok_or_else(|| "text layer without text payload".to_string())?;
    let character = &text.character;

    if let Some(family) = &character.font_family {
        properties.insert("font-family".to_string(), family.clone());
    }
    if let Some(size) = character.font_size {
        let effective = geometry::effective_font_size(size, text.transform.as_ref());
        if !effective.is_finite() {
            return Err(format!("non-finite font size {effective}"));
        }
        properties.insert("font-size".to_string(), format_px(effective));
    }
    if let Some(fill) = &character.fill_color {
        properties.insert("color".to_string(), fill.normalize().css());
    }
    if character.faux_bold {
        properties.insert("font-weight".to_string(), "bold".to_string());
    }
    if character.faux_italic {
        properties.insert("font-style".to_string(), "italic".to_string());
    }
    match (character.underline, character.strikethrough) {
        (true, true) => {
            properties.insert("text-decoration".to_string(), "underline line-through".to_string());
        }
        (true, false) => {
            properties.insert("text-decoration".to_string(), "underline".to_string());
        }
        (false, true) => {
            properties.insert("text-decoration".to_string(), "line-through".to_string());
        }
        (false, false) => {}
    }
    if let Some(tracking) = character.tracking {
        if tracking != 0.0 && tracking.is_finite() {
            // tracking is stored in thousandths of an em
            properties.insert("letter-spacing".to_string(), format!("{}em", tracking / 1000.0));
        }
    }
    if let Some(leading) = character.leading {
        if leading > 0.0 && leading.is_finite() {
            properties.insert("line-height".to_string(), format_px(leading));
        }
    }
    if let Some(shift) = character.baseline_shift {
        if shift != 0.0 && shift.is_finite() {
            properties.insert("vertical-align".to_string(), format_px(shift));
        }
    }
    if let Some(scale) = character.horizontal_scale {
        if scale != 1.0 && scale.is_finite() && scale > 0.0 {
            properties.insert("transform".to_string(), format!("scaleX({scale})"));
        }
    }
    if let Some(justification) = &text.paragraph.justification {
        properties.insert("text-align".to_string(), justification.css().to_string());
    }

    if let Some(effects) = &layer.effects {
        let fragments = effects::render(effects, true);
        apply_fragments(&mut properties, &fragments);
    }

    Ok(StyleRecord {
        name: layer.name.clone(),
        properties,
        value: Some(text.content.clone()),
    })
}

/// Assemble the style record for an image layer.
///
/// The raster capability failing (or being absent) leaves `value` empty;
/// it never fails the layer.
pub fn assemble_image(
    layer: &LayerNode,
    ctx: &ConvertContext,
    encoder: &dyn RasterEncoder,
) -> Result<StyleRecord, String> {
    let bounds = checked_bounds(layer)?;
    let mut properties = base_properties(layer, &bounds, ctx);

    if let Some(effects) = &layer.effects {
        let fragments = effects::render(effects, false);
        apply_fragments(&mut properties, &fragments);
    }

    let value = layer.raster.as_ref().and_then(|r| encoder.encode(r));

    Ok(StyleRecord {
        name: layer.name.clone(),
        properties,
        value,
    })
}

fn checked_bounds(layer: &LayerNode) -> Result<Bounds, String> {
    let rect = &layer.bounds;
    if ![rect.left, rect.top, rect.right, rect.bottom]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(format!(
            "non-finite bounds ({}, {}, {}, {})",
            rect.left, rect.top, rect.right, rect.bottom
        ));
    }
    Ok(geometry::resolve_bounds(layer))
}

/// `position: absolute` plus geometry, opacity (only when < 1) and the
/// allow-listed blend mode.
fn base_properties(
    layer: &LayerNode,
    bounds: &Bounds,
    ctx: &ConvertContext,
) -> BTreeMap<String, String> {
    let mut properties = BTreeMap::new();
    properties.insert("position".to_string(), "absolute".to_string());

    // Clamp the on-screen position to the canvas; width/height are already
    // non-negative from the resolver.
    let left = bounds.left.max(0);
    let top = bounds.top.max(0);
    match ctx.units {
        UnitMode::Px => {
            properties.insert("left".to_string(), format!("{left}px"));
            properties.insert("top".to_string(), format!("{top}px"));
            properties.insert("width".to_string(), format!("{}px", bounds.width));
            properties.insert("height".to_string(), format!("{}px", bounds.height));
        }
        UnitMode::Percent => {
            properties.insert("left".to_string(), percent_of(left as f64, ctx.doc_width));
            properties.insert("top".to_string(), percent_of(top as f64, ctx.doc_height));
            properties.insert(
                "width".to_string(),
                percent_of(bounds.width as f64, ctx.doc_width),
            );
            properties.insert(
                "height".to_string(),
                percent_of(bounds.height as f64, ctx.doc_height),
            );
        }
    }

    if layer.opacity < 1.0 {
        properties.insert("opacity".to_string(), format!("{}", layer.opacity.max(0.0)));
    }
    if let Some(mode) = layer.blend_mode.as_deref() {
        if SUPPORTED_BLEND_MODES.contains(&mode) {
            properties.insert("mix-blend-mode".to_string(), mode.to_string());
        }
    }

    properties
}

fn apply_fragments(properties: &mut BTreeMap<String, String>, fragments: &EffectFragments) {
    if let Some(shadow) = fragments.box_shadow_css() {
        properties.insert("box-shadow".to_string(), shadow);
    }
    if let Some(shadow) = fragments.text_shadow_css() {
        properties.insert("text-shadow".to_string(), shadow);
    }
    if let Some(border) = &fragments.border {
        properties.insert("border".to_string(), border.clone());
    }
    if let Some(background) = &fragments.background {
        properties.insert("background".to_string(), background.clone());
    }
    if let Some((width, color)) = &fragments.text_stroke {
        properties.insert("-webkit-text-stroke-width".to_string(), format!("{width}px"));
        properties.insert("-webkit-text-stroke-color".to_string(), color.clone());
    }
    if fragments.clip_background_to_text {
        properties.insert("-webkit-background-clip".to_string(), "text".to_string());
        properties.insert("background-clip".to_string(), "text".to_string());
        // the fill must not cover the clipped background
        properties.insert("color".to_string(), "transparent".to_string());
    }
}

fn percent_of(value: f64, total: f64) -> String {
    let percent = if total > 0.0 { value / total * 100.0 } else { 0.0 };
    format!("{percent:.2}%")
}

fn format_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value:.1}px")
    }
}
