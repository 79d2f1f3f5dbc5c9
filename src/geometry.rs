//! On-canvas bounding-box resolution.
//!
//! Raster layers use their stored rectangle directly. Text layers may carry
//! an affine transform from text-box space to document space; a rotated or
//! sheared text frame would be misplaced by a naive read of the stored
//! rectangle, so the transform is applied to all four corners and the
//! axis-aligned box of the result is taken.

use crate::types::{LayerNode, Rect, TextTransform};

/// Resolved on-canvas box in document pixel space, integer-rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub width: i64,
    pub height: i64,
}

/// Compute a layer's on-canvas bounding box.
pub fn resolve_bounds(layer: &LayerNode) -> Bounds {
    let rect = match &layer.text {
        Some(text) => {
            let nominal = text.bounds.unwrap_or(layer.bounds);
            match &text.transform {
                Some(t) if !t.is_zero() => transform_rect(&nominal, t),
                _ => nominal,
            }
        }
        None => layer.bounds,
    };
    round_rect(&rect)
}

/// Effective font size after transform correction.
///
/// The horizontal basis-vector magnitude `sqrt(a² + b²)` carries the text
/// frame's scale; a degenerate transform (computed size ≤ 0) falls back to
/// the nominal size unscaled.
pub fn effective_font_size(nominal: f64, transform: Option<&TextTransform>) -> f64 {
    match transform {
        Some(t) if !t.is_zero() => {
            let scaled = nominal * t.scale_factor();
            if scaled > 0.0 {
                scaled
            } else {
                nominal
            }
        }
        _ => nominal,
    }
}

/// Axis-aligned bounding box of the four transformed corners.
fn transform_rect(rect: &Rect, transform: &TextTransform) -> Rect {
    let corners = [
        transform.apply(rect.left, rect.top),
        transform.apply(rect.right, rect.top),
        transform.apply(rect.right, rect.bottom),
        transform.apply(rect.left, rect.bottom),
    ];

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (x, y) in corners {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    Rect {
        left: min_x,
        top: min_y,
        right: max_x,
        bottom: max_y,
    }
}

/// Round edges to the nearest integer, then derive width/height.
///
/// Width and height are clamped non-negative so a decoder rectangle with
/// swapped edges cannot produce a negative size.
fn round_rect(rect: &Rect) -> Bounds {
    let left = round_coord(rect.left);
    let top = round_coord(rect.top);
    let right = round_coord(rect.right);
    let bottom = round_coord(rect.bottom);
    Bounds {
        left,
        top,
        right,
        bottom,
        width: (right - left).max(0),
        height: (bottom - top).max(0),
    }
}

fn round_coord(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}
