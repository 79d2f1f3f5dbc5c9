//! Gradient-stop lists to CSS gradient functions.

use crate::types::{GradientSpec, GradientStyle};

/// Placeholder for noise gradients, which have no CSS equivalent.
const NOISE_PLACEHOLDER: &str = "linear-gradient(45deg, #808080 0%, #ffffff 100%)";

/// Render a gradient spec as a CSS gradient function string.
pub fn render(spec: &GradientSpec) -> String {
    if spec.noise {
        return NOISE_PLACEHOLDER.to_string();
    }
    if spec.stops.is_empty() {
        return "none".to_string();
    }

    let stops = render_stops(spec);
    let css_angle = css_angle(spec.angle);
    match spec.style {
        GradientStyle::Linear => format!("linear-gradient({css_angle}deg, {stops})"),
        GradientStyle::Radial => format!("radial-gradient(circle at center, {stops})"),
        GradientStyle::Angle => {
            let from = if spec.angle.is_finite() { spec.angle } else { 0.0 };
            format!("conic-gradient(from {}deg at center, {stops})", format_angle(from))
        }
        GradientStyle::Reflected => format!("repeating-linear-gradient({css_angle}deg, {stops})"),
        // No exact CSS diamond gradient exists; an ellipse is the nearest shape.
        GradientStyle::Diamond => format!("radial-gradient(ellipse at center, {stops})"),
    }
}

/// Document angles are clockwise from the reference axis, CSS linear-gradient
/// angles clockwise from "up".
fn css_angle(document_angle: f64) -> String {
    let angle = if document_angle.is_finite() {
        (90.0 - document_angle).rem_euclid(360.0)
    } else {
        0.0
    };
    format_angle(angle)
}

fn format_angle(angle: f64) -> String {
    if angle.fract() == 0.0 {
        format!("{}", angle as i64)
    } else {
        format!("{angle:.1}")
    }
}

fn render_stops(spec: &GradientSpec) -> String {
    let positions = stop_positions(&spec.stops.iter().map(|s| s.location).collect::<Vec<_>>());

    let mut ordered: Vec<(f64, String)> = spec
        .stops
        .iter()
        .zip(positions)
        .map(|(stop, position)| (position, stop.color.normalize().hex()))
        .collect();
    // Stable sort keeps the original index as tie-break for equal positions.
    ordered.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    ordered
        .into_iter()
        .map(|(position, hex)| format!("{hex} {}%", format_percent(position)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Normalize raw stop locations to percentages in [0,100].
///
/// Unit detection mirrors the alpha ladder: fraction, percent, 12-bit or
/// 16-bit. If every position is non-finite or they are all equal, the raw
/// values carry no ordering information and stops are redistributed evenly
/// by index instead.
fn stop_positions(locations: &[f64]) -> Vec<f64> {
    let normalized: Vec<f64> = locations.iter().map(|&loc| normalize_location(loc)).collect();

    let degenerate = match normalized.iter().find(|p| p.is_finite()) {
        None => !normalized.is_empty(),
        Some(first) => normalized.iter().all(|p| p == first),
    };

    if degenerate {
        let n = normalized.len();
        return (0..n)
            .map(|i| {
                if n == 1 {
                    0.0
                } else {
                    i as f64 / (n - 1) as f64 * 100.0
                }
            })
            .collect();
    }

    normalized
        .into_iter()
        .map(|p| if p.is_finite() { p.clamp(0.0, 100.0) } else { 0.0 })
        .collect()
}

fn normalize_location(location: f64) -> f64 {
    if !location.is_finite() {
        return f64::NAN;
    }
    if location <= 1.0 {
        location * 100.0
    } else if location <= 100.0 {
        location
    } else if location <= 4096.0 {
        location / 4096.0 * 100.0
    } else {
        location / 65535.0 * 100.0
    }
}

/// Small positions keep two decimals so tight gradients stay precise;
/// everything else gets one.
fn format_percent(position: f64) -> String {
    if position < 1.0 {
        format!("{position:.2}")
    } else {
        format!("{position:.1}")
    }
}
