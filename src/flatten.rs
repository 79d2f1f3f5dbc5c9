//! Layer classification and tree flattening.

use crate::types::{Document, LayerNode};

/// What a layer contributes to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Text,
    Image,
    /// Neither text nor raster content; skipped without error
    Unsupported,
}

/// Classify one node by its payloads.
///
/// Text wins over raster when both are present; an empty text string does
/// not make a text layer.
pub fn classify(layer: &LayerNode) -> LayerKind {
    match &layer.text {
        Some(text) if !text.content.is_empty() => LayerKind::Text,
        _ if layer.raster.is_some() => LayerKind::Image,
        _ => LayerKind::Unsupported,
    }
}

/// Flatten the layer tree into a linear sequence: depth-first, parent before
/// children, sibling document order preserved.
///
/// Each node is judged against `include_hidden` individually; a hidden group
/// does not implicitly hide its children. The walk uses an explicit stack so
/// adversarially deep trees cannot overflow the call stack.
pub fn flatten<'a>(document: &'a Document, include_hidden: bool) -> Vec<&'a LayerNode> {
    let mut ordered = Vec::new();
    let mut stack: Vec<&LayerNode> = document.children.iter().rev().collect();

    while let Some(layer) = stack.pop() {
        if layer.visible || include_hidden {
            ordered.push(layer);
        }
        for child in layer.children.iter().rev() {
            stack.push(child);
        }
    }

    ordered
}
