//! Conversion pipeline: flatten, classify, derive, partition.

use crate::assemble;
use crate::config::ConvertOptions;
use crate::context::{ConvertContext, LogCallback};
use crate::error::{ConvertError, Result};
use crate::flatten::{self, LayerKind};
use crate::raster::{PngDataUriEncoder, RasterEncoder};
use crate::types::{Document, StyleOutput, StyleRecord};

/// Convert a decoded document into per-layer style records using the
/// default PNG data-URI raster capability.
pub fn convert(document: &Document, options: &ConvertOptions) -> Result<StyleOutput> {
    convert_with_encoder(document, options, &PngDataUriEncoder)
}

/// Convert with a caller-supplied raster capability.
///
/// Fatal errors (bad options, zero-sized document) abort the conversion with
/// a structured error. A failure while deriving one layer's style is logged
/// and that layer is dropped; the remaining layers still convert, so callers
/// always get either an error with a kind or a complete two-array result.
pub fn convert_with_encoder(
    document: &Document,
    options: &ConvertOptions,
    encoder: &dyn RasterEncoder,
) -> Result<StyleOutput> {
    let ctx = ConvertContext::new(document.width, document.height, options);
    convert_in_context(document, options, encoder, &ctx)
}

/// Like [`convert_with_encoder`] but with a custom log sink on the context.
pub fn convert_with_log_sink(
    document: &Document,
    options: &ConvertOptions,
    encoder: &dyn RasterEncoder,
    sink: LogCallback,
) -> Result<StyleOutput> {
    let ctx = ConvertContext::new(document.width, document.height, options).with_log_sink(sink);
    convert_in_context(document, options, encoder, &ctx)
}

fn convert_in_context(
    document: &Document,
    options: &ConvertOptions,
    encoder: &dyn RasterEncoder,
    ctx: &ConvertContext,
) -> Result<StyleOutput> {
    if document.width == 0 || document.height == 0 {
        return Err(ConvertError::document(format!(
            "document dimensions must be positive, got {}x{}",
            document.width, document.height
        )));
    }

    let mut output = StyleOutput::default();
    for layer in flatten::flatten(document, options.include_hidden) {
        let kind = flatten::classify(layer);
        let derived: std::result::Result<Option<(LayerKind, StyleRecord)>, String> = match kind {
            LayerKind::Text => assemble::assemble_text(layer, ctx).map(|r| Some((kind, r))),
            LayerKind::Image => {
                assemble::assemble_image(layer, ctx, encoder).map(|r| Some((kind, r)))
            }
            LayerKind::Unsupported => Ok(None),
        };

        match derived {
            Ok(Some((LayerKind::Text, record))) => output.texts.push(record),
            Ok(Some((_, record))) => output.images.push(record),
            Ok(None) => {}
            Err(reason) => {
                // One bad layer must not abort the rest of the document.
                ctx.log(&format!(
                    "skipping layer '{}': {}",
                    layer.name, reason
                ));
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LayerNode, Rect, TextPayload};

    fn text_layer(name: &str) -> LayerNode {
        let mut layer = LayerNode::new(
            name,
            Rect {
                left: 0.0,
                top: 0.0,
                right: 10.0,
                bottom: 10.0,
            },
        );
        layer.text = Some(TextPayload {
            content: name.to_string(),
            character: Default::default(),
            paragraph: Default::default(),
            transform: None,
            bounds: None,
        });
        layer
    }

    #[test]
    fn zero_dimension_document_is_fatal() {
        let document = Document {
            width: 0,
            height: 100,
            children: vec![text_layer("a")],
        };
        let err = convert(&document, &ConvertOptions::default()).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Document);
    }

    #[test]
    fn unsupported_layers_are_silently_skipped() {
        let document = Document {
            width: 100,
            height: 100,
            children: vec![
                LayerNode::new(
                    "group",
                    Rect {
                        left: 0.0,
                        top: 0.0,
                        right: 100.0,
                        bottom: 100.0,
                    },
                ),
                text_layer("caption"),
            ],
        };
        let output = convert(&document, &ConvertOptions::default()).unwrap();
        assert_eq!(output.texts.len(), 1);
        assert!(output.images.is_empty());
        assert_eq!(output.len(), 1);
    }
}
