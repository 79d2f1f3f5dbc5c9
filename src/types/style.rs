//! Output records consumed by a UI layout system.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A flat style description for one layer.
///
/// `properties` always contains `position: absolute` plus `left`, `top`,
/// `width` and `height`; everything else is conditional. `value` carries the
/// layer's literal content: the text string for text layers, or the rendered
/// image-data reference for image layers (`None` when raster extraction
/// failed). Records are created fresh per layer and never mutated after
/// being returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    /// Source layer name, kept for diagnostics and caller-side matching
    pub name: String,
    /// Style-property name → rendered value
    pub properties: BTreeMap<String, String>,
    /// Literal layer content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl StyleRecord {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }
}

/// The full conversion result: one record per included layer, partitioned
/// by kind, both arrays in document traversal order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StyleOutput {
    pub texts: Vec<StyleRecord>,
    pub images: Vec<StyleRecord>,
}

impl StyleOutput {
    pub fn len(&self) -> usize {
        self.texts.len() + self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.images.is_empty()
    }
}
