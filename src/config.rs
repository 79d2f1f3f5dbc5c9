use serde_json::Value;

use crate::error::{ConvertError, Result};

/// How base geometry (`left/top/width/height`) is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitMode {
    /// Integer pixel values (e.g. `100px`).
    #[default]
    Px,
    /// Percentages of the document dimensions, two decimals (e.g. `5.21%`).
    Percent,
}

/// Options controlling a single conversion.
#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    /// Include layers whose visibility flag is off.
    pub include_hidden: bool,
    /// Emit per-layer progress/warning messages through the context sink.
    pub logging: bool,
    pub units: UnitMode,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            include_hidden: false,
            logging: false,
            units: UnitMode::Px,
        }
    }
}

impl ConvertOptions {
    /// Build options from a loosely-typed JSON map.
    ///
    /// Unknown keys and wrong-typed values are rejected up front rather than
    /// silently ignored, so a typo in an option name never changes behavior
    /// without the caller noticing.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| ConvertError::config("options must be a JSON object"))?;

        let mut options = ConvertOptions::default();
        for (key, entry) in map {
            match key.as_str() {
                "includeHidden" => options.include_hidden = expect_bool(key, entry)?,
                "logging" => options.logging = expect_bool(key, entry)?,
                "units" => {
                    let unit = entry.as_str().ok_or_else(|| {
                        ConvertError::config(format!("option '{key}' must be a string"))
                    })?;
                    options.units = match unit {
                        "px" => UnitMode::Px,
                        "percent" => UnitMode::Percent,
                        other => {
                            return Err(ConvertError::config(format!(
                                "option 'units' must be 'px' or 'percent', got '{other}'"
                            )))
                        }
                    };
                }
                other => {
                    return Err(ConvertError::config(format!(
                        "unrecognized option '{other}'"
                    )))
                }
            }
        }
        Ok(options)
    }
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| ConvertError::config(format!("option '{key}' must be a boolean")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_hidden_excluded_and_quiet() {
        let options = ConvertOptions::default();
        assert!(!options.include_hidden);
        assert!(!options.logging);
        assert_eq!(options.units, UnitMode::Px);
    }

    #[test]
    fn parses_recognized_options() {
        let options = ConvertOptions::from_value(&json!({
            "includeHidden": true,
            "logging": true,
            "units": "percent",
        }))
        .unwrap();
        assert!(options.include_hidden);
        assert!(options.logging);
        assert_eq!(options.units, UnitMode::Percent);
    }

    #[test]
    fn rejects_wrong_typed_option() {
        let err = ConvertOptions::from_value(&json!({ "includeHidden": "yes" })).unwrap_err();
        assert!(err.to_string().contains("includeHidden"));
        assert_eq!(err.kind(), crate::ErrorKind::Config);
    }

    #[test]
    fn rejects_unknown_option() {
        let err = ConvertOptions::from_value(&json!({ "includeHiden": true })).unwrap_err();
        assert!(err.to_string().contains("includeHiden"));
    }

    #[test]
    fn rejects_unknown_unit_mode() {
        let err = ConvertOptions::from_value(&json!({ "units": "em" })).unwrap_err();
        assert!(err.to_string().contains("'em'"));
    }
}
