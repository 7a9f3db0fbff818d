use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[strum(serialize = "Thin", serialize = "100")]
    Thin,
    #[strum(serialize = "Light", serialize = "300")]
    Light,
    #[default]
    #[strum(serialize = "Regular", serialize = "normal", serialize = "400")]
    Regular,
    #[strum(serialize = "Medium", serialize = "500")]
    Medium,
    #[strum(serialize = "Semibold", serialize = "600")]
    Semibold,
    #[strum(serialize = "Bold", serialize = "700")]
    Bold,
    #[strum(serialize = "Black", serialize = "900")]
    Black,
}

impl FontWeight {
    pub fn is_bold(&self) -> bool {
        matches!(self, Self::Semibold | Self::Bold | Self::Black)
    }
}

/// Size and typography of a wheel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Visible height of the wheel. One item stop is a tenth of it.
    pub height: f64,
    /// Font size and resting height of a row.
    pub row_height: f64,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub show_divider: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            height: 300.0,
            row_height: 40.0,
            font_family: "Sans".to_string(),
            font_weight: FontWeight::Regular,
            show_divider: true,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Wheel {name} must be a positive number, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
}

impl WheelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("height", self.height), ("row_height", self.row_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        Ok(())
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate().map(|_| self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_weight_deserialization() {
        let cases = vec![
            ("\"bold\"", FontWeight::Bold),
            ("\"Bold\"", FontWeight::Bold),
            ("\"BOLD\"", FontWeight::Bold),
            ("\"700\"", FontWeight::Bold),
            ("\"normal\"", FontWeight::Regular),
            ("\"regular\"", FontWeight::Regular),
            ("\"semibold\"", FontWeight::Semibold),
        ];

        for (json, expected) in cases {
            let deserialized: FontWeight = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert!(serde_json::from_str::<FontWeight>("\"heavy-ish\"").is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: WheelConfig =
            serde_json::from_str(r#"{ "height": 200, "font_weight": "medium" }"#).unwrap();
        assert_eq!(config.height, 200.0);
        assert_eq!(config.row_height, 40.0);
        assert_eq!(config.font_weight, FontWeight::Medium);
        assert!(config.show_divider);
    }

    #[test]
    fn test_validate_rejects_degenerate_sizes() {
        assert!(WheelConfig::default().validate().is_ok());
        let flat = WheelConfig {
            height: 0.0,
            ..WheelConfig::default()
        };
        assert_eq!(
            flat.validate(),
            Err(ConfigError::InvalidDimension {
                name: "height",
                value: 0.0
            })
        );
        let broken = WheelConfig {
            row_height: f64::NAN,
            ..WheelConfig::default()
        };
        assert!(broken.validated().is_err());
    }
}
