//! Soil measurement inputs submitted for crop prediction

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four-field soil vector a user edits before requesting a
/// prediction. Wire names follow the prediction service's flat payload.
///
/// Values are whatever the user typed, parsed as `f64`. Nothing here is
/// range-checked: negative pH or a NaN from unparseable text is passed
/// through to the service unchanged (`serde_json` writes non-finite
/// floats as `null`, matching `JSON.stringify`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilInputs {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    pub ph: f64,
}

impl Default for SoilInputs {
    fn default() -> Self {
        Self {
            nitrogen: 50.0,
            phosphorus: 30.0,
            potassium: 40.0,
            ph: 6.5,
        }
    }
}

impl SoilInputs {
    /// Overwrite one field with an already-parsed value.
    pub fn set(&mut self, field: SoilField, value: f64) {
        match field {
            SoilField::Nitrogen => self.nitrogen = value,
            SoilField::Phosphorus => self.phosphorus = value,
            SoilField::Potassium => self.potassium = value,
            SoilField::Ph => self.ph = value,
        }
    }

    /// Read one field back.
    pub fn get(&self, field: SoilField) -> f64 {
        match field {
            SoilField::Nitrogen => self.nitrogen,
            SoilField::Phosphorus => self.phosphorus,
            SoilField::Potassium => self.potassium,
            SoilField::Ph => self.ph,
        }
    }
}

/// The recognized soil input fields, named by their wire keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilField {
    Nitrogen,
    Phosphorus,
    Potassium,
    Ph,
}

impl SoilField {
    /// The wire key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            SoilField::Nitrogen => "N",
            SoilField::Phosphorus => "P",
            SoilField::Potassium => "K",
            SoilField::Ph => "ph",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized soil field: {0}")]
pub struct UnknownSoilField(String);

impl FromStr for SoilField {
    type Err = UnknownSoilField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(SoilField::Nitrogen),
            "P" => Ok(SoilField::Phosphorus),
            "K" => Ok(SoilField::Potassium),
            "ph" => Ok(SoilField::Ph),
            other => Err(UnknownSoilField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_form_values() {
        let soil = SoilInputs::default();
        assert_eq!(soil.nitrogen, 50.0);
        assert_eq!(soil.phosphorus, 30.0);
        assert_eq!(soil.potassium, 40.0);
        assert_eq!(soil.ph, 6.5);
    }

    #[test]
    fn set_overwrites_only_the_named_field() {
        let mut soil = SoilInputs::default();
        soil.set(SoilField::Potassium, 80.0);

        assert_eq!(soil.potassium, 80.0);
        assert_eq!(soil.nitrogen, 50.0);
        assert_eq!(soil.phosphorus, 30.0);
        assert_eq!(soil.ph, 6.5);
    }

    #[test]
    fn field_keys_round_trip() {
        for field in [
            SoilField::Nitrogen,
            SoilField::Phosphorus,
            SoilField::Potassium,
            SoilField::Ph,
        ] {
            assert_eq!(field.key().parse::<SoilField>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        assert!("temperature".parse::<SoilField>().is_err());
        assert!("n".parse::<SoilField>().is_err());
        assert!("pH".parse::<SoilField>().is_err());
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(SoilInputs::default()).unwrap();
        assert_eq!(json["N"], 50.0);
        assert_eq!(json["P"], 30.0);
        assert_eq!(json["K"], 40.0);
        assert_eq!(json["ph"], 6.5);
    }

    #[test]
    fn non_finite_values_serialize_as_null() {
        let mut soil = SoilInputs::default();
        soil.set(SoilField::Nitrogen, f64::NAN);

        let json = serde_json::to_value(soil).unwrap();
        assert!(json["N"].is_null());
        assert_eq!(json["P"], 30.0);
    }
}
