use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{TomatoStyle, TomatoVarietal};

/// Smallest accepted weight in ounces (inclusive).
pub const MIN_WEIGHT_OZ: f64 = 4.0;

/// Largest accepted weight in ounces (inclusive).
pub const MAX_WEIGHT_OZ: f64 = 128.0;

/// Why a weight was rejected. The messages are shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid number of ounces.")]
    InvalidNumber,

    #[error("Weight must be between 4 and 128 ounces.")]
    OutOfRange,
}

/// Stew inputs. May hold an invalid weight until `validate` passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StewInputs {
    pub weight_ounces: f64,
    pub varietal: TomatoVarietal,
    pub style: TomatoStyle,
}

impl StewInputs {
    pub fn new(weight_ounces: f64, varietal: TomatoVarietal, style: TomatoStyle) -> Self {
        Self {
            weight_ounces,
            varietal,
            style,
        }
    }

    /// Parse a weight typed by the user and validate the result.
    pub fn from_text(
        text: &str,
        varietal: TomatoVarietal,
        style: TomatoStyle,
    ) -> Result<Self, ValidationError> {
        let inputs = Self::new(parse_weight(text)?, varietal, style);
        inputs.validate()?;
        Ok(inputs)
    }

    /// The first rule this input breaks, if any.
    pub fn validation_error(&self) -> Option<ValidationError> {
        let w = self.weight_ounces;
        if !w.is_finite() {
            return Some(ValidationError::InvalidNumber);
        }
        if !(MIN_WEIGHT_OZ..=MAX_WEIGHT_OZ).contains(&w) {
            return Some(ValidationError::OutOfRange);
        }
        None
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.validation_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Parse weight text. Range is not checked here.
pub fn parse_weight(text: &str) -> Result<f64, ValidationError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_weight(w: f64) -> StewInputs {
        StewInputs::new(w, TomatoVarietal::Roma, TomatoStyle::Crushed)
    }

    #[test]
    fn test_validation_boundaries() {
        assert_eq!(with_weight(f64::NAN).validation_error(), Some(ValidationError::InvalidNumber));
        assert_eq!(
            with_weight(f64::INFINITY).validation_error(),
            Some(ValidationError::InvalidNumber)
        );
        assert_eq!(with_weight(3.9).validation_error(), Some(ValidationError::OutOfRange));
        assert_eq!(with_weight(4.0).validation_error(), None);
        assert_eq!(with_weight(128.0).validation_error(), None);
        assert_eq!(with_weight(128.1).validation_error(), Some(ValidationError::OutOfRange));
        assert_eq!(with_weight(-10.0).validation_error(), Some(ValidationError::OutOfRange));
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight(" 28 "), Ok(28.0));
        assert_eq!(parse_weight("12.5"), Ok(12.5));
        assert_eq!(parse_weight("abc"), Err(ValidationError::InvalidNumber));
        assert_eq!(parse_weight(""), Err(ValidationError::InvalidNumber));
    }

    #[test]
    fn test_from_text() {
        let ok = StewInputs::from_text("56", TomatoVarietal::Cherry, TomatoStyle::Diced).unwrap();
        assert_eq!(ok, StewInputs::new(56.0, TomatoVarietal::Cherry, TomatoStyle::Diced));

        let nan = StewInputs::from_text("NaN", TomatoVarietal::Roma, TomatoStyle::Diced);
        assert_eq!(nan, Err(ValidationError::InvalidNumber));

        let small = StewInputs::from_text("2", TomatoVarietal::Roma, TomatoStyle::Diced);
        assert_eq!(small, Err(ValidationError::OutOfRange));
    }

    #[test]
    fn test_json_field_names() {
        let inputs = StewInputs::new(28.0, TomatoVarietal::SanMarzano, TomatoStyle::WholePeeled);
        let value = serde_json::to_value(inputs).unwrap();
        assert_eq!(value["weightOunces"], 28.0);
        assert_eq!(value["varietal"], "sanMarzano");
        assert_eq!(value["style"], "wholePeeled");
    }
}
