use std::fmt;

use crate::calculator::constants::*;

/// Named constant set used by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReductionModel {
    #[default]
    V1,
    V2,
}

/// Constants a reduction model contributes to the formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConstants {
    pub base_minutes: f64,
    pub exponent: f64,
    /// Multiplier applied on top of the varietal's own factor.
    pub varietal_adjustment: f64,
}

impl ReductionModel {
    /// Resolve a flag value. Only "v2" selects v2; everything else is v1.
    pub fn from_flag(value: &str) -> Self {
        match value {
            "v2" => ReductionModel::V2,
            _ => ReductionModel::V1,
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            ReductionModel::V1 => "v1",
            ReductionModel::V2 => "v2",
        }
    }

    pub fn constants(self) -> ModelConstants {
        match self {
            ReductionModel::V1 => ModelConstants {
                base_minutes: V1_BASE_MINUTES,
                exponent: V1_EXPONENT,
                varietal_adjustment: V1_VARIETAL_ADJUSTMENT,
            },
            ReductionModel::V2 => ModelConstants {
                base_minutes: V2_BASE_MINUTES,
                exponent: V2_EXPONENT,
                varietal_adjustment: V2_VARIETAL_ADJUSTMENT,
            },
        }
    }
}

impl fmt::Display for ReductionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
