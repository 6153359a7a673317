use serde::{Deserialize, Serialize};

use crate::models::{HeatLevel, TemperatureUnit};

/// A computed stew recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StewPlan {
    /// Recommended simmer time, whole minutes.
    pub total_minutes: u32,

    /// Simmer intensity.
    pub heat_level: HeatLevel,

    /// One-sentence explanation of the inputs behind the number.
    pub rationale: String,

    /// Optional cooking tips, in display order. Empty when tips are off.
    pub advanced_tips: Vec<String>,
}

impl StewPlan {
    pub fn fahrenheit_text(&self) -> String {
        self.temperature_text(TemperatureUnit::Fahrenheit)
    }

    pub fn celsius_text(&self) -> String {
        self.temperature_text(TemperatureUnit::Celsius)
    }

    pub fn temperature_text(&self, unit: TemperatureUnit) -> String {
        format!(
            "{} ({})",
            self.heat_level.display_name(),
            self.heat_level.range_text(unit)
        )
    }
}
