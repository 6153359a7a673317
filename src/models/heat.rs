use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse simmer intensity. Temperature ranges are informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeatLevel {
    LowSimmer,
    MediumSimmer,
}

impl HeatLevel {
    pub const ALL: [HeatLevel; 2] = [HeatLevel::LowSimmer, HeatLevel::MediumSimmer];

    pub fn tag(self) -> &'static str {
        match self {
            HeatLevel::LowSimmer => "lowSimmer",
            HeatLevel::MediumSimmer => "mediumSimmer",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HeatLevel::LowSimmer => "Low Simmer",
            HeatLevel::MediumSimmer => "Medium Simmer",
        }
    }

    pub fn fahrenheit_range_text(self) -> &'static str {
        match self {
            HeatLevel::LowSimmer => "≈185–200°F",
            HeatLevel::MediumSimmer => "≈195–205°F",
        }
    }

    pub fn celsius_range_text(self) -> &'static str {
        match self {
            HeatLevel::LowSimmer => "≈85–93°C",
            HeatLevel::MediumSimmer => "≈90–96°C",
        }
    }

    pub fn range_text(self, unit: TemperatureUnit) -> &'static str {
        match unit {
            TemperatureUnit::Fahrenheit => self.fahrenheit_range_text(),
            TemperatureUnit::Celsius => self.celsius_range_text(),
        }
    }
}

impl fmt::Display for HeatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Display unit for temperature ranges, persisted as a one-letter tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub fn from_celsius_flag(is_celsius: bool) -> Self {
        if is_celsius {
            TemperatureUnit::Celsius
        } else {
            TemperatureUnit::Fahrenheit
        }
    }

    pub fn is_celsius(self) -> bool {
        self == TemperatureUnit::Celsius
    }

    pub fn tag(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Celsius => "C",
        }
    }

    /// Only "C" means Celsius; anything else reads as Fahrenheit.
    pub fn from_tag(tag: &str) -> Self {
        Self::from_celsius_flag(tag == "C")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_text_by_unit() {
        assert_eq!(HeatLevel::LowSimmer.range_text(TemperatureUnit::Fahrenheit), "≈185–200°F");
        assert_eq!(HeatLevel::LowSimmer.range_text(TemperatureUnit::Celsius), "≈85–93°C");
        assert_eq!(HeatLevel::MediumSimmer.range_text(TemperatureUnit::Fahrenheit), "≈195–205°F");
        assert_eq!(HeatLevel::MediumSimmer.range_text(TemperatureUnit::Celsius), "≈90–96°C");
    }

    #[test]
    fn test_serde_tags() {
        for level in HeatLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.tag()));
        }
    }

    #[test]
    fn test_unit_tags() {
        assert_eq!(TemperatureUnit::Celsius.tag(), "C");
        assert_eq!(TemperatureUnit::from_tag("C"), TemperatureUnit::Celsius);
        assert_eq!(TemperatureUnit::from_tag("F"), TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::from_tag("c"), TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Fahrenheit);
    }
}
