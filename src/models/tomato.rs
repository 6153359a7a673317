use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StewError;

/// Tomato cultivar. The factor scales cook time by moisture and structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TomatoVarietal {
    Roma,
    SanMarzano,
    Cherry,
    Genovese,
    Beefsteak,
    Plum,
}

impl TomatoVarietal {
    pub const ALL: [TomatoVarietal; 6] = [
        TomatoVarietal::Roma,
        TomatoVarietal::SanMarzano,
        TomatoVarietal::Cherry,
        TomatoVarietal::Genovese,
        TomatoVarietal::Beefsteak,
        TomatoVarietal::Plum,
    ];

    /// Stable tag used for persistence.
    pub fn tag(self) -> &'static str {
        match self {
            TomatoVarietal::Roma => "roma",
            TomatoVarietal::SanMarzano => "sanMarzano",
            TomatoVarietal::Cherry => "cherry",
            TomatoVarietal::Genovese => "genovese",
            TomatoVarietal::Beefsteak => "beefsteak",
            TomatoVarietal::Plum => "plum",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TomatoVarietal::Roma => "Roma",
            TomatoVarietal::SanMarzano => "San Marzano",
            TomatoVarietal::Cherry => "Cherry",
            TomatoVarietal::Genovese => "Genovese",
            TomatoVarietal::Beefsteak => "Beefsteak",
            TomatoVarietal::Plum => "Plum",
        }
    }

    /// Multiplicative time factor based on varietal moisture and structure.
    pub fn reduction_factor(self) -> f64 {
        match self {
            TomatoVarietal::Roma => 1.00,
            TomatoVarietal::SanMarzano => 0.95,
            TomatoVarietal::Cherry => 1.10,
            TomatoVarietal::Genovese => 1.05,
            TomatoVarietal::Beefsteak => 1.12,
            TomatoVarietal::Plum => 1.02,
        }
    }
}

/// Preparation form. The factor scales cook time by exposed surface area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TomatoStyle {
    Diced,
    WholePeeled,
    Crushed,
    Stewed,
}

impl TomatoStyle {
    pub const ALL: [TomatoStyle; 4] = [
        TomatoStyle::Diced,
        TomatoStyle::WholePeeled,
        TomatoStyle::Crushed,
        TomatoStyle::Stewed,
    ];

    /// Stable tag used for persistence.
    pub fn tag(self) -> &'static str {
        match self {
            TomatoStyle::Diced => "diced",
            TomatoStyle::WholePeeled => "wholePeeled",
            TomatoStyle::Crushed => "crushed",
            TomatoStyle::Stewed => "stewed",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TomatoStyle::Diced => "Diced",
            TomatoStyle::WholePeeled => "Whole Peeled",
            TomatoStyle::Crushed => "Crushed",
            TomatoStyle::Stewed => "Stewed",
        }
    }

    /// Multiplicative time factor based on style surface area and prep.
    pub fn reduction_factor(self) -> f64 {
        match self {
            TomatoStyle::Diced => 0.95,
            TomatoStyle::WholePeeled => 1.10,
            TomatoStyle::Crushed => 1.00,
            TomatoStyle::Stewed => 1.08,
        }
    }
}

/// Canonical lookup key: lowercase with spaces, dashes and underscores removed.
pub(crate) fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for TomatoVarietal {
    type Err = StewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        TomatoVarietal::ALL
            .into_iter()
            .find(|v| normalize_key(v.tag()) == key || normalize_key(v.display_name()) == key)
            .ok_or_else(|| StewError::InvalidInput(format!("Unknown varietal: {}", s.trim())))
    }
}

impl FromStr for TomatoStyle {
    type Err = StewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        TomatoStyle::ALL
            .into_iter()
            .find(|v| normalize_key(v.tag()) == key || normalize_key(v.display_name()) == key)
            .ok_or_else(|| StewError::InvalidInput(format!("Unknown style: {}", s.trim())))
    }
}

impl fmt::Display for TomatoVarietal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl fmt::Display for TomatoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_ranges() {
        for v in TomatoVarietal::ALL {
            let f = v.reduction_factor();
            assert!((0.95..=1.12).contains(&f), "{} out of range: {}", v, f);
        }
        for s in TomatoStyle::ALL {
            let f = s.reduction_factor();
            assert!((0.95..=1.10).contains(&f), "{} out of range: {}", s, f);
        }
    }

    #[test]
    fn test_parse_tag_and_display_name() {
        assert_eq!("sanMarzano".parse::<TomatoVarietal>().unwrap(), TomatoVarietal::SanMarzano);
        assert_eq!("San Marzano".parse::<TomatoVarietal>().unwrap(), TomatoVarietal::SanMarzano);
        assert_eq!("san_marzano".parse::<TomatoVarietal>().unwrap(), TomatoVarietal::SanMarzano);
        assert_eq!("WHOLE-PEELED".parse::<TomatoStyle>().unwrap(), TomatoStyle::WholePeeled);
        assert!("heirloom".parse::<TomatoVarietal>().is_err());
        assert!("".parse::<TomatoStyle>().is_err());
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&TomatoVarietal::SanMarzano).unwrap();
        assert_eq!(json, "\"sanMarzano\"");
        let json = serde_json::to_string(&TomatoStyle::WholePeeled).unwrap();
        assert_eq!(json, "\"wholePeeled\"");

        for v in TomatoVarietal::ALL {
            assert_eq!(serde_json::to_string(&v).unwrap(), format!("\"{}\"", v.tag()));
        }
    }
}
