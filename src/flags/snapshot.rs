use crate::calculator::ReductionModel;
use crate::flags::FlagSource;

pub const KEY_REDUCTION_MODEL: &str = "algo.reductionModel";
pub const KEY_SHOW_ADVANCED_TIPS: &str = "ui.showAdvancedTips";
pub const KEY_ENABLE_LOGIN: &str = "ui.enableLogin";
pub const KEY_DEFAULT_CELSIUS: &str = "units.defaultCelsius";
pub const KEY_SHOW_UNITS_TOGGLE: &str = "ui.showUnitsToggle";
pub const KEY_THEME: &str = "ui.theme";
/// Older name for `ui.theme`, read when `ui.theme` is absent.
pub const KEY_DARK_MODE: &str = "ui.DarkMode";

/// Point-in-time read of the remote flags.
///
/// Only `algo_reduction_model` and `show_advanced_tips` reach the
/// calculator; the rest are display state passed through to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    pub algo_reduction_model: String,
    pub show_advanced_tips: bool,
    pub enable_login: bool,
    pub default_celsius: bool,
    pub show_units_toggle: bool,
    pub show_theme_toggle: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            algo_reduction_model: ReductionModel::V1.identifier().to_string(),
            show_advanced_tips: false,
            enable_login: false,
            default_celsius: false,
            show_units_toggle: true,
            show_theme_toggle: false,
        }
    }
}

impl Flags {
    /// Defaults with a deployment-specific units toggle default.
    pub fn with_units_toggle_default(show_units_toggle: bool) -> Self {
        Self {
            show_units_toggle,
            ..Default::default()
        }
    }

    /// Read every flag from `source`, falling back to `defaults` per key.
    pub fn evaluate(source: &dyn FlagSource, defaults: &Flags) -> Self {
        let theme_default = source.bool_variation(KEY_DARK_MODE, defaults.show_theme_toggle);
        Self {
            algo_reduction_model: source
                .string_variation(KEY_REDUCTION_MODEL, &defaults.algo_reduction_model),
            show_advanced_tips: source
                .bool_variation(KEY_SHOW_ADVANCED_TIPS, defaults.show_advanced_tips),
            enable_login: source.bool_variation(KEY_ENABLE_LOGIN, defaults.enable_login),
            default_celsius: source.bool_variation(KEY_DEFAULT_CELSIUS, defaults.default_celsius),
            show_units_toggle: source
                .bool_variation(KEY_SHOW_UNITS_TOGGLE, defaults.show_units_toggle),
            show_theme_toggle: source.bool_variation(KEY_THEME, theme_default),
        }
    }

    /// Model for the calculator; unknown identifiers fall back to v1.
    pub fn reduction_model(&self) -> ReductionModel {
        ReductionModel::from_flag(&self.algo_reduction_model)
    }

    /// Flag dump, one `key = value` line per flag.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("{} = {}", KEY_REDUCTION_MODEL, self.algo_reduction_model),
            format!("{} = {}", KEY_SHOW_ADVANCED_TIPS, self.show_advanced_tips),
            format!("{} = {}", KEY_ENABLE_LOGIN, self.enable_login),
            format!("{} = {}", KEY_DEFAULT_CELSIUS, self.default_celsius),
            format!("{} = {}", KEY_SHOW_UNITS_TOGGLE, self.show_units_toggle),
            format!("{} = {}", KEY_THEME, self.show_theme_toggle),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{JsonFlagSource, OfflineFlagSource};

    #[test]
    fn test_offline_yields_defaults() {
        let defaults = Flags::default();
        let flags = Flags::evaluate(&OfflineFlagSource, &defaults);
        assert_eq!(flags, defaults);
        assert_eq!(flags.algo_reduction_model, "v1");
        assert!(!flags.show_advanced_tips);
        assert!(!flags.enable_login);
        assert!(!flags.default_celsius);
        assert!(flags.show_units_toggle);
        assert!(!flags.show_theme_toggle);
    }

    #[test]
    fn test_units_toggle_default_is_configurable() {
        let defaults = Flags::with_units_toggle_default(false);
        let flags = Flags::evaluate(&OfflineFlagSource, &defaults);
        assert!(!flags.show_units_toggle);
    }

    #[test]
    fn test_dark_mode_fallback_key() {
        let source = JsonFlagSource::from_json_str(r#"{"ui.DarkMode": true}"#).unwrap();
        let flags = Flags::evaluate(&source, &Flags::default());
        assert!(flags.show_theme_toggle);

        let source =
            JsonFlagSource::from_json_str(r#"{"ui.DarkMode": true, "ui.theme": false}"#).unwrap();
        let flags = Flags::evaluate(&source, &Flags::default());
        assert!(!flags.show_theme_toggle);
    }

    #[test]
    fn test_reduction_model_fallback() {
        let mut flags = Flags::default();
        assert_eq!(flags.reduction_model(), ReductionModel::V1);
        flags.algo_reduction_model = "v2".to_string();
        assert_eq!(flags.reduction_model(), ReductionModel::V2);
        flags.algo_reduction_model = "experimental".to_string();
        assert_eq!(flags.reduction_model(), ReductionModel::V1);
    }
}
