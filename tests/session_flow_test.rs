use tempfile::TempDir;

use tomato_steward::flags::{FlagService, Flags, JsonFlagSource};
use tomato_steward::models::{
    HeatLevel, TemperatureUnit, TomatoStyle, TomatoVarietal, ValidationError,
};
use tomato_steward::session::CalculatorSession;
use tomato_steward::state::{JsonFileStore, MemoryStore, SettingsStore};

#[test]
fn test_remembers_inputs_between_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut first = CalculatorSession::new(SettingsStore::new(JsonFileStore::open(&path)));
    first.weight_text = "56".to_string();
    first.varietal = TomatoVarietal::Beefsteak;
    first.style = TomatoStyle::WholePeeled;
    first.compute(&Flags::default()).unwrap();

    let second = CalculatorSession::new(SettingsStore::new(JsonFileStore::open(&path)));
    assert_eq!(second.weight_text, "56");
    assert_eq!(second.varietal, TomatoVarietal::Beefsteak);
    assert_eq!(second.style, TomatoStyle::WholePeeled);
    assert!(second.plan().is_none());
}

#[test]
fn test_failed_compute_keeps_previous_record() {
    let mut session = CalculatorSession::new(SettingsStore::new(MemoryStore::new()));
    session.weight_text = "40".to_string();
    session.compute(&Flags::default()).unwrap();

    session.weight_text = "3.9".to_string();
    assert_eq!(session.compute(&Flags::default()), Err(ValidationError::OutOfRange));

    let saved = session.settings().load_last_inputs().unwrap();
    assert_eq!(saved.weight_ounces, 40.0);
}

#[test]
fn test_flags_select_model_and_tips() {
    let service = FlagService::new(Flags::default(), "test-device");
    let mut session = CalculatorSession::new(SettingsStore::new(MemoryStore::new()));
    session.weight_text = "56".to_string();
    session.varietal = TomatoVarietal::Beefsteak;
    session.style = TomatoStyle::WholePeeled;

    // Defaults until the refresh arrives: v1, no tips
    let plan = session.compute(&service.snapshot()).unwrap().clone();
    assert!(plan.rationale.contains("model v1"));
    assert!(plan.advanced_tips.is_empty());

    let source = JsonFlagSource::from_json_str(
        r#"{"algo.reductionModel": "v2", "ui.showAdvancedTips": true}"#,
    )
    .unwrap();
    service.spawn_refresh(source).join().unwrap();

    let plan = session.compute(&service.snapshot()).unwrap();
    assert_eq!(plan.total_minutes, 66);
    assert_eq!(plan.heat_level, HeatLevel::MediumSimmer);
    assert_eq!(plan.advanced_tips.len(), 3);
}

#[test]
fn test_unknown_model_flag_falls_back_to_v1() {
    let service = FlagService::new(Flags::default(), "test-device");
    let source = JsonFlagSource::from_json_str(r#"{"algo.reductionModel": "v9"}"#).unwrap();
    service.refresh(&source);

    let mut session = CalculatorSession::new(SettingsStore::new(MemoryStore::new()));
    let plan = session.compute(&service.snapshot()).unwrap();
    assert_eq!(plan.total_minutes, 30);
    assert!(plan.rationale.contains("model v1"));
}

#[test]
fn test_stored_units_survive_default_flags_in_next_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    // `units c`, then a later `plan` run with default flags
    let mut settings = SettingsStore::new(JsonFileStore::open(&path));
    settings.save_preferred_units(true);

    let mut session = CalculatorSession::new(SettingsStore::new(JsonFileStore::open(&path)));
    session.apply_flags(&Flags::default());
    assert!(session.use_celsius());
    assert_eq!(session.unit(), TemperatureUnit::Celsius);

    // With nothing stored, the flag still picks the starting unit
    let fresh = dir.path().join("fresh.json");
    let mut session = CalculatorSession::new(SettingsStore::new(JsonFileStore::open(&fresh)));
    session.apply_flags(&Flags {
        default_celsius: true,
        ..Flags::default()
    });
    assert!(session.use_celsius());
}
