use std::path::PathBuf;

use clap::Parser;

use tomato_steward::cli::{Cli, Command, UnitsAction};
use tomato_steward::config::AppConfig;
use tomato_steward::error::Result;
use tomato_steward::flags::{FlagService, Flags};
use tomato_steward::interface::{
    display_flags, display_plan, display_units, prompt_style, prompt_varietal, prompt_weight,
    prompt_yes_no, resolve_style, resolve_varietal,
};
use tomato_steward::logging;
use tomato_steward::models::TemperatureUnit;
use tomato_steward::session::CalculatorSession;
use tomato_steward::state::{JsonFileStore, SettingsStore};

type Settings = SettingsStore<JsonFileStore>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init(&config.log_filter);

    let store_path = cli.store.unwrap_or_else(|| config.store_path.clone());
    let flags_path = cli.flags.or_else(|| config.flags.source_path.clone());
    tracing::debug!("Using settings file {}", store_path.display());

    let settings = SettingsStore::new(JsonFileStore::open(&store_path));
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            weight,
            varietal,
            style,
            json,
            celsius,
            fahrenheit,
        } => {
            let unit_override = if celsius {
                Some(TemperatureUnit::Celsius)
            } else if fahrenheit {
                Some(TemperatureUnit::Fahrenheit)
            } else {
                None
            };
            cmd_plan(
                settings,
                flags_path,
                &config,
                PlanArgs {
                    weight,
                    varietal,
                    style,
                    json,
                    unit_override,
                },
            )
        }
        Command::Units { action } => cmd_units(settings, action),
        Command::Flags => cmd_flags(settings, flags_path, &config),
        Command::Reset { inputs, units, yes } => cmd_reset(settings, inputs, units, yes),
    }
}

struct PlanArgs {
    weight: Option<String>,
    varietal: Option<String>,
    style: Option<String>,
    json: bool,
    unit_override: Option<TemperatureUnit>,
}

/// Start the flag service and wait for its first fetch.
///
/// A single CLI run computes once, so it waits rather than using defaults.
fn start_flags(settings: &mut Settings, flags_path: Option<PathBuf>, config: &AppConfig) -> Flags {
    let defaults = Flags::with_units_toggle_default(config.flags.show_units_toggle);
    let service = FlagService::new(defaults, settings.device_key());

    if let Some(handle) = service.configure(flags_path) {
        if handle.join().is_err() {
            tracing::warn!("Flag refresh thread panicked. Using default flags.");
        }
    }

    service.snapshot()
}

/// Compute and display a stew plan.
fn cmd_plan(
    mut settings: Settings,
    flags_path: Option<PathBuf>,
    config: &AppConfig,
    args: PlanArgs,
) -> Result<()> {
    let flags = start_flags(&mut settings, flags_path, config);

    let mut session = CalculatorSession::new(settings);
    session.apply_flags(&flags);

    let interactive = args.weight.is_none() && args.varietal.is_none() && args.style.is_none();

    if interactive {
        session.weight_text = prompt_weight(&session.weight_text)?;
        session.varietal = prompt_varietal(session.varietal)?;
        session.style = prompt_style(session.style)?;
    } else {
        if let Some(weight) = args.weight {
            session.weight_text = weight;
        }
        if let Some(varietal) = args.varietal {
            session.varietal = resolve_varietal(&varietal)?;
        }
        if let Some(style) = args.style {
            session.style = resolve_style(&style)?;
        }
    }

    let plan = session.compute(&flags)?.clone();
    let unit = args.unit_override.unwrap_or_else(|| session.unit());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan, unit, flags.show_units_toggle);
    }

    Ok(())
}

/// Show or change the preferred units.
fn cmd_units(settings: Settings, action: Option<UnitsAction>) -> Result<()> {
    let mut session = CalculatorSession::new(settings);

    match action {
        None => {}
        Some(UnitsAction::Toggle) => session.toggle_units(),
        Some(UnitsAction::C) => session.settings_mut().save_preferred_units(true),
        Some(UnitsAction::F) => session.settings_mut().save_preferred_units(false),
    }

    display_units(session.settings().preferred_unit());
    Ok(())
}

/// Show the effective flag values.
fn cmd_flags(mut settings: Settings, flags_path: Option<PathBuf>, config: &AppConfig) -> Result<()> {
    let flags = start_flags(&mut settings, flags_path, config);
    display_flags(&flags);
    Ok(())
}

/// Forget remembered state.
fn cmd_reset(mut settings: Settings, inputs: bool, units: bool, yes: bool) -> Result<()> {
    if !inputs && !units {
        println!("Please specify at least one reset option:");
        println!("  --inputs  Forget the last weight, varietal and style");
        println!("  --units   Forget the units preference (back to Fahrenheit)");
        return Ok(());
    }

    if !yes && !prompt_yes_no("Forget remembered settings?", true)? {
        println!("Nothing changed.");
        return Ok(());
    }

    if inputs {
        settings.clear_last_inputs();
        println!("Forgot last inputs.");
    }

    if units {
        settings.clear_preferred_units();
        println!("Reset units to Fahrenheit.");
    }

    Ok(())
}
