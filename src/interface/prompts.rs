use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{Result, StewError};
use crate::models::{normalize_key, TomatoStyle, TomatoVarietal};

/// Minimum Jaro-Winkler similarity for a fuzzy match.
const FUZZY_THRESHOLD: f64 = 0.8;

/// Resolve free text to one of `options`.
///
/// Exact tag or display-name matches win; otherwise the most similar display
/// name above the threshold is taken.
fn resolve_choice<T>(
    input: &str,
    options: &[T],
    name: fn(T) -> &'static str,
    kind: &str,
) -> Result<T>
where
    T: Copy + FromStr,
{
    if let Ok(exact) = input.parse::<T>() {
        return Ok(exact);
    }

    let key = normalize_key(input);
    let best = options
        .iter()
        .map(|&option| (option, jaro_winkler(&normalize_key(name(option)), &key)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    match best {
        Some((option, score)) => {
            tracing::debug!("Resolved {} '{}' to '{}' ({:.2})", kind, input, name(option), score);
            Ok(option)
        }
        None => Err(StewError::InvalidInput(format!(
            "Unknown {} '{}'. Expected one of: {}",
            kind,
            input.trim(),
            options.iter().map(|&o| name(o)).collect::<Vec<_>>().join(", ")
        ))),
    }
}

/// Resolve a varietal typed by the user, tolerating small typos.
pub fn resolve_varietal(input: &str) -> Result<TomatoVarietal> {
    resolve_choice(
        input,
        &TomatoVarietal::ALL,
        TomatoVarietal::display_name,
        "varietal",
    )
}

/// Resolve a style typed by the user, tolerating small typos.
pub fn resolve_style(input: &str) -> Result<TomatoStyle> {
    resolve_choice(input, &TomatoStyle::ALL, TomatoStyle::display_name, "style")
}

/// Prompt for the tomato weight in ounces. Returns the raw text.
pub fn prompt_weight(default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("How many ounces of tomatoes?")
        .default(default.to_string())
        .interact_text()?;
    Ok(input)
}

pub fn prompt_varietal(default: TomatoVarietal) -> Result<TomatoVarietal> {
    let items: Vec<&str> = TomatoVarietal::ALL.iter().map(|v| v.display_name()).collect();
    let default_idx = TomatoVarietal::ALL
        .iter()
        .position(|&v| v == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Which varietal?")
        .items(&items)
        .default(default_idx)
        .interact()?;

    Ok(TomatoVarietal::ALL[selection])
}

pub fn prompt_style(default: TomatoStyle) -> Result<TomatoStyle> {
    let items: Vec<&str> = TomatoStyle::ALL.iter().map(|s| s.display_name()).collect();
    let default_idx = TomatoStyle::ALL
        .iter()
        .position(|&s| s == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Which style?")
        .items(&items)
        .default(default_idx)
        .interact()?;

    Ok(TomatoStyle::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
