use crate::flags::Flags;
use crate::models::{StewPlan, TemperatureUnit};

/// Plan as printable text.
pub fn format_plan(plan: &StewPlan, unit: TemperatureUnit) -> String {
    let mut out = String::new();
    out.push_str("=== Stew Plan ===\n\n");
    out.push_str(&format!("Simmer: {} min\n", plan.total_minutes));
    out.push_str(&format!("Heat:   {}\n\n", plan.temperature_text(unit)));
    out.push_str(&plan.rationale);
    out.push('\n');

    if !plan.advanced_tips.is_empty() {
        out.push_str("\n--- Tips ---\n");
        for (i, tip) in plan.advanced_tips.iter().enumerate() {
            out.push_str(&format!("{:>3}. {}\n", i + 1, tip));
        }
    }

    out
}

/// Display a stew plan.
pub fn display_plan(plan: &StewPlan, unit: TemperatureUnit, show_units_toggle: bool) {
    println!();
    print!("{}", format_plan(plan, unit));
    if show_units_toggle {
        let other = if unit.is_celsius() { "f" } else { "c" };
        println!();
        println!("(Switch units with `units {}`.)", other);
    }
    println!();
}

pub fn display_units(unit: TemperatureUnit) {
    let name = if unit.is_celsius() {
        "Celsius"
    } else {
        "Fahrenheit"
    };
    println!("Preferred units: {} ({})", name, unit.tag());
}

pub fn display_flags(flags: &Flags) {
    println!("=== Flags ===");
    for line in flags.summary_lines() {
        println!("  {}", line);
    }
    println!("  (reduction model in use: {})", flags.reduction_model());
}
