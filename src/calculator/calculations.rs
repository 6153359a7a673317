use crate::calculator::constants::*;
use crate::calculator::model::ReductionModel;
use crate::models::{HeatLevel, StewInputs, StewPlan, TomatoStyle, TomatoVarietal};

/// Weight scale relative to the reference weight.
///
/// `(weight / 28) ^ exponent`; 1.0 at 28 oz.
pub fn weight_scale(weight_ounces: f64, exponent: f64) -> f64 {
    (weight_ounces / REFERENCE_WEIGHT_OZ).powf(exponent)
}

/// Simmer minutes before rounding, clamped to [20, 120].
///
/// Inputs must already be validated; NaN weights propagate.
pub fn clamped_minutes(inputs: &StewInputs, model: ReductionModel) -> f64 {
    let k = model.constants();
    let varietal_factor = inputs.varietal.reduction_factor() * k.varietal_adjustment;
    let style_factor = inputs.style.reduction_factor();

    let minutes =
        k.base_minutes * weight_scale(inputs.weight_ounces, k.exponent) * varietal_factor * style_factor;

    minutes.clamp(MIN_MINUTES, MAX_MINUTES)
}

/// Heat level for clamped (unrounded) minutes.
pub fn heat_level_for(minutes: f64) -> HeatLevel {
    if minutes < LOW_SIMMER_THRESHOLD_MINUTES {
        HeatLevel::LowSimmer
    } else {
        HeatLevel::MediumSimmer
    }
}

/// Round to whole minutes, halves away from zero.
pub fn round_minutes(minutes: f64) -> u32 {
    minutes.round() as u32
}

pub fn rationale_text(inputs: &StewInputs, minutes: u32, model: ReductionModel) -> String {
    format!(
        "Based on {} oz, {} and {}, model {} suggests {} min.",
        inputs.weight_ounces.round() as i64,
        inputs.varietal.display_name(),
        inputs.style.display_name(),
        model.identifier(),
        minutes
    )
}

/// Tips for the given inputs, in fixed display order. Never empty.
pub fn advanced_tips(inputs: &StewInputs) -> Vec<String> {
    let mut tips = Vec::with_capacity(3);

    if inputs.style == TomatoStyle::WholePeeled {
        tips.push(TIP_CRUSH_WHOLE_PEELED.to_string());
    }

    if matches!(inputs.varietal, TomatoVarietal::Cherry | TomatoVarietal::Beefsteak) {
        tips.push(TIP_SIMMER_UNCOVERED.to_string());
    }

    tips.push(TIP_STIR_AND_SEASON.to_string());
    tips
}

/// Compute a stew plan.
///
/// Formula: clamp(base * (w / 28)^exp * varietal * adj * style, 20, 120)
///
/// Callers validate `inputs` first; this function does not.
pub fn compute_plan(
    inputs: &StewInputs,
    model: ReductionModel,
    include_advanced_tips: bool,
) -> StewPlan {
    let minutes = clamped_minutes(inputs, model);
    let heat_level = heat_level_for(minutes);
    let total_minutes = round_minutes(minutes);

    let advanced_tips = if include_advanced_tips {
        advanced_tips(inputs)
    } else {
        Vec::new()
    };

    StewPlan {
        total_minutes,
        heat_level,
        rationale: rationale_text(inputs, total_minutes, model),
        advanced_tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(w: f64, v: TomatoVarietal, s: TomatoStyle) -> StewInputs {
        StewInputs::new(w, v, s)
    }

    #[test]
    fn test_reference_weight_scale() {
        assert!((weight_scale(28.0, 0.85) - 1.0).abs() < 1e-12);
        assert!((weight_scale(56.0, 1.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_roma_crushed_v1_baseline() {
        let i = inputs(28.0, TomatoVarietal::Roma, TomatoStyle::Crushed);
        let plan = compute_plan(&i, ReductionModel::V1, false);

        assert_eq!(plan.total_minutes, 30);
        assert_eq!(plan.heat_level, HeatLevel::LowSimmer);
        assert!(plan.advanced_tips.is_empty());
        assert_eq!(
            plan.rationale,
            "Based on 28 oz, Roma and Crushed, model v1 suggests 30 min."
        );
    }

    #[test]
    fn test_clamp_floor_and_ceiling() {
        let light = inputs(4.0, TomatoVarietal::SanMarzano, TomatoStyle::Diced);
        assert_eq!(clamped_minutes(&light, ReductionModel::V1), MIN_MINUTES);

        let heavy = inputs(128.0, TomatoVarietal::Beefsteak, TomatoStyle::WholePeeled);
        assert_eq!(clamped_minutes(&heavy, ReductionModel::V2), MAX_MINUTES);
    }

    #[test]
    fn test_heat_threshold() {
        assert_eq!(heat_level_for(34.999), HeatLevel::LowSimmer);
        assert_eq!(heat_level_for(35.0), HeatLevel::MediumSimmer);
        assert_eq!(heat_level_for(35.001), HeatLevel::MediumSimmer);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_minutes(34.5), 35);
        assert_eq!(round_minutes(20.5), 21);
        assert_eq!(round_minutes(34.49), 34);
        assert_eq!(round_minutes(119.5), 120);
    }

    #[test]
    fn test_tips_order() {
        let i = inputs(28.0, TomatoVarietal::Cherry, TomatoStyle::WholePeeled);
        assert_eq!(
            advanced_tips(&i),
            vec![
                TIP_CRUSH_WHOLE_PEELED.to_string(),
                TIP_SIMMER_UNCOVERED.to_string(),
                TIP_STIR_AND_SEASON.to_string(),
            ]
        );

        let plain = inputs(28.0, TomatoVarietal::Roma, TomatoStyle::Diced);
        assert_eq!(advanced_tips(&plain), vec![TIP_STIR_AND_SEASON.to_string()]);
    }

    #[test]
    fn test_rationale_rounds_weight() {
        let i = inputs(12.6, TomatoVarietal::Plum, TomatoStyle::Stewed);
        let text = rationale_text(&i, 21, ReductionModel::V2);
        assert_eq!(text, "Based on 13 oz, Plum and Stewed, model v2 suggests 21 min.");
    }
}
