/// Weight (oz) at which the weight scale equals 1.0.
pub const REFERENCE_WEIGHT_OZ: f64 = 28.0;

/// Clamp range for computed minutes.
pub const MIN_MINUTES: f64 = 20.0;
pub const MAX_MINUTES: f64 = 120.0;

/// Clamped minutes below this are a low simmer.
pub const LOW_SIMMER_THRESHOLD_MINUTES: f64 = 35.0;

// ─────────────────────────────────────────────────────────────────────────────
// Model constant sets
// ─────────────────────────────────────────────────────────────────────────────

pub const V1_BASE_MINUTES: f64 = 30.0;
pub const V1_EXPONENT: f64 = 0.85;
pub const V1_VARIETAL_ADJUSTMENT: f64 = 1.0;

pub const V2_BASE_MINUTES: f64 = 28.0;
pub const V2_EXPONENT: f64 = 0.90;
/// v2 runs every varietal 3% longer.
pub const V2_VARIETAL_ADJUSTMENT: f64 = 1.03;

// ─────────────────────────────────────────────────────────────────────────────
// Advanced tips
// ─────────────────────────────────────────────────────────────────────────────

pub const TIP_CRUSH_WHOLE_PEELED: &str = "Crush by hand after 10–15 min to increase surface area.";
pub const TIP_SIMMER_UNCOVERED: &str = "Simmer partially uncovered to aid reduction.";
pub const TIP_STIR_AND_SEASON: &str =
    "Stir every 5–7 min to prevent scorching; add salt early, basil late; finish with olive oil off-heat.";
