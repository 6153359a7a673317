pub mod calculations;
pub mod constants;
pub mod model;

pub use calculations::{
    advanced_tips, clamped_minutes, compute_plan, heat_level_for, rationale_text, round_minutes,
    weight_scale,
};
pub use constants::*;
pub use model::{ModelConstants, ReductionModel};
