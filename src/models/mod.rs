mod heat;
mod inputs;
mod plan;
mod tomato;

pub use heat::{HeatLevel, TemperatureUnit};
pub use inputs::{parse_weight, StewInputs, ValidationError, MAX_WEIGHT_OZ, MIN_WEIGHT_OZ};
pub use plan::StewPlan;
pub use tomato::{TomatoStyle, TomatoVarietal};

pub(crate) use tomato::normalize_key;
