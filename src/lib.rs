pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod flags;
pub mod interface;
pub mod logging;
pub mod models;
pub mod session;
pub mod state;

pub use calculator::{ReductionModel, compute_plan};
pub use error::{Result, StewError};
pub use models::{HeatLevel, StewInputs, StewPlan, TomatoStyle, TomatoVarietal, ValidationError};
pub use session::CalculatorSession;
