pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_style, prompt_varietal, prompt_weight, prompt_yes_no, resolve_style, resolve_varietal,
};
pub use render::{display_flags, display_plan, display_units, format_plan};
