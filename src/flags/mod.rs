mod service;
mod snapshot;
mod source;

pub use service::FlagService;
pub use snapshot::{
    Flags, KEY_DARK_MODE, KEY_DEFAULT_CELSIUS, KEY_ENABLE_LOGIN, KEY_REDUCTION_MODEL,
    KEY_SHOW_ADVANCED_TIPS, KEY_SHOW_UNITS_TOGGLE, KEY_THEME,
};
pub use source::{FlagSource, JsonFlagSource, OfflineFlagSource};
