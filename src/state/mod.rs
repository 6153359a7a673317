mod settings;
mod store;

pub use settings::{DEVICE_KEY_KEY, LAST_INPUTS_KEY, PREFERRED_UNITS_KEY, SettingsStore};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
