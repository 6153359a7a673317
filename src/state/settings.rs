use uuid::Uuid;

use crate::models::{StewInputs, TemperatureUnit};
use crate::state::KeyValueStore;

pub const LAST_INPUTS_KEY: &str = "lastInputs";
pub const PREFERRED_UNITS_KEY: &str = "preferredUnits";
pub const DEVICE_KEY_KEY: &str = "device_uuid";

/// Remembered user settings on top of a key-value store.
///
/// Writes never fail from the caller's point of view: persistence errors
/// are logged and dropped so they cannot block a calculation.
pub struct SettingsStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Store the last inputs that produced a plan.
    pub fn save_last_inputs(&mut self, inputs: &StewInputs) {
        let json = match serde_json::to_string(inputs) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Could not serialize last inputs: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(LAST_INPUTS_KEY, json) {
            tracing::warn!("Could not save last inputs: {}", e);
        }
    }

    /// Last saved inputs. Absent and corrupt records both read as `None`.
    pub fn load_last_inputs(&self) -> Option<StewInputs> {
        let json = self.store.get(LAST_INPUTS_KEY)?;
        match serde_json::from_str(&json) {
            Ok(inputs) => Some(inputs),
            Err(e) => {
                tracing::debug!("Discarding unreadable last inputs: {}", e);
                None
            }
        }
    }

    pub fn clear_last_inputs(&mut self) {
        if let Err(e) = self.store.remove(LAST_INPUTS_KEY) {
            tracing::warn!("Could not clear last inputs: {}", e);
        }
    }

    pub fn save_preferred_units(&mut self, is_celsius: bool) {
        let tag = TemperatureUnit::from_celsius_flag(is_celsius).tag();
        if let Err(e) = self.store.set(PREFERRED_UNITS_KEY, tag.to_string()) {
            tracing::warn!("Could not save preferred units: {}", e);
        }
    }

    /// Defaults to Fahrenheit when nothing is stored.
    pub fn preferred_units_is_celsius(&self) -> bool {
        self.preferred_unit().is_celsius()
    }

    pub fn preferred_unit(&self) -> TemperatureUnit {
        self.stored_unit().unwrap_or_default()
    }

    /// Units the user chose explicitly, if any.
    pub fn stored_unit(&self) -> Option<TemperatureUnit> {
        self.store
            .get(PREFERRED_UNITS_KEY)
            .map(|tag| TemperatureUnit::from_tag(&tag))
    }

    pub fn clear_preferred_units(&mut self) {
        if let Err(e) = self.store.remove(PREFERRED_UNITS_KEY) {
            tracing::warn!("Could not clear preferred units: {}", e);
        }
    }

    /// Stable per-installation identifier, created on first use.
    pub fn device_key(&mut self) -> String {
        if let Some(existing) = self.store.get(DEVICE_KEY_KEY) {
            return existing;
        }
        let key = random_device_key();
        if let Err(e) = self.store.set(DEVICE_KEY_KEY, key.clone()) {
            tracing::warn!("Could not save device key: {}", e);
        }
        key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

/// Random v4 UUID, uppercase.
fn random_device_key() -> String {
    Uuid::new_v4().to_string().to_uppercase()
}
