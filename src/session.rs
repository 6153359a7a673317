use crate::calculator::compute_plan;
use crate::flags::Flags;
use crate::models::{
    StewInputs, StewPlan, TemperatureUnit, TomatoStyle, TomatoVarietal, ValidationError,
};
use crate::state::{KeyValueStore, SettingsStore};

pub const DEFAULT_WEIGHT_TEXT: &str = "28";
pub const DEFAULT_VARIETAL: TomatoVarietal = TomatoVarietal::Roma;
pub const DEFAULT_STYLE: TomatoStyle = TomatoStyle::Crushed;

/// Calculator state between user actions: raw text in, plan out.
///
/// Flags are passed in per call; the session never reads them on its own.
pub struct CalculatorSession<S: KeyValueStore> {
    pub weight_text: String,
    pub varietal: TomatoVarietal,
    pub style: TomatoStyle,
    plan: Option<StewPlan>,
    validation_message: Option<String>,
    use_celsius: bool,
    settings: SettingsStore<S>,
}

impl<S: KeyValueStore> CalculatorSession<S> {
    /// Start a session, restoring the remembered inputs and units.
    pub fn new(settings: SettingsStore<S>) -> Self {
        let mut session = Self {
            weight_text: DEFAULT_WEIGHT_TEXT.to_string(),
            varietal: DEFAULT_VARIETAL,
            style: DEFAULT_STYLE,
            plan: None,
            validation_message: None,
            use_celsius: settings.preferred_units_is_celsius(),
            settings,
        };

        if let Some(last) = session.settings.load_last_inputs() {
            tracing::debug!("Restored last inputs: {:?}", last);
            session.weight_text = format!("{:.0}", last.weight_ounces);
            session.varietal = last.varietal;
            session.style = last.style;
        }

        session
    }

    pub fn plan(&self) -> Option<&StewPlan> {
        self.plan.as_ref()
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    pub fn use_celsius(&self) -> bool {
        self.use_celsius
    }

    pub fn unit(&self) -> TemperatureUnit {
        TemperatureUnit::from_celsius_flag(self.use_celsius)
    }

    pub fn settings(&self) -> &SettingsStore<S> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore<S> {
        &mut self.settings
    }

    /// Take in a new flags snapshot.
    ///
    /// The default-units flag only applies before the first plan, and never
    /// over a units choice the user has stored.
    pub fn apply_flags(&mut self, flags: &Flags) {
        if self.plan.is_none() && self.settings.stored_unit().is_none() {
            self.use_celsius = flags.default_celsius;
        }
    }

    /// Parse, validate and compute. Inputs are remembered only on success.
    pub fn compute(&mut self, flags: &Flags) -> Result<&StewPlan, ValidationError> {
        let inputs = match StewInputs::from_text(&self.weight_text, self.varietal, self.style) {
            Ok(inputs) => inputs,
            Err(e) => {
                tracing::debug!("Rejected weight {:?}: {:?}", self.weight_text, e);
                self.validation_message = Some(e.to_string());
                return Err(e);
            }
        };
        self.validation_message = None;

        let model = flags.reduction_model();
        let plan = compute_plan(&inputs, model, flags.show_advanced_tips);
        tracing::info!(
            "Computed {} min ({}) with model {}",
            plan.total_minutes,
            plan.heat_level.tag(),
            model
        );

        self.settings.save_last_inputs(&inputs);
        Ok(&*self.plan.insert(plan))
    }

    /// Flip units and remember the choice.
    pub fn toggle_units(&mut self) {
        self.use_celsius = !self.use_celsius;
        self.settings.save_preferred_units(self.use_celsius);
    }

    pub fn clear_plan(&mut self) {
        self.plan = None;
        self.validation_message = None;
    }
}
