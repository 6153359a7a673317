use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};

use crate::flags::{Flags, FlagSource, JsonFlagSource};

/// Shared flags snapshot.
///
/// Starts at the defaults and is overwritten whole by each refresh; the last
/// refresh to finish wins. Clones share the same snapshot.
#[derive(Debug, Clone)]
pub struct FlagService {
    current: Arc<RwLock<Flags>>,
    defaults: Flags,
    context_key: String,
}

impl FlagService {
    pub fn new(defaults: Flags, context_key: impl Into<String>) -> Self {
        Self {
            current: Arc::new(RwLock::new(defaults.clone())),
            defaults,
            context_key: context_key.into(),
        }
    }

    /// Key identifying this installation to the flag source.
    pub fn context_key(&self) -> &str {
        &self.context_key
    }

    pub fn defaults(&self) -> &Flags {
        &self.defaults
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> Flags {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Evaluate `source` now and publish the result.
    pub fn refresh(&self, source: &dyn FlagSource) -> Flags {
        let flags = Flags::evaluate(source, &self.defaults);
        self.publish(flags.clone(), "fetched");
        flags
    }

    /// Refresh on a background thread. Until it finishes, readers see the
    /// previous snapshot.
    pub fn spawn_refresh<S>(&self, source: S) -> JoinHandle<()>
    where
        S: FlagSource + Send + 'static,
    {
        let service = self.clone();
        thread::spawn(move || {
            service.refresh(&source);
        })
    }

    /// Start flag delivery.
    ///
    /// Without a source path the defaults stay in place. With one, the file
    /// is read on a background thread; a failed read leaves the defaults.
    pub fn configure(&self, source_path: Option<PathBuf>) -> Option<JoinHandle<()>> {
        let Some(path) = source_path else {
            tracing::info!("No flag source configured. Operating with default flags (offline).");
            log_flags(&self.snapshot(), "defaults");
            return None;
        };

        tracing::info!(
            "Fetching flags from {} for context {}",
            path.display(),
            self.context_key
        );
        let service = self.clone();
        Some(thread::spawn(move || match JsonFlagSource::open(&path) {
            Ok(source) => {
                service.refresh(&source);
            }
            Err(e) => {
                tracing::warn!(
                    "Could not read flags from {}: {}. Keeping current flags.",
                    path.display(),
                    e
                );
            }
        }))
    }

    fn publish(&self, flags: Flags, context: &str) {
        log_flags(&flags, context);
        match self.current.write() {
            Ok(mut guard) => *guard = flags,
            Err(poisoned) => *poisoned.into_inner() = flags,
        }
    }
}

fn log_flags(flags: &Flags, context: &str) {
    tracing::info!("Flags ({}):\n  {}", context, flags.summary_lines().join("\n  "));
}
