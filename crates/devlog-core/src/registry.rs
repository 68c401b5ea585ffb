//! Category registry and the process-wide handle to it
//!
//! A [`CategoryRegistry`] decides which categories produce output. Host code
//! can pass one around explicitly, or use the process-wide instance through
//! [`global`], [`init_global`] and [`destroy_global`].

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::category::{CategoryState, LogCategory};
use crate::config::LogConfig;

/// Enabled/disabled state for every [`LogCategory`]
///
/// Every category has a slot from construction on, so lookups never miss.
/// Slots are atomics, so a shared registry can be toggled and queried from
/// any thread without locking.
pub struct CategoryRegistry {
    states: [AtomicBool; LogCategory::COUNT],
}

impl CategoryRegistry {
    /// Create a registry with every category enabled
    pub fn new() -> Self {
        Self {
            states: std::array::from_fn(|_| AtomicBool::new(true)),
        }
    }

    /// Create a registry and apply a startup configuration to it
    pub fn from_config(config: &LogConfig) -> Self {
        let registry = Self::new();
        registry.apply_config(config);
        registry
    }

    /// Apply category states from a configuration
    ///
    /// Categories the config does not mention are left untouched.
    pub fn apply_config(&self, config: &LogConfig) {
        for (category, state) in &config.categories {
            self.set_state(*category, *state);
        }
    }

    /// Let log calls for this category print
    pub fn enable(&self, category: LogCategory) {
        self.set_state(category, CategoryState::Enabled);
    }

    /// Suppress log calls for this category
    pub fn disable(&self, category: LogCategory) {
        self.set_state(category, CategoryState::Disabled);
    }

    /// Set the state of one category
    pub fn set_state(&self, category: LogCategory, state: CategoryState) {
        self.states[category.index()].store(state.is_enabled(), Ordering::SeqCst);
    }

    /// Current state of one category
    pub fn state(&self, category: LogCategory) -> CategoryState {
        CategoryState::from(self.states[category.index()].load(Ordering::SeqCst))
    }

    /// Check if a category currently prints
    pub fn is_enabled(&self, category: LogCategory) -> bool {
        self.state(category) == CategoryState::Enabled
    }

    /// Check if a category is currently suppressed
    pub fn is_disabled(&self, category: LogCategory) -> bool {
        self.state(category) == CategoryState::Disabled
    }

    /// Snapshot of all states, in [`LogCategory::ALL`] order
    pub fn states(&self) -> Vec<(LogCategory, CategoryState)> {
        LogCategory::ALL
            .iter()
            .map(|c| (*c, self.state(*c)))
            .collect()
    }

    /// Enable every category again
    pub fn reset(&self) {
        for category in LogCategory::ALL {
            self.enable(category);
        }
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CategoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.states()).finish()
    }
}

// Process-wide instance. Reads go through the atomic slot; the mutex only
// serializes construction, replacement and teardown.
static GLOBAL_REGISTRY: Lazy<ArcSwapOption<CategoryRegistry>> = Lazy::new(ArcSwapOption::empty);
static GLOBAL_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Get the process-wide registry, creating it on first use
///
/// Once the instance exists this is a lock-free atomic load. Concurrent
/// first use re-checks under the construction lock, so exactly one instance
/// is built.
pub fn global() -> Arc<CategoryRegistry> {
    if let Some(registry) = GLOBAL_REGISTRY.load_full() {
        return registry;
    }

    let _guard = GLOBAL_LOCK.lock();
    if let Some(registry) = GLOBAL_REGISTRY.load_full() {
        return registry;
    }

    let registry = Arc::new(CategoryRegistry::new());
    GLOBAL_REGISTRY.store(Some(Arc::clone(&registry)));
    registry
}

/// Install an explicitly built registry as the process-wide instance
///
/// Returns the instance it replaced, if there was one.
pub fn init_global(registry: CategoryRegistry) -> Option<Arc<CategoryRegistry>> {
    let _guard = GLOBAL_LOCK.lock();
    GLOBAL_REGISTRY.swap(Some(Arc::new(registry)))
}

/// Tear down the process-wide registry
///
/// The next call to [`global`] builds a fresh one with every category
/// enabled. Handles obtained earlier keep pointing at the old instance.
/// Returns `false` if there was nothing to tear down.
pub fn destroy_global() -> bool {
    let _guard = GLOBAL_LOCK.lock();
    GLOBAL_REGISTRY.swap(None).is_some()
}

/// Check whether the process-wide registry currently exists
pub fn is_global_initialized() -> bool {
    GLOBAL_REGISTRY.load().is_some()
}

/// Serializes tests that touch the process-wide registry
#[cfg(test)]
pub(crate) fn global_test_guard() -> parking_lot::MutexGuard<'static, ()> {
    static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
    TEST_LOCK.lock()
}
