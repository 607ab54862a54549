use crate::domain::ManifestDefaults;
use crate::ports::ManifestStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ManifestStore> {
    store: S,
    defaults: ManifestDefaults,
}

impl<S: ManifestStore> AppContext<S> {
    /// Create a new application context with the fixed manifest identities.
    pub fn new(store: S) -> Self {
        Self { store, defaults: ManifestDefaults::default() }
    }

    /// Get a reference to the manifest store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the manifest identity defaults.
    pub fn defaults(&self) -> &ManifestDefaults {
        &self.defaults
    }
}
