use tracing::debug;

use super::banner::{BannerConfig, BannerUpdate};

/// Owner of the live banner configuration
/// Session-only: nothing here is ever written to disk
pub struct ConfigStore {
    config: BannerConfig,

    /// Bumped on every update so consumers can tell snapshots apart
    revision: u64,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(BannerConfig::default())
    }
}

impl ConfigStore {
    pub fn new(initial: BannerConfig) -> Self {
        Self {
            config: initial,
            revision: 0,
        }
    }

    /// Read-only view of the current configuration
    pub fn snapshot(&self) -> &BannerConfig {
        &self.config
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Merge a single-field change into the configuration.
    /// Values are stored as given: no clamping, no validation.
    pub fn update(&mut self, change: BannerUpdate) {
        debug!(field = change.field(), update = ?change, "Applying banner update");
        change.apply_to(&mut self.config);
        self.revision += 1;
    }

    /// Merge several single-field changes in order (a multi-field partial)
    pub fn update_all(&mut self, changes: impl IntoIterator<Item = BannerUpdate>) {
        for change in changes {
            self.update(change);
        }
    }
}
