//! Configuration management for Banner Studio
//!
//! - **banner**: the BannerConfig value and its tagged single-field updates
//! - **store**: ConfigStore, the only writer of the live BannerConfig
//! - **launch**: optional JSON launch file supplying the initial value and image catalog

pub mod banner;
pub mod launch;
pub mod store;

// Re-export commonly used types
pub use banner::{BannerConfig, BannerUpdate};
pub use launch::{CatalogImage, LaunchConfig};
pub use store::ConfigStore;
