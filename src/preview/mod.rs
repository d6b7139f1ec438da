//! Banner preview - derives display parameters from a config snapshot and paints them

mod banner;
mod catalog;
mod display;
mod motion;
mod particles;
mod texture;

pub use banner::Banner;
pub use catalog::ImageCatalog;
