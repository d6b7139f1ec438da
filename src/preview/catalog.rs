//! Ordered catalog of background images

use anyhow::{bail, Result};

use crate::config::CatalogImage;

/// Non-empty, fixed list of background images
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    images: Vec<CatalogImage>,
}

impl ImageCatalog {
    pub fn new(images: Vec<CatalogImage>) -> Result<Self> {
        if images.is_empty() {
            bail!("Image catalog cannot be empty");
        }
        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn images(&self) -> &[CatalogImage] {
        &self.images
    }

    /// Wrap any stored index (negative included) onto a valid catalog slot
    pub fn wrap_index(&self, image_index: i32) -> usize {
        let len = self.images.len() as i64;
        (image_index as i64).rem_euclid(len) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchConfig;

    fn catalog() -> ImageCatalog {
        ImageCatalog::new(LaunchConfig::default().images).unwrap()
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(ImageCatalog::new(Vec::new()).is_err());
    }

    #[test]
    fn test_in_range_index_selects_directly() {
        let catalog = catalog();
        for index in 0..4 {
            assert_eq!(catalog.wrap_index(index), index as usize);
        }
        assert_eq!(catalog.images()[catalog.wrap_index(1)].label, "Design");
    }

    #[test]
    fn test_index_wraps_past_end() {
        let catalog = catalog();
        assert_eq!(catalog.wrap_index(4), 0);
        assert_eq!(catalog.wrap_index(7), 3);
        assert_eq!(catalog.images()[catalog.wrap_index(6)].label, "Create");
    }

    #[test]
    fn test_negative_index_wraps() {
        let catalog = catalog();
        assert_eq!(catalog.wrap_index(-1), 3);
        assert_eq!(catalog.wrap_index(-4), 0);
        assert_eq!(catalog.wrap_index(-5), 3);
    }

    #[test]
    fn test_selection_is_total_over_extremes() {
        let catalog = catalog();
        for index in [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX] {
            let slot = catalog.wrap_index(index);
            assert!(slot < catalog.len());
            assert_eq!(slot as i64, (index as i64).rem_euclid(4));
        }
    }
}
