// SPDX-License-Identifier: MPL-2.0
//! Image handles for bundled pictures.
//!
//! Handles are built once from the embedded bytes so the renderer can cache
//! the decoded textures across frames.

use crate::domain::gallery::SAMPLE_IMAGES;
use crate::infrastructure::asset_bytes;
use iced::widget::image::Handle;
use std::collections::HashMap;

/// Story backdrop and slide images.
pub const HERO_BACKGROUND: &str = "story/hero-background.png";
pub const STORY_BACKGROUND_1: &str = "story/story-background-1.png";
pub const STORY_BACKGROUND_2: &str = "story/story-background-2.png";
pub const STORY_BACKGROUND_3: &str = "story/story-background-3.png";

const STORY_IMAGES: [&str; 4] = [
    HERO_BACKGROUND,
    STORY_BACKGROUND_1,
    STORY_BACKGROUND_2,
    STORY_BACKGROUND_3,
];

/// Handles keyed by asset path.
#[derive(Debug, Clone, Default)]
pub struct ImageCatalog {
    handles: HashMap<&'static str, Handle>,
}

impl ImageCatalog {
    /// Loads every sample photograph and story image that is bundled.
    #[must_use]
    pub fn bundled() -> Self {
        let paths = SAMPLE_IMAGES
            .iter()
            .map(|sample| sample.source)
            .chain(STORY_IMAGES);

        let mut handles = HashMap::new();
        for path in paths {
            match asset_bytes(path) {
                Some(bytes) => {
                    handles.insert(path, Handle::from_bytes(bytes.into_owned()));
                }
                None => tracing::warn!(path, "bundled image is missing"),
            }
        }
        Self { handles }
    }

    /// Handle for `path`, if the asset exists.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Handle> {
        self.handles.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_contains_samples_and_story_images() {
        let catalog = ImageCatalog::bundled();
        assert_eq!(catalog.len(), SAMPLE_IMAGES.len() + STORY_IMAGES.len());
        assert!(catalog.get(SAMPLE_IMAGES[0].source).is_some());
        assert!(catalog.get(STORY_BACKGROUND_2).is_some());
    }

    #[test]
    fn unknown_path_has_no_handle() {
        assert!(ImageCatalog::default().get("images/none.png").is_none());
    }
}
