// SPDX-License-Identifier: MPL-2.0
//! Sample image catalog.
//!
//! The gallery is a fixed, ordered list bundled with the application. Each
//! entry points at an embedded asset and at a precomputed segmentation
//! document with the same id.

use std::fmt;

/// Identifier of a sample image, shared with its segmentation document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SampleId(u32);

impl SampleId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A drone photograph shown in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleImage {
    pub id: SampleId,
    /// Embedded asset path of the photograph.
    pub source: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

macro_rules! sample {
    ($id:literal, $title:literal, $description:literal) => {
        SampleImage {
            id: SampleId::new($id),
            source: concat!("images/image_", stringify!($id), ".png"),
            title: $title,
            description: $description,
        }
    };
}

/// The gallery, in display order.
pub const SAMPLE_IMAGES: [SampleImage; 12] = [
    sample!(0, "Roads", "You can see me cycling"),
    sample!(1, "Roads again", "The red car, yeah"),
    sample!(2, "Yard", "Peculiar shape"),
    sample!(3, "Ground", "Trees, clearings, and dirt paths"),
    sample!(4, "Roads still", "Humans have made a dense concrete jungle"),
    sample!(5, "Yard", "Speak of the devil, what a lovely pair"),
    sample!(6, "Yard", "Thats my grandma, nu-uh"),
    sample!(7, "Yard", "Or a road, whatever"),
    sample!(8, "Ground", "Whats that in red, I wonder?"),
    sample!(9, "Ground", "I wanted to say graveyard"),
    sample!(10, "Ground", "Only because I hate roads"),
    sample!(11, "Yard", "A kid cycling, free of any tethers"),
];

/// Looks up a sample by id.
#[must_use]
pub fn find(id: SampleId) -> Option<&'static SampleImage> {
    SAMPLE_IMAGES.iter().find(|sample| sample.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_match_position() {
        let ids: HashSet<SampleId> = SAMPLE_IMAGES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SAMPLE_IMAGES.len());
        for (index, sample) in SAMPLE_IMAGES.iter().enumerate() {
            assert_eq!(sample.id.value() as usize, index);
        }
    }

    #[test]
    fn source_is_derived_from_id() {
        assert_eq!(SAMPLE_IMAGES[10].source, "images/image_10.png");
    }

    #[test]
    fn find_returns_ground_sample() {
        let sample = find(SampleId::new(3)).expect("sample 3 exists");
        assert_eq!(sample.title, "Ground");
        assert_eq!(sample.description, "Trees, clearings, and dirt paths");
    }

    #[test]
    fn find_unknown_id_is_none() {
        assert!(find(SampleId::new(99)).is_none());
    }
}
