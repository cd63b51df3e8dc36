// SPDX-License-Identifier: MPL-2.0
//! Precomputed segmentation results and the class legend.

use super::gallery::SampleId;
use std::fmt;
use std::sync::Arc;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// One entry of the class legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub id: u32,
    pub name: String,
    pub color: Rgb,
}

impl ClassInfo {
    pub fn new(id: u32, name: impl Into<String>, color: Rgb) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }
}

/// A decoded segmentation result for one sample image.
///
/// The encoded PNG is kept for downloads; the RGBA pixels feed the display.
/// Buffers are shared so the result can be cloned through messages cheaply.
#[derive(Clone, PartialEq, Eq)]
pub struct SegmentationResult {
    id: SampleId,
    mask_png: Arc<[u8]>,
    rgba: Arc<[u8]>,
    width: u32,
    height: u32,
    classes: Vec<ClassInfo>,
}

impl fmt::Debug for SegmentationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentationResult")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("mask_png_len", &self.mask_png.len())
            .field("classes", &self.classes.len())
            .finish()
    }
}

impl SegmentationResult {
    /// Creates a result, returning `None` when the pixel buffer does not hold
    /// exactly `width * height` RGBA pixels.
    #[must_use]
    pub fn new(
        id: SampleId,
        mask_png: Vec<u8>,
        rgba: Vec<u8>,
        width: u32,
        height: u32,
        classes: Vec<ClassInfo>,
    ) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        if width == 0 || height == 0 || rgba.len() != expected {
            return None;
        }
        Some(Self {
            id,
            mask_png: mask_png.into(),
            rgba: rgba.into(),
            width,
            height,
            classes,
        })
    }

    #[must_use]
    pub fn id(&self) -> SampleId {
        self.id
    }

    /// Encoded PNG bytes of the mask, as shipped in the document.
    #[must_use]
    pub fn mask_png(&self) -> &Arc<[u8]> {
        &self.mask_png
    }

    /// Decoded RGBA pixels, row-major.
    #[must_use]
    pub fn rgba(&self) -> &Arc<[u8]> {
        &self.rgba
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Classes in legend order.
    #[must_use]
    pub fn classes(&self) -> &[ClassInfo] {
        &self.classes
    }
}

/// Class names of the drone segmentation model, indexed by class id.
pub const REFERENCE_CLASS_NAMES: [&str; 24] = [
    "unlabeled",
    "paved-area",
    "dirt",
    "grass",
    "gravel",
    "water",
    "rocks",
    "pool",
    "vegetation",
    "roof",
    "wall",
    "window",
    "door",
    "fence",
    "fence-pole",
    "person",
    "dog",
    "car",
    "bicycle",
    "tree",
    "bald-tree",
    "ar-marker",
    "obstacle",
    "conflicting",
];

/// Mask colors of the drone segmentation model, indexed by class id.
/// Class 0 is fully transparent in the masks.
pub const REFERENCE_PALETTE: [Rgb; 24] = [
    Rgb::new(0, 0, 0),
    Rgb::new(0, 114, 178),
    Rgb::new(213, 94, 0),
    Rgb::new(0, 158, 115),
    Rgb::new(240, 228, 66),
    Rgb::new(0, 191, 255),
    Rgb::new(204, 121, 167),
    Rgb::new(0, 255, 255),
    Rgb::new(50, 205, 50),
    Rgb::new(220, 20, 60),
    Rgb::new(255, 140, 0),
    Rgb::new(65, 105, 225),
    Rgb::new(255, 69, 0),
    Rgb::new(255, 215, 0),
    Rgb::new(138, 43, 226),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 127),
    Rgb::new(0, 0, 255),
    Rgb::new(64, 224, 208),
    Rgb::new(34, 139, 34),
    Rgb::new(255, 99, 71),
    Rgb::new(255, 105, 180),
    Rgb::new(154, 205, 50),
    Rgb::new(127, 255, 0),
];

/// Full legend of the segmentation model, used when a document omits its
/// own class list.
#[must_use]
pub fn reference_legend() -> Vec<ClassInfo> {
    REFERENCE_CLASS_NAMES
        .iter()
        .zip(REFERENCE_PALETTE)
        .zip(0u32..)
        .map(|((name, color), id)| ClassInfo::new(id, *name, color))
        .collect()
}
