// SPDX-License-Identifier: MPL-2.0
//! Bundled assets and the embedded segmentation source.
//!
//! Sample photographs, story backgrounds and segmentation documents are
//! compiled into the binary. Documents live at
//! `responses/response_{id}.json` and follow this shape:
//!
//! ```json
//! { "mask_png_base64": "...", "width": 120, "height": 80,
//!   "classes": [{ "id": 5, "name": "water", "rgb": [0, 191, 255] }] }
//! ```

use crate::application::port::SegmentationSource;
use crate::domain::gallery::SampleId;
use crate::domain::segmentation::{reference_legend, ClassInfo, SegmentationResult};
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Returns the bytes of a bundled asset, e.g. `images/image_3.png`.
#[must_use]
pub fn asset_bytes(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|file| file.data)
}

/// Asset path of the segmentation document for `id`.
#[must_use]
pub fn response_path(id: SampleId) -> String {
    format!("responses/response_{}.json", id.value())
}

#[derive(Debug, Deserialize)]
struct ClassDocument {
    id: u32,
    name: String,
    rgb: [u8; 3],
}

#[derive(Debug, Deserialize)]
struct SegmentationDocument {
    mask_png_base64: String,
    width: u32,
    height: u32,
    /// Absent means the reference legend; an explicit empty list means none.
    #[serde(default)]
    classes: Option<Vec<ClassDocument>>,
}

/// Parses and validates a segmentation document.
///
/// The mask must be valid base64, decode as PNG, and match the declared
/// dimensions. A document without a `classes` field gets the reference
/// legend; an empty `classes` list is kept empty.
///
/// # Errors
///
/// Returns [`Error::SegmentationUnavailable`] naming `id` on any failure.
pub fn parse_document(id: SampleId, bytes: &[u8]) -> Result<SegmentationResult> {
    let raw = id.value();
    let document: SegmentationDocument = serde_json::from_slice(bytes)
        .map_err(|err| Error::unavailable(raw, format!("invalid document: {err}")))?;

    let mask_png = STANDARD
        .decode(document.mask_png_base64.trim())
        .map_err(|err| Error::unavailable(raw, format!("invalid base64 mask: {err}")))?;

    let decoded = image_rs::load_from_memory_with_format(&mask_png, image_rs::ImageFormat::Png)
        .map_err(|err| Error::unavailable(raw, format!("invalid mask image: {err}")))?
        .into_rgba8();

    if decoded.dimensions() != (document.width, document.height) {
        return Err(Error::unavailable(
            raw,
            format!(
                "mask is {}x{} but document declares {}x{}",
                decoded.width(),
                decoded.height(),
                document.width,
                document.height
            ),
        ));
    }

    let classes = match document.classes {
        None => reference_legend(),
        Some(classes) => classes
            .into_iter()
            .map(|class| ClassInfo::new(class.id, class.name, class.rgb.into()))
            .collect(),
    };

    let (width, height) = decoded.dimensions();
    SegmentationResult::new(id, mask_png, decoded.into_raw(), width, height, classes)
        .ok_or_else(|| Error::unavailable(raw, "mask has no pixels"))
}

/// Resolves results from the documents compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl SegmentationSource for EmbeddedSource {
    fn resolve(&self, id: SampleId) -> Result<SegmentationResult> {
        let path = response_path(id);
        let bytes = asset_bytes(&path)
            .ok_or_else(|| Error::unavailable(id.value(), format!("{path} not found")))?;
        parse_document(id, &bytes)
    }
}

/// Resolves results from documents held in memory.
///
/// Used where documents are produced at runtime rather than bundled.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<SampleId, Vec<u8>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the raw JSON document for `id`, replacing any previous one.
    pub fn insert(&mut self, id: SampleId, document: impl Into<Vec<u8>>) {
        self.documents.insert(id, document.into());
    }

    #[must_use]
    pub fn with_document(mut self, id: SampleId, document: impl Into<Vec<u8>>) -> Self {
        self.insert(id, document);
        self
    }
}

impl SegmentationSource for MemorySource {
    fn resolve(&self, id: SampleId) -> Result<SegmentationResult> {
        let bytes = self
            .documents
            .get(&id)
            .ok_or_else(|| Error::unavailable(id.value(), "document not registered"))?;
        parse_document(id, bytes)
    }
}
