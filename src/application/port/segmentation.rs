// SPDX-License-Identifier: MPL-2.0
//! Segmentation result port definition.
//!
//! This module defines the [`SegmentationSource`] trait. The application
//! only ever asks for the precomputed result of a sample id; where the
//! result comes from (embedded assets, memory) is an adapter concern.

use crate::domain::gallery::SampleId;
use crate::domain::segmentation::SegmentationResult;
use crate::error::Result;
use std::fmt::Debug;

/// Resolves the precomputed segmentation result of a sample image.
///
/// Implementations must be callable from a background task, and must return
/// [`Error::SegmentationUnavailable`](crate::error::Error::SegmentationUnavailable)
/// when the document is missing, malformed, or its mask does not decode to
/// the declared dimensions.
pub trait SegmentationSource: Send + Sync + Debug {
    /// Resolves the result for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error when no valid result exists for `id`.
    fn resolve(&self, id: SampleId) -> Result<SegmentationResult>;
}
