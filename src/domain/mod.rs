// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and rules with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`gallery`]: Sample images shown in the carousel ([`SampleImage`](gallery::SampleImage))
//! - [`segmentation`]: Precomputed results and class legend
//!   ([`SegmentationResult`](segmentation::SegmentationResult), [`ClassInfo`](segmentation::ClassInfo))
//! - [`ui`]: UI value objects ([`CyclicIndex`](ui::CyclicIndex),
//!   [`RevealThreshold`](ui::RevealThreshold))

pub mod gallery;
pub mod segmentation;
pub mod ui;
