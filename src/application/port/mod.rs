// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the application layer stays
//! independent of where segmentation data is stored.
//!
//! # Available Ports
//!
//! - [`segmentation`]: Resolution of precomputed segmentation results
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can be shared with background tasks
//! - Methods return `Result` with the crate error type
//! - No `async fn` - callers wrap calls in Iced's `Task`

pub mod segmentation;

pub use segmentation::SegmentationSource;
