// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`embedded`]: Assets compiled into the binary and the
//!   [`SegmentationSource`] that reads documents from them
//!
//! [`SegmentationSource`]: crate::application::port::SegmentationSource

pub mod embedded;

pub use embedded::{asset_bytes, EmbeddedSource, MemorySource};
