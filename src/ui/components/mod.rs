// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`checkerboard`] - Backdrop for images with transparent regions
//! - [`error_display`] - Error panel with severity badge and expandable details

pub mod checkerboard;
pub mod error_display;
