// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the UI and storage.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer holds ports as trait objects
//!
//! # Example
//!
//! ```ignore
//! use skysight::application::port::SegmentationSource;
//! use skysight::infrastructure::EmbeddedSource;
//!
//! let source: std::sync::Arc<dyn SegmentationSource> = std::sync::Arc::new(EmbeddedSource);
//! ```

pub mod port;
