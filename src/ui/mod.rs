// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one renders from borrowed state and reports what happened through an
//! event the application acts on.
//!
//! # Page Sections
//!
//! - [`header`] - Application name with language and theme toggles
//! - [`carousel`] - Sample gallery with previous/next and jump navigation
//! - [`story`] - Scroll-revealed story sections
//! - [`segmentation`] - Detail view with mask, legend and download
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display, checkerboard)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`images`] - Image handles for bundled pictures
//! - [`visibility`] - Visible fraction of the page blocks
//! - [`notifications`] - Toast notification system for user feedback

pub mod carousel;
pub mod components;
pub mod design_tokens;
pub mod header;
pub mod images;
pub mod notifications;
pub mod segmentation;
pub mod story;
pub mod styles;
pub mod theming;
pub mod visibility;
pub mod widgets;
