// SPDX-License-Identifier: MPL-2.0
//! `skysight` presents aerial drone photographs next to their precomputed
//! semantic segmentation masks, built with the Iced GUI framework.
//!
//! The page combines a sample gallery, scroll-revealed story sections and a
//! detail view showing the mask, its class legend and a mask download.

#![doc(html_root_url = "https://docs.rs/skysight/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod i18n;
pub mod icon;
pub mod infrastructure;
pub mod ui;
