// SPDX-License-Identifier: MPL-2.0
//! Segmentation detail view.
//!
//! Shows the selected photograph next to its precomputed mask, the class
//! legend, and a mask download action. The view owns the load lifecycle of
//! one request; the application issues the request and routes its outcome
//! back through [`SegmentationView::resolve`].

mod state;
mod view;

pub use state::{LoadState, RequestTicket, SegmentationView};
pub use view::{legend_entries, view, LegendEntry, ViewContext};

use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Back,
    DownloadMask,
    ToggleErrorDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Back,
    /// The user asked to save the mask; the bytes travel with the request.
    DownloadRequested {
        file_name: String,
        bytes: Arc<[u8]>,
    },
}
