// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::segmentation::SegmentationResult;
use crate::error::Error;
use crate::ui::carousel;
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::segmentation::{self, RequestTicket};
use crate::ui::story;
use crate::ui::visibility::PageViewport;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// wrapped so there is a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Carousel(carousel::Message),
    /// Message for the story section at the given index.
    Story(usize, story::Message),
    Segmentation(segmentation::Message),
    Notification(notifications::NotificationMessage),
    /// Outcome of a segmentation request, tagged with the ticket it was issued for.
    SegmentationResolved {
        ticket: RequestTicket,
        outcome: Result<SegmentationResult, Error>,
    },
    /// Result of the save dialog, carrying the bytes it was opened for.
    SaveMaskDialogResult {
        path: Option<PathBuf>,
        bytes: Arc<[u8]>,
    },
    PageScrolled(PageViewport),
    /// New inner window height.
    WindowResized(f32),
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SKYSIGHT_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Sample id to open in the detail view on startup.
    pub select: Option<u32>,
}
