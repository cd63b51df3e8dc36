// SPDX-License-Identifier: MPL-2.0
//! Detail view state: request tracking and load lifecycle.

use super::{Event, Message};
use crate::domain::gallery::{SampleId, SampleImage};
use crate::domain::segmentation::{ClassInfo, SegmentationResult};
use crate::error::{Error, Result};
use crate::export::mask_file_name;
use crate::ui::widgets::animated_spinner;
use iced::widget::image::Handle;

/// Tag of one segmentation request.
///
/// The generation increases on every selection, so a result for a previous
/// selection of the same image is still told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    pub id: SampleId,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Loaded {
        result: SegmentationResult,
        mask: Handle,
    },
    Failed {
        reason: String,
    },
}

/// State of the detail view for one selected image.
#[derive(Debug, Clone)]
pub struct SegmentationView {
    sample: SampleImage,
    ticket: RequestTicket,
    load: LoadState,
    spinner_rotation: f32,
    show_error_details: bool,
}

impl SegmentationView {
    /// Creates the view in the loading state, waiting for `ticket`.
    #[must_use]
    pub fn new(sample: SampleImage, generation: u64) -> Self {
        Self {
            sample,
            ticket: RequestTicket {
                id: sample.id,
                generation,
            },
            load: LoadState::Loading,
            spinner_rotation: 0.0,
            show_error_details: false,
        }
    }

    #[must_use]
    pub fn sample(&self) -> &SampleImage {
        &self.sample
    }

    #[must_use]
    pub fn ticket(&self) -> RequestTicket {
        self.ticket
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    #[must_use]
    pub fn result(&self) -> Option<&SegmentationResult> {
        match &self.load {
            LoadState::Loaded { result, .. } => Some(result),
            LoadState::Loading | LoadState::Failed { .. } => None,
        }
    }

    /// Legend entries; empty unless a result is loaded.
    #[must_use]
    pub fn legend(&self) -> &[ClassInfo] {
        match self.result() {
            Some(result) => result.classes(),
            None => &[],
        }
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    #[must_use]
    pub fn shows_error_details(&self) -> bool {
        self.show_error_details
    }

    /// Applies the outcome of a request.
    ///
    /// Outcomes tagged with another ticket, or carrying a result for another
    /// image, are dropped and `false` is returned. Only the first outcome of
    /// the current ticket is applied.
    pub fn resolve(&mut self, ticket: RequestTicket, outcome: Result<SegmentationResult>) -> bool {
        if ticket != self.ticket || !self.is_loading() {
            tracing::debug!(
                id = %ticket.id,
                generation = ticket.generation,
                current = self.ticket.generation,
                "dropping stale segmentation result"
            );
            return false;
        }

        self.load = match outcome {
            Ok(result) if result.id() == self.sample.id => {
                tracing::info!(
                    id = %self.sample.id,
                    width = result.width(),
                    height = result.height(),
                    classes = result.classes().len(),
                    "segmentation result loaded"
                );
                let mask = Handle::from_rgba(result.width(), result.height(), result.rgba().to_vec());
                LoadState::Loaded { result, mask }
            }
            Ok(result) => {
                let err = Error::unavailable(
                    self.sample.id.value(),
                    format!("received result for image {}", result.id()),
                );
                tracing::warn!(error = %err, "segmentation result does not match selection");
                LoadState::Failed {
                    reason: err.to_string(),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "segmentation result unavailable");
                LoadState::Failed {
                    reason: err.to_string(),
                }
            }
        };
        true
    }

    /// Advances the loading spinner.
    pub fn tick(&mut self) {
        if self.is_loading() {
            self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Back => Event::Back,
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                Event::None
            }
            Message::DownloadMask => match self.result() {
                Some(result) => Event::DownloadRequested {
                    file_name: mask_file_name(self.sample.title),
                    bytes: result.mask_png().clone(),
                },
                None => Event::None,
            },
        }
    }
}
