// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Component messages are forwarded to their owners; the returned events
//! drive screen transitions, segmentation requests, mask export and
//! preference persistence.

use super::{App, Message, Screen};
use crate::config;
use crate::domain::gallery::SampleImage;
use crate::error::Error;
use crate::export;
use crate::ui::carousel;
use crate::ui::design_tokens::sizing;
use crate::ui::header;
use crate::ui::notifications::Notification;
use crate::ui::segmentation::{self, RequestTicket, SegmentationView};
use crate::ui::visibility::{self, PageViewport};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

const CONFIG_SAVE_ERROR_KEY: &str = "notification-config-save-error";

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(message) => {
                self.handle_header(message);
                Task::none()
            }
            Message::Carousel(message) => match self.carousel.update(message) {
                carousel::Event::Selected(sample) => self.select(sample),
                carousel::Event::None => Task::none(),
            },
            Message::Story(index, message) => {
                if let Some(section) = self.stories.get_mut(index) {
                    section.update(message);
                }
                Task::none()
            }
            Message::Segmentation(message) => self.handle_segmentation(message),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::SegmentationResolved { ticket, outcome } => {
                match self.segmentation.as_mut() {
                    Some(view) => {
                        view.resolve(ticket, outcome);
                    }
                    None => {
                        tracing::debug!(id = %ticket.id, "segmentation result arrived after leaving detail view");
                    }
                }
                Task::none()
            }
            Message::SaveMaskDialogResult { path, bytes } => {
                self.handle_save_result(path, &bytes);
                Task::none()
            }
            Message::PageScrolled(viewport) => {
                self.viewport = viewport;
                self.observe_story_sections();
                Task::none()
            }
            Message::WindowResized(height) => {
                self.viewport = PageViewport::new(
                    self.viewport.offset_y,
                    height - sizing::HEADER_HEIGHT,
                );
                self.observe_story_sections();
                Task::none()
            }
            Message::Tick(now) => {
                self.handle_tick(now);
                Task::none()
            }
        }
    }

    /// Moves to the detail view for `sample` and issues its segmentation request.
    pub(super) fn select(&mut self, sample: SampleImage) -> Task<Message> {
        self.generation += 1;
        let view = SegmentationView::new(sample, self.generation);
        let ticket = view.ticket();
        tracing::info!(id = %sample.id, title = sample.title, generation = ticket.generation, "image selected");

        self.segmentation = Some(view);
        self.screen = Screen::Detail;
        self.request_segmentation(ticket)
    }

    fn request_segmentation(&self, ticket: RequestTicket) -> Task<Message> {
        let source = Arc::clone(&self.source);
        // Decoding the mask is CPU work; keep it off the UI thread.
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || source.resolve(ticket.id))
                    .await
                    .map_err(|err| Error::unavailable(ticket.id.value(), err.to_string()))?
            },
            move |outcome| Message::SegmentationResolved { ticket, outcome },
        )
    }

    fn back(&mut self) {
        if let Some(view) = self.segmentation.take() {
            tracing::info!(id = %view.sample().id, "returning to gallery");
        }
        self.screen = Screen::Gallery;
        // The gallery scrollable is rebuilt at the top.
        self.viewport = PageViewport::new(0.0, self.viewport.height);
        self.observe_story_sections();
    }

    fn handle_segmentation(&mut self, message: segmentation::Message) -> Task<Message> {
        let Some(view) = self.segmentation.as_mut() else {
            return Task::none();
        };
        match view.update(message) {
            segmentation::Event::None => Task::none(),
            segmentation::Event::Back => {
                self.back();
                Task::none()
            }
            segmentation::Event::DownloadRequested { file_name, bytes } => {
                self.open_save_dialog(file_name, bytes)
            }
        }
    }

    fn open_save_dialog(&self, file_name: String, bytes: Arc<[u8]>) -> Task<Message> {
        let directory = self.config.export.directory.clone();
        let filter_name = self.i18n.tr("segmentation-mask-filter");

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new()
                    .set_file_name(&file_name)
                    .add_filter(filter_name, &["png"]);

                if let Some(dir) = directory {
                    if dir.exists() {
                        dialog = dialog.set_directory(&dir);
                    }
                }

                dialog.save_file().await.map(|h| h.path().to_path_buf())
            },
            move |path| Message::SaveMaskDialogResult { path, bytes },
        )
    }

    fn handle_save_result(&mut self, path: Option<PathBuf>, bytes: &[u8]) {
        let Some(path) = path else {
            tracing::debug!("mask download cancelled");
            return;
        };

        match export::write_mask(&path, bytes) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "mask saved");
                self.notifications.push(
                    Notification::success("notification-download-success")
                        .with_arg("path", path.display().to_string()),
                );
                if let Some(parent) = path.parent() {
                    self.config.export.directory = Some(parent.to_path_buf());
                    self.persist_config();
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "mask download failed");
                self.notifications.push(
                    Notification::error(err.i18n_key()).with_arg("reason", err.to_string()),
                );
            }
        }
    }

    fn handle_header(&mut self, message: header::Message) {
        match message {
            header::Message::CycleLanguage => {
                let locale = self.i18n.next_locale();
                self.i18n.set_locale(locale.clone());
                self.config.general.language = Some(locale.to_string());
                tracing::info!(%locale, "language changed");
                self.notifications
                    .push(Notification::info("notification-language-changed"));
                self.persist_config();
            }
            header::Message::CycleTheme => {
                self.theme_mode = self.theme_mode.next();
                self.config.general.theme_mode = self.theme_mode;
                tracing::info!(theme = ?self.theme_mode, "theme changed");
                self.persist_config();
            }
        }
    }

    fn persist_config(&mut self) {
        match config::save_with_override(&self.config, self.config_dir.clone()) {
            // A later save supersedes any earlier failure.
            Ok(()) => self.notifications.dismiss_key(CONFIG_SAVE_ERROR_KEY),
            Err(err) => {
                tracing::warn!(error = %err, "failed to save config");
                self.notifications
                    .push(Notification::warning(CONFIG_SAVE_ERROR_KEY));
            }
        }
    }

    fn handle_tick(&mut self, now: Instant) {
        if let Some(view) = self.segmentation.as_mut() {
            view.tick();
        }
        self.notifications.tick(now);
    }

    /// Feeds every story section its visible fraction.
    ///
    /// Only the gallery screen shows the sections.
    pub(super) fn observe_story_sections(&mut self) {
        if self.screen != Screen::Gallery {
            return;
        }
        let viewport = self.viewport;
        let threshold = self.reveal_threshold;
        for (index, section) in self.stories.iter_mut().enumerate() {
            section.observe(visibility::story_section_fraction(viewport, index), threshold);
        }
    }
}
