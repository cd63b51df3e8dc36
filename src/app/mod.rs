// SPDX-License-Identifier: MPL-2.0
//! Application root state and the page state machine.
//!
//! The `App` owns the gallery carousel, the story sections and, while an
//! image is selected, the segmentation detail view. Components report what
//! happened through events; side effects such as resolving a segmentation
//! document, saving the mask or persisting preferences happen here.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use subscription::TICK_INTERVAL;

use crate::application::port::SegmentationSource;
use crate::config::{self, Config};
use crate::domain::gallery::{self, SampleId, SampleImage, SAMPLE_IMAGES};
use crate::domain::ui::RevealThreshold;
use crate::i18n::fluent::I18n;
use crate::infrastructure::EmbeddedSource;
use crate::ui::carousel::Carousel;
use crate::ui::design_tokens::sizing;
use crate::ui::images::ImageCatalog;
use crate::ui::notifications::{self, Notification};
use crate::ui::segmentation::SegmentationView;
use crate::ui::story::{self, StorySection};
use crate::ui::theming::ThemeMode;
use crate::ui::visibility::PageViewport;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Config directory override; `None` resolves through [`paths`].
    config_dir: Option<PathBuf>,
    screen: Screen,
    theme_mode: ThemeMode,
    carousel: Carousel,
    stories: Vec<StorySection>,
    viewport: PageViewport,
    reveal_threshold: RevealThreshold,
    images: ImageCatalog,
    notifications: notifications::Manager,
    /// Present exactly while `screen` is [`Screen::Detail`].
    segmentation: Option<SegmentationView>,
    source: Arc<dyn SegmentationSource>,
    /// Incremented on every selection to tag requests.
    generation: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("selected", &self.selected().map(|sample| sample.id))
            .field("generation", &self.generation)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_parts(
            I18n::default(),
            Config::default(),
            None,
            Arc::new(EmbeddedSource),
        )
    }
}

impl App {
    fn with_parts(
        i18n: I18n,
        config: Config,
        config_dir: Option<PathBuf>,
        source: Arc<dyn SegmentationSource>,
    ) -> Self {
        let viewport_height = (WINDOW_DEFAULT_HEIGHT as f32 - sizing::HEADER_HEIGHT).max(0.0);
        let mut app = Self {
            i18n,
            theme_mode: config.general.theme_mode,
            reveal_threshold: RevealThreshold::new(config.story.effective_reveal_threshold()),
            config,
            config_dir,
            screen: Screen::Gallery,
            carousel: Carousel::new(&SAMPLE_IMAGES),
            stories: story::page_sections(),
            viewport: PageViewport::new(0.0, viewport_height),
            images: ImageCatalog::bundled(),
            notifications: notifications::Manager::new(),
            segmentation: None,
            source,
            generation: 0,
        };
        app.observe_story_sections();
        app
    }

    /// Initializes application state from the CLI flags and the persisted config.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut app = Self::with_parts(i18n, config, None, Arc::new(EmbeddedSource));

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = match flags.select {
            Some(id) => app.select_by_id(SampleId::new(id)),
            None => Task::none(),
        };
        (app, task)
    }

    /// Builds an application around an explicit source and config directory.
    ///
    /// Preferences are loaded from and saved to `config_dir`.
    pub fn new_with_source(
        source: Arc<dyn SegmentationSource>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(None, &config);
        let mut app = Self::with_parts(i18n, config, config_dir, source);
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        app
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Image shown in the detail view, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&SampleImage> {
        self.segmentation.as_ref().map(SegmentationView::sample)
    }

    #[must_use]
    pub fn segmentation(&self) -> Option<&SegmentationView> {
        self.segmentation.as_ref()
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub fn stories(&self) -> &[StorySection] {
        &self.stories
    }

    #[must_use]
    pub fn viewport(&self) -> PageViewport {
        self.viewport
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    /// Opens the detail view for the sample with `id`.
    ///
    /// Unknown ids are logged and leave the page unchanged.
    pub fn select_by_id(&mut self, id: SampleId) -> Task<Message> {
        match gallery::find(id) {
            Some(sample) => self.select(*sample),
            None => {
                tracing::warn!(%id, "no sample image with this id");
                Task::none()
            }
        }
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.selected() {
            Some(sample) => format!("{} - {app_name}", sample.title),
            None => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(
            self.segmentation
                .as_ref()
                .is_some_and(SegmentationView::is_loading),
            self.notifications.has_notifications(),
        );
        Subscription::batch([event_sub, tick_sub])
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            theme_mode: self.theme_mode,
            carousel: &self.carousel,
            stories: &self.stories,
            segmentation: self.segmentation.as_ref(),
            images: &self.images,
            notifications: &self.notifications,
        })
    }
}
