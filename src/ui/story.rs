// SPDX-License-Identifier: MPL-2.0
//! Scroll-revealed story sections shown below the gallery.
//!
//! Each section holds two independent pieces of state: a one-shot reveal
//! latch fed with the section's visible fraction, and a slide index used
//! only by the carousel layout. Text comes from the i18n bundles under the
//! section's key (`{key}-title`, `{key}-subtitle`, `{key}-paragraph-{n}`).

use crate::domain::ui::{CyclicIndex, RevealLatch, RevealThreshold};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::images::{ImageCatalog, STORY_BACKGROUND_1, STORY_BACKGROUND_2, STORY_BACKGROUND_3};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, image, text, Column, Container, Row, Space, Stack};
use iced::{alignment, Color, ContentFit, Element, Length, Theme};

/// How the slide images of a section are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// First slide only.
    Single,
    /// First two slides, stacked.
    Dual,
    /// One slide at a time with previous/next buttons.
    Carousel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePosition {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
}

impl Accent {
    fn color(self, scheme: &ColorScheme) -> Color {
        match self {
            Accent::Primary => scheme.brand_primary,
            Accent::Secondary => scheme.brand_secondary,
        }
    }
}

/// Static description of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionContent {
    /// i18n key prefix.
    pub key: &'static str,
    pub paragraphs: usize,
    /// The first background fills the section.
    pub backgrounds: &'static [&'static str],
    /// Images shown in the image area; empty means the backgrounds.
    pub slides: &'static [&'static str],
    pub layout: Layout,
    pub position: ImagePosition,
    pub accent: Accent,
}

impl SectionContent {
    #[must_use]
    pub fn slides(&self) -> &'static [&'static str] {
        if self.slides.is_empty() {
            self.backgrounds
        } else {
            self.slides
        }
    }
}

/// The sections of the gallery page, top to bottom.
pub const SECTIONS: [SectionContent; 3] = [
    SectionContent {
        key: "story-vision",
        paragraphs: 3,
        backgrounds: &[STORY_BACKGROUND_1, STORY_BACKGROUND_2, STORY_BACKGROUND_3],
        slides: &[],
        layout: Layout::Carousel,
        position: ImagePosition::Left,
        accent: Accent::Primary,
    },
    SectionContent {
        key: "story-precision",
        paragraphs: 3,
        backgrounds: &[STORY_BACKGROUND_2, STORY_BACKGROUND_3],
        slides: &[],
        layout: Layout::Dual,
        position: ImagePosition::Right,
        accent: Accent::Secondary,
    },
    SectionContent {
        key: "story-industries",
        paragraphs: 3,
        backgrounds: &[STORY_BACKGROUND_3, STORY_BACKGROUND_1],
        slides: &[],
        layout: Layout::Dual,
        position: ImagePosition::Left,
        accent: Accent::Primary,
    },
];

/// Contextual data needed to render a section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCatalog,
    pub colors: ColorScheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NextSlide,
    PreviousSlide,
}

#[derive(Debug, Clone)]
pub struct StorySection {
    content: SectionContent,
    reveal: RevealLatch,
    slide: CyclicIndex,
}

impl StorySection {
    #[must_use]
    pub fn new(content: SectionContent) -> Self {
        Self {
            content,
            reveal: RevealLatch::default(),
            slide: CyclicIndex::new(content.slides().len()),
        }
    }

    #[must_use]
    pub fn content(&self) -> &SectionContent {
        &self.content
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }

    /// Feeds the section's current visible fraction. Returns `true` when
    /// this observation revealed the section.
    pub fn observe(&mut self, visible_fraction: f32, threshold: RevealThreshold) -> bool {
        let revealed = self.reveal.observe(visible_fraction, threshold);
        if revealed {
            tracing::debug!(section = self.content.key, visible_fraction, "story section revealed");
        }
        revealed
    }

    #[must_use]
    pub fn slide_index(&self) -> Option<usize> {
        self.slide.get()
    }

    /// Whether the previous/next buttons are shown.
    #[must_use]
    pub fn has_slide_controls(&self) -> bool {
        self.content.layout == Layout::Carousel && self.content.slides().len() > 1
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::NextSlide => self.slide.next(),
            Message::PreviousSlide => self.slide.previous(),
        }
    }

    /// Slide images displayed for the current layout and position.
    #[must_use]
    pub fn visible_slides(&self) -> Vec<&'static str> {
        let slides = self.content.slides();
        match self.content.layout {
            Layout::Single => slides.iter().take(1).copied().collect(),
            Layout::Dual => slides.iter().take(2).copied().collect(),
            Layout::Carousel => self
                .slide
                .get()
                .and_then(|i| slides.get(i))
                .copied()
                .into_iter()
                .collect(),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let alpha = if self.is_revealed() {
            opacity::OPAQUE
        } else {
            opacity::HIDDEN_CONTENT
        };
        let accent = self.content.accent.color(&ctx.colors);
        let key = self.content.key;

        let subtitle = text(ctx.i18n.tr(&format!("{key}-subtitle")))
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color { a: alpha, ..accent }),
            });
        let title = text(ctx.i18n.tr(&format!("{key}-title")))
            .size(typography::TITLE_LG)
            .style(faded_text(alpha));

        let paragraphs = (1..=self.content.paragraphs).fold(
            Column::new().spacing(spacing::SM),
            |column, n| {
                column.push(
                    text(ctx.i18n.tr(&format!("{key}-paragraph-{n}")))
                        .size(typography::BODY_LG)
                        .style(faded_text(alpha)),
                )
            },
        );

        let words = Column::new()
            .spacing(spacing::SM)
            .width(Length::FillPortion(1))
            .push(subtitle)
            .push(title)
            .push(paragraphs);

        let pictures = Container::new(self.view_slides(&ctx, accent, alpha))
            .width(Length::FillPortion(1))
            .center_y(Length::Fill);

        let row = match self.content.position {
            ImagePosition::Left => Row::new().push(pictures).push(words),
            ImagePosition::Right => Row::new().push(words).push(pictures),
        }
        .spacing(spacing::XL)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .height(Length::Fill);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::STORY_SECTION_HEIGHT));
        if let Some(handle) = self.content.backgrounds.first().and_then(|path| ctx.images.get(path)) {
            layers = layers.push(
                image(handle.clone())
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .opacity(opacity::OVERLAY_SUBTLE * alpha),
            );
        }

        Container::new(layers.push(row))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::STORY_SECTION_HEIGHT))
            .clip(true)
            .into()
    }

    fn view_slides<'a>(&'a self, ctx: &ViewContext<'a>, accent: Color, alpha: f32) -> Element<'a, Message> {
        let slides = self.visible_slides();
        let image_height = match self.content.layout {
            Layout::Dual => (sizing::STORY_IMAGE_HEIGHT - spacing::MD) / 2.0,
            Layout::Single | Layout::Carousel => sizing::STORY_IMAGE_HEIGHT,
        };

        let framed = |path: &str| -> Element<'a, Message> {
            let inner: Element<'a, Message> = match ctx.images.get(path) {
                Some(handle) => image(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fixed(image_height))
                    .opacity(alpha)
                    .into(),
                None => Space::new()
                    .width(Length::Fill)
                    .height(Length::Fixed(image_height))
                    .into(),
            };
            Container::new(inner)
                .style(container_styles::image_frame(Color { a: alpha, ..accent }))
                .into()
        };

        let column = slides
            .iter()
            .fold(Column::new().spacing(spacing::MD), |column, path| column.push(framed(path)));

        if !self.has_slide_controls() {
            return column.into();
        }

        let arrow = |label: &'static str, message: Message| {
            button(text(label).size(typography::TITLE_MD))
                .on_press(message)
                .padding([spacing::XS, spacing::SM])
                .style(button_styles::overlay(
                    Color::WHITE,
                    opacity::OVERLAY_MEDIUM,
                    opacity::OVERLAY_HOVER,
                ))
        };
        let controls = Container::new(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(arrow("‹", Message::PreviousSlide))
                .push(Space::new().width(Length::Fill))
                .push(arrow("›", Message::NextSlide)),
        )
        .padding(spacing::SM)
        .width(Length::Fill)
        .center_y(Length::Fixed(image_height));

        Stack::new().push(column).push(controls).into()
    }
}

fn faded_text(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(Color {
            a: alpha,
            ..theme.palette().text
        }),
    }
}

/// Builds the page's sections in display order.
#[must_use]
pub fn page_sections() -> Vec<StorySection> {
    SECTIONS.iter().copied().map(StorySection::new).collect()
}
