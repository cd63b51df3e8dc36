// SPDX-License-Identifier: MPL-2.0
//! Sample gallery carousel.
//!
//! Cycles through the fixed sample list and reports the confirmed choice to
//! the parent as an [`Event::Selected`]. The carousel never loads anything
//! itself.

use crate::domain::gallery::SampleImage;
use crate::domain::ui::CyclicIndex;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::images::ImageCatalog;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, container, image, text, Column, Container, Row, Space, Stack};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCatalog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Next,
    Previous,
    JumpTo(usize),
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Selected(SampleImage),
}

#[derive(Debug, Clone)]
pub struct Carousel {
    items: &'static [SampleImage],
    index: CyclicIndex,
}

impl Carousel {
    #[must_use]
    pub fn new(items: &'static [SampleImage]) -> Self {
        Self {
            items,
            index: CyclicIndex::new(items.len()),
        }
    }

    /// Image at the current position, `None` for an empty list.
    #[must_use]
    pub fn current(&self) -> Option<&'static SampleImage> {
        let items = self.items;
        self.index.get().and_then(|i| items.get(i))
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index.get()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Next => self.index.next(),
            Message::Previous => self.index.previous(),
            Message::JumpTo(index) => {
                if index >= self.len() {
                    tracing::debug!(index, len = self.len(), "carousel jump out of range");
                } else {
                    self.index.jump_to(index);
                }
            }
            Message::Confirm => {
                return match self.current() {
                    Some(sample) => Event::Selected(*sample),
                    None => Event::None,
                };
            }
        }
        Event::None
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let Some(sample) = self.current() else {
            return Container::new(text(ctx.i18n.tr("gallery-empty")).size(typography::BODY_LG))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::GALLERY_HEIGHT))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(sizing::GALLERY_HEIGHT))
                .into();
        };

        let picture: Element<'a, Message> = match ctx.images.get(sample.source) {
            Some(handle) => image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CAROUSEL_IMAGE_HEIGHT))
                .into(),
            None => Container::new(text(ctx.i18n.tr("image-unavailable")))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(sizing::CAROUSEL_IMAGE_HEIGHT))
                .into(),
        };

        let arrow = |label: &'static str, message: Message| {
            button(text(label).size(typography::TITLE_MD))
                .on_press(message)
                .padding([spacing::XS, spacing::SM])
                .style(button_styles::overlay(
                    iced::Color::WHITE,
                    opacity::OVERLAY_MEDIUM,
                    opacity::OVERLAY_HOVER,
                ))
        };

        let arrows = Container::new(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(arrow("‹", Message::Previous))
                .push(Space::new().width(Length::Fill))
                .push(arrow("›", Message::Next)),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .center_y(Length::Fixed(sizing::CAROUSEL_IMAGE_HEIGHT));

        let stage = Stack::new().push(picture).push(arrows);

        let caption = Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(text(sample.title).size(typography::TITLE_SM))
            .push(text(sample.description).size(typography::BODY));

        let current = self.index.get();
        let dots = self.items.iter().enumerate().fold(
            Row::new().spacing(spacing::XS),
            |row, (i, _)| {
                row.push(
                    button(Space::new())
                        .width(Length::Fixed(sizing::DOT))
                        .height(Length::Fixed(sizing::DOT))
                        .on_press(Message::JumpTo(i))
                        .style(button_styles::dot(current == Some(i))),
                )
            },
        );

        let select = button(text(ctx.i18n.tr("gallery-select-button")).size(typography::BODY_LG))
            .on_press(Message::Confirm)
            .padding([spacing::SM, spacing::LG])
            .style(button_styles::primary);

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(stage)
            .push(caption)
            .push(dots)
            .push(select);

        Container::new(
            container(content)
                .padding(spacing::LG)
                .max_width(900.0)
                .style(container_styles::panel),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::GALLERY_HEIGHT))
        .center_x(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{SampleId, SAMPLE_IMAGES};

    #[test]
    fn starts_at_first_sample() {
        let carousel = Carousel::new(&SAMPLE_IMAGES);
        assert_eq!(carousel.current().map(|s| s.id), Some(SampleId::new(0)));
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut carousel = Carousel::new(&SAMPLE_IMAGES);
        assert_eq!(carousel.update(Message::Previous), Event::None);
        assert_eq!(carousel.index(), Some(SAMPLE_IMAGES.len() - 1));
    }

    #[test]
    fn confirm_emits_current_sample() {
        let mut carousel = Carousel::new(&SAMPLE_IMAGES);
        carousel.update(Message::JumpTo(3));
        assert_eq!(carousel.update(Message::Confirm), Event::Selected(SAMPLE_IMAGES[3]));
    }

    #[test]
    fn out_of_range_jump_keeps_position() {
        let mut carousel = Carousel::new(&SAMPLE_IMAGES);
        carousel.update(Message::Next);
        carousel.update(Message::JumpTo(SAMPLE_IMAGES.len()));
        assert_eq!(carousel.index(), Some(1));
    }

    #[test]
    fn jump_to_current_position_is_a_no_op() {
        let mut carousel = Carousel::new(&SAMPLE_IMAGES);
        carousel.update(Message::JumpTo(4));
        assert_eq!(carousel.update(Message::JumpTo(4)), Event::None);
        assert_eq!(carousel.index(), Some(4));
    }

    #[test]
    fn empty_carousel_emits_nothing() {
        let mut carousel = Carousel::new(&[]);
        carousel.update(Message::Next);
        carousel.update(Message::Previous);
        assert_eq!(carousel.update(Message::Confirm), Event::None);
        assert!(carousel.current().is_none());
    }

    #[test]
    fn view_renders_with_and_without_images() {
        let i18n = I18n::default();
        let carousel = Carousel::new(&SAMPLE_IMAGES);
        let images = ImageCatalog::default();
        let _element = carousel.view(ViewContext {
            i18n: &i18n,
            images: &images,
        });

        let empty = Carousel::new(&[]);
        let _element = empty.view(ViewContext {
            i18n: &i18n,
            images: &images,
        });
    }
}
