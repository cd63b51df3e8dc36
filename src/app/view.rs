// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header sits above the current screen and toasts are layered on top.
//! The gallery screen is a single scrollable of fixed-height blocks so the
//! scroll offset alone tells which story sections are on screen.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::carousel::{self, Carousel};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::header;
use crate::ui::images::{self, ImageCatalog};
use crate::ui::notifications::{self, Toast};
use crate::ui::segmentation::{self, SegmentationView};
use crate::ui::story::{self, StorySection};
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::visibility::PageViewport;
use iced::widget::scrollable::Viewport;
use iced::widget::{image, scrollable, text, Column, Container, Stack};
use iced::{alignment, ContentFit, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub carousel: &'a Carousel,
    pub stories: &'a [StorySection],
    pub segmentation: Option<&'a SegmentationView>,
    pub images: &'a ImageCatalog,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ColorScheme::for_mode(ctx.theme_mode);

    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Header);

    let body: Element<'_, Message> = match (ctx.screen, ctx.segmentation) {
        (Screen::Detail, Some(state)) => segmentation::view(
            state,
            segmentation::ViewContext {
                i18n: ctx.i18n,
                images: ctx.images,
                colors,
            },
        )
        .map(Message::Segmentation),
        // A detail screen without state cannot be reached; fall back to the page.
        (Screen::Gallery, _) | (Screen::Detail, None) => view_gallery_page(&ctx, colors),
    };

    let page = Column::new()
        .push(header)
        .push(Container::new(body).width(Length::Fill).height(Length::Fill));

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toasts)
        .into()
}

fn view_gallery_page<'a>(ctx: &ViewContext<'a>, colors: ColorScheme) -> Element<'a, Message> {
    let gallery = ctx
        .carousel
        .view(carousel::ViewContext {
            i18n: ctx.i18n,
            images: ctx.images,
        })
        .map(Message::Carousel);

    let sections = ctx.stories.iter().enumerate().fold(
        Column::new(),
        |column, (index, section)| {
            column.push(
                section
                    .view(story::ViewContext {
                        i18n: ctx.i18n,
                        images: ctx.images,
                        colors,
                    })
                    .map(move |message| Message::Story(index, message)),
            )
        },
    );

    let content = Column::new()
        .width(Length::Fill)
        .push(view_hero(ctx.i18n, ctx.images))
        .push(gallery)
        .push(sections);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| {
            Message::PageScrolled(PageViewport::new(
                viewport.absolute_offset().y,
                viewport.bounds().height,
            ))
        })
        .into()
}

fn view_hero<'a>(i18n: &I18n, images: &'a ImageCatalog) -> Element<'a, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT));

    if let Some(handle) = images.get(images::HERO_BACKGROUND) {
        layers = layers.push(
            image(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .opacity(opacity::OVERLAY_STRONG),
        );
    }

    let words = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(text(i18n.tr("hero-title")).size(typography::DISPLAY))
        .push(text(i18n.tr("hero-tagline")).size(typography::TITLE_MD))
        .push(text(i18n.tr("hero-subtitle")).size(typography::BODY_LG));

    Container::new(
        layers.push(
            Container::new(words)
                .padding(spacing::XL)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HERO_HEIGHT))
    .clip(true)
    .into()
}
