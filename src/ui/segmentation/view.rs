// SPDX-License-Identifier: MPL-2.0
//! Detail view rendering.

use super::state::{LoadState, SegmentationView};
use super::Message;
use crate::domain::segmentation::{ClassInfo, Rgb};
use crate::i18n::fluent::I18n;
use crate::ui::components::checkerboard;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::images::ImageCatalog;
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, image, text, Column, Container, Row, Space};
use iced::{alignment, Color, ContentFit, Element, Length};

const LEGEND_COLUMNS: usize = 4;

/// Contextual data needed to render the detail view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCatalog,
    pub colors: ColorScheme,
}

/// One rendered row of the class legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

#[must_use]
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// Legend rows, one per class, in document order.
#[must_use]
pub fn legend_entries(classes: &[ClassInfo]) -> Vec<LegendEntry> {
    classes
        .iter()
        .map(|class| LegendEntry {
            label: class.name.clone(),
            color: to_color(class.color),
        })
        .collect()
}

pub fn view<'a>(state: &'a SegmentationView, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let sample = state.sample();

    let back = button(text(format!("← {}", ctx.i18n.tr("segmentation-back-button"))).size(typography::BODY))
        .on_press(Message::Back)
        .padding([spacing::XS, spacing::MD])
        .style(button_styles::secondary);

    let heading = text(ctx.i18n.tr_with_args("segmentation-heading", &[("title", sample.title)]))
        .size(typography::TITLE_LG);

    let top = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(back)
        .push(heading);

    let original: Element<'a, Message> = match ctx.images.get(sample.source) {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SEGMENTATION_IMAGE_HEIGHT))
            .into(),
        None => placeholder(ctx.i18n.tr("image-unavailable")),
    };

    let panels = Row::new()
        .spacing(spacing::LG)
        .push(panel(ctx.i18n.tr("segmentation-original-heading"), original))
        .push(panel(ctx.i18n.tr("segmentation-mask-heading"), mask_area(state, &ctx)));

    let mut download = button(text(ctx.i18n.tr("segmentation-download-button")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(button_styles::primary);
    if state.result().is_some() {
        download = download.on_press(Message::DownloadMask);
    }

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(top)
        .push(panels)
        .push(download);

    match state.load_state() {
        LoadState::Loaded { .. } if !state.legend().is_empty() => {
            content = content.push(legend(ctx.i18n, state.legend()));
        }
        LoadState::Failed { reason } => {
            content = content.push(
                ErrorDisplay::new(ErrorSeverity::Error)
                    .title(ctx.i18n.tr("segmentation-error-title"))
                    .message(ctx.i18n.tr_with_args(
                        "segmentation-error-unavailable",
                        &[("title", sample.title)],
                    ))
                    .details(reason.clone())
                    .details_visible(state.shows_error_details())
                    .details_labels(
                        ctx.i18n.tr("error-details-show"),
                        ctx.i18n.tr("error-details-hide"),
                    )
                    .on_toggle_details(Message::ToggleErrorDetails)
                    .view(),
            );
        }
        LoadState::Loaded { .. } | LoadState::Loading => {}
    }

    content.into()
}

fn mask_area<'a>(state: &'a SegmentationView, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match state.load_state() {
        LoadState::Loading => {
            let spinner = AnimatedSpinner::new(ctx.colors.brand_primary, state.spinner_rotation())
                .into_element();
            Container::new(
                Column::new()
                    .spacing(spacing::SM)
                    .align_x(alignment::Horizontal::Center)
                    .push(spinner)
                    .push(text(ctx.i18n.tr("segmentation-loading")).size(typography::BODY)),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fixed(sizing::SEGMENTATION_IMAGE_HEIGHT))
            .into()
        }
        LoadState::Loaded { mask, .. } => Container::new(checkerboard::backdrop(
            image(mask.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        ))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SEGMENTATION_IMAGE_HEIGHT))
        .into(),
        LoadState::Failed { .. } => placeholder(ctx.i18n.tr("segmentation-no-mask")),
    }
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(text(label).size(typography::BODY))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::SEGMENTATION_IMAGE_HEIGHT))
        .into()
}

fn panel<'a>(heading: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(text(heading).size(typography::TITLE_SM))
            .push(body),
    )
    .padding(spacing::MD)
    .width(Length::FillPortion(1))
    .style(container_styles::panel)
    .into()
}

fn legend<'a>(i18n: &I18n, classes: &[ClassInfo]) -> Element<'a, Message> {
    let entries = legend_entries(classes);

    let rows = entries.chunks(LEGEND_COLUMNS).fold(
        Column::new().spacing(spacing::XS),
        |column, chunk| {
            let row = chunk.iter().fold(Row::new().spacing(spacing::MD), |row, entry| {
                row.push(
                    Row::new()
                        .spacing(spacing::XS)
                        .align_y(alignment::Vertical::Center)
                        .width(Length::Fixed(sizing::LEGEND_WIDTH))
                        .push(
                            Container::new(Space::new())
                                .width(Length::Fixed(sizing::LEGEND_SWATCH))
                                .height(Length::Fixed(sizing::LEGEND_SWATCH))
                                .style(container_styles::swatch(entry.color)),
                        )
                        .push(text(entry.label.clone()).size(typography::BODY_SM)),
                )
            });
            column.push(row)
        },
    );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("segmentation-legend-heading")).size(typography::TITLE_SM))
            .push(rows),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(container_styles::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::SAMPLE_IMAGES;
    use crate::domain::segmentation::{reference_legend, SegmentationResult};
    use crate::error::Error;

    #[test]
    fn single_class_yields_single_legend_entry() {
        let classes = [ClassInfo::new(0, "Water", Rgb::new(59, 130, 246))];
        let entries = legend_entries(&classes);
        assert_eq!(
            entries,
            vec![LegendEntry {
                label: "Water".to_string(),
                color: Color::from_rgb8(59, 130, 246),
            }]
        );
    }

    #[test]
    fn legend_keeps_document_order() {
        let entries = legend_entries(&reference_legend());
        assert_eq!(entries.first().map(|e| e.label.as_str()), Some("unlabeled"));
        assert_eq!(entries.last().map(|e| e.label.as_str()), Some("conflicting"));
    }

    #[test]
    fn every_load_state_renders() {
        let i18n = I18n::default();
        let images = ImageCatalog::default();
        let colors = ColorScheme::dark();
        let sample = SAMPLE_IMAGES[3];

        let loading = SegmentationView::new(sample, 1);
        let _ = view(&loading, ViewContext { i18n: &i18n, images: &images, colors });

        let mut failed = SegmentationView::new(sample, 1);
        failed.resolve(failed.ticket(), Err(Error::unavailable(3, "missing")));
        let _ = view(&failed, ViewContext { i18n: &i18n, images: &images, colors });

        let mut loaded = SegmentationView::new(sample, 1);
        let result = SegmentationResult::new(sample.id, vec![1], vec![0; 4], 1, 1, reference_legend())
            .expect("valid result");
        loaded.resolve(loaded.ticket(), Ok(result));
        let _ = view(&loaded, ViewContext { i18n: &i18n, images: &images, colors });
    }
}
