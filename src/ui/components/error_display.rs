// SPDX-License-Identifier: MPL-2.0
//! Inline error panel.
//!
//! Shows a severity badge, a title, a user-facing message and, on demand,
//! the technical reason behind the failure.
//!
//! ```ignore
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .title(i18n.tr("segmentation-error-title"))
//!     .message(i18n.tr_with_args("segmentation-error-unavailable", &[("title", title)]))
//!     .details(reason)
//!     .details_visible(show_details)
//!     .on_toggle_details(Message::ToggleErrorDetails)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, rule, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    #[default]
    Error,
    Warning,
}

impl ErrorSeverity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    toggle_details_message: Option<Message>,
    show_details_label: String,
    hide_details_label: String,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            details: None,
            show_details: false,
            toggle_details_message: None,
            show_details_label: "Show details".to_string(),
            hide_details_label: "Hide details".to_string(),
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    #[must_use]
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Technical details, hidden behind a toggle.
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    #[must_use]
    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    #[must_use]
    pub fn details_labels(mut self, show_label: impl Into<String>, hide_label: impl Into<String>) -> Self {
        self.show_details_label = show_label.into();
        self.hide_details_label = hide_label.into();
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent_color = self.severity.color();

        let badge = Container::new(Text::new("!").size(typography::TITLE_MD))
            .width(Length::Fixed(sizing::ICON_LG))
            .height(Length::Fixed(sizing::ICON_LG))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(accent_color)),
                text_color: Some(palette::WHITE),
                border: iced::Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let mut content = Column::new().spacing(spacing::SM).width(Length::Fill);

        if let Some(title_text) = self.title {
            content = content.push(Text::new(title_text).size(typography::TITLE_SM).style(
                move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                },
            ));
        }

        if let Some(message_text) = self.message {
            content = content.push(Text::new(message_text).size(typography::BODY));
        }

        if let (Some(details_text), Some(toggle_msg)) = (self.details, self.toggle_details_message) {
            let toggle_label = if self.show_details {
                self.hide_details_label
            } else {
                self.show_details_label
            };
            content = content.push(
                button(Text::new(toggle_label).size(typography::BODY_SM))
                    .on_press(toggle_msg)
                    .style(button_styles::secondary),
            );

            if self.show_details {
                content = content.push(rule::horizontal(1)).push(
                    Text::new(details_text)
                        .size(typography::CAPTION)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.extended_palette().secondary.base.text),
                        }),
                );
            }
        }

        Container::new(
            Row::new()
                .spacing(spacing::MD)
                .align_y(alignment::Vertical::Top)
                .push(badge)
                .push(content),
        )
        .width(Length::Fill)
        .max_width(560.0)
        .padding(spacing::LG)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(iced::Background::Color(palette.background.weak.color)),
                border: iced::Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                text_color: Some(theme.palette().text),
                ..Default::default()
            }
        })
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        ToggleDetails,
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(ErrorSeverity::Error.color(), ErrorSeverity::Warning.color());
    }

    #[test]
    fn builder_keeps_fields() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new(ErrorSeverity::Error)
            .title("Segmentation unavailable")
            .message("Could not load segmentation data for Ground.")
            .details("responses/response_3.json not found")
            .details_visible(true)
            .on_toggle_details(TestMessage::ToggleDetails);

        assert_eq!(display.title.as_deref(), Some("Segmentation unavailable"));
        assert!(display.show_details);
        assert!(display.toggle_details_message.is_some());
        let _element = display.view();
    }

    #[test]
    fn details_labels_can_be_localized() {
        let display: ErrorDisplay<TestMessage> =
            ErrorDisplay::new(ErrorSeverity::Warning).details_labels("Afficher", "Masquer");
        assert_eq!(display.show_details_label, "Afficher");
        assert_eq!(display.hide_details_label, "Masquer");
    }
}
