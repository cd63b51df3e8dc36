// SPDX-License-Identifier: MPL-2.0
//! Window header with the application name, language and theme toggles.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, Container, Row, Space};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CycleLanguage,
    CycleTheme,
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let language = button(
        text(ctx.i18n.tr_with_args(
            "header-language-button",
            &[("locale", &ctx.i18n.current_locale().to_string())],
        ))
        .size(typography::BODY_SM),
    )
    .on_press(Message::CycleLanguage)
    .style(button_styles::secondary);

    let theme = button(
        text(ctx.i18n.tr_with_args(
            "header-theme-button",
            &[("mode", &ctx.i18n.tr(ctx.theme_mode.i18n_key()))],
        ))
        .size(typography::BODY_SM),
    )
    .on_press(Message::CycleTheme)
    .style(button_styles::secondary);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::LG])
        .align_y(alignment::Vertical::Center)
        .push(text(ctx.i18n.tr("app-name")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(language)
        .push(theme);

    Container::new(row)
        .width(Length::Fill)
        .center_y(Length::Fixed(sizing::HEADER_HEIGHT))
        .style(container_styles::header)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_renders_for_every_theme_mode() {
        let i18n = I18n::default();
        for theme_mode in [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark] {
            let _element = view(ViewContext {
                i18n: &i18n,
                theme_mode,
            });
        }
    }
}
