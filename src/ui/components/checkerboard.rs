// SPDX-License-Identifier: MPL-2.0
//! Checkerboard backdrop that makes transparent mask regions visible.

use crate::ui::design_tokens::palette;
use iced::widget::{canvas, Stack};
use iced::{mouse, Color, Element, Length, Rectangle, Theme};

const TILE_SIZE: f32 = 12.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Checkerboard;

/// Tile colors for the current theme, light first.
fn tile_colors(theme: &Theme) -> (Color, Color) {
    if matches!(theme, Theme::Light) {
        (palette::GRAY_100, palette::GRAY_200)
    } else {
        (palette::GRAY_700, palette::GRAY_900)
    }
}

impl<Message> canvas::Program<Message> for Checkerboard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let (even, odd) = tile_colors(theme);

        let cols = (bounds.width / TILE_SIZE).ceil().max(1.0) as u32;
        let rows = (bounds.height / TILE_SIZE).ceil().max(1.0) as u32;

        frame.fill_rectangle(iced::Point::ORIGIN, bounds.size(), even);
        for row in 0..rows {
            for col in (row % 2..cols).step_by(2) {
                frame.fill_rectangle(
                    iced::Point::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE),
                    iced::Size::new(TILE_SIZE, TILE_SIZE),
                    odd,
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Layers `content` over a checkerboard that fills the same space.
pub fn backdrop<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Stack::new()
        .push(
            canvas::Canvas::new(Checkerboard)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(content)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_differ_in_both_themes() {
        let (a, b) = tile_colors(&Theme::Light);
        assert_ne!(a, b);
        let (a, b) = tile_colors(&Theme::Dark);
        assert_ne!(a, b);
    }
}
