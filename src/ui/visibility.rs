// SPDX-License-Identifier: MPL-2.0
//! Visible fraction of page blocks.
//!
//! The gallery page is a vertical stack of fixed-height blocks inside a
//! scrollable. Given the scroll offset and the visible height, the fraction
//! of any block that is on screen follows from the block heights alone.

use crate::ui::design_tokens::sizing;

/// Visible part of the scrollable page, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageViewport {
    pub offset_y: f32,
    pub height: f32,
}

impl PageViewport {
    #[must_use]
    pub fn new(offset_y: f32, height: f32) -> Self {
        Self {
            offset_y: offset_y.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Fraction (0.0 to 1.0) of the block `[top, top + height)` that is on screen.
    #[must_use]
    pub fn visible_fraction(self, top: f32, height: f32) -> f32 {
        if height <= 0.0 {
            return 0.0;
        }
        let start = top.max(self.offset_y);
        let end = (top + height).min(self.offset_y + self.height);
        ((end - start) / height).clamp(0.0, 1.0)
    }
}

/// Top edge of the story section at `index` within the gallery page.
#[must_use]
pub fn story_section_top(index: usize) -> f32 {
    #[allow(clippy::cast_precision_loss)] // a handful of sections
    let preceding = index as f32 * sizing::STORY_SECTION_HEIGHT;
    sizing::HERO_HEIGHT + sizing::GALLERY_HEIGHT + preceding
}

/// Visible fraction of the story section at `index`.
#[must_use]
pub fn story_section_fraction(viewport: PageViewport, index: usize) -> f32 {
    viewport.visible_fraction(story_section_top(index), sizing::STORY_SECTION_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_fully_on_screen_is_one() {
        let viewport = PageViewport::new(0.0, 1000.0);
        assert!((viewport.visible_fraction(100.0, 200.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn block_below_viewport_is_zero() {
        let viewport = PageViewport::new(0.0, 500.0);
        assert_eq!(viewport.visible_fraction(600.0, 200.0), 0.0);
    }

    #[test]
    fn partially_scrolled_block_reports_overlap() {
        // Block 400..800, viewport 700..1200: 100 of 400 visible.
        let viewport = PageViewport::new(700.0, 500.0);
        assert!((viewport.visible_fraction(400.0, 400.0) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn first_story_section_starts_after_gallery() {
        assert_eq!(story_section_top(0), sizing::HERO_HEIGHT + sizing::GALLERY_HEIGHT);
        assert_eq!(
            story_section_top(2) - story_section_top(1),
            sizing::STORY_SECTION_HEIGHT
        );
    }

    #[test]
    fn scrolling_to_a_section_makes_it_visible() {
        let top = story_section_top(1);
        let viewport = PageViewport::new(top, sizing::STORY_SECTION_HEIGHT);
        assert!((story_section_fraction(viewport, 1) - 1.0).abs() < 1e-6);
        assert_eq!(story_section_fraction(viewport, 0), 0.0);
    }
}
