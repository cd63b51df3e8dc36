// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants of the showcase.

## Organization

- **Palette**: Base colors, including the two story accents
- **Opacity**: Standardized opacity levels (also used for hidden story content)
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component and page-layout sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use skysight::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let veil = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```

Story section heights live in [`sizing`] because the reveal logic derives
each section's visible fraction from them.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.09, 0.13);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.25, 0.32);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);
    pub const GRAY_200: Color = Color::from_rgb(0.9, 0.91, 0.92);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.96, 0.96);

    // Primary accent (sky blue)
    pub const PRIMARY_400: Color = Color::from_rgb(0.38, 0.65, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.39, 0.92);

    // Secondary accent (violet)
    pub const SECONDARY_400: Color = Color::from_rgb(0.65, 0.55, 0.98);
    pub const SECONDARY_500: Color = Color::from_rgb(0.55, 0.36, 0.96);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Story content before its reveal.
    pub const HIDDEN_CONTENT: f32 = 0.08;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon and indicator sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;
    pub const DOT: f32 = 10.0;
    pub const LEGEND_SWATCH: f32 = 16.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    // Page layout. The page is a vertical stack of fixed-height blocks.
    pub const HEADER_HEIGHT: f32 = 56.0;
    pub const HERO_HEIGHT: f32 = 320.0;
    pub const GALLERY_HEIGHT: f32 = 560.0;
    pub const STORY_SECTION_HEIGHT: f32 = 480.0;

    // Images
    pub const CAROUSEL_IMAGE_HEIGHT: f32 = 360.0;
    pub const STORY_IMAGE_HEIGHT: f32 = 300.0;
    pub const SEGMENTATION_IMAGE_HEIGHT: f32 = 380.0;
    pub const LEGEND_WIDTH: f32 = 260.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero heading
    pub const DISPLAY: f32 = 40.0;

    /// Large title - Page and section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - App name, panel headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Image titles, legend heading
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Story paragraphs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Small body - Legend entries
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Status text
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::HIDDEN_CONTENT > 0.0 && opacity::HIDDEN_CONTENT < opacity::OVERLAY_SUBTLE);

    // Images must fit inside the blocks that hold them.
    assert!(sizing::STORY_IMAGE_HEIGHT < sizing::STORY_SECTION_HEIGHT);
    assert!(sizing::CAROUSEL_IMAGE_HEIGHT < sizing::GALLERY_HEIGHT);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
