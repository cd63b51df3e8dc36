// SPDX-License-Identifier: MPL-2.0
//! Window icon.
//!
//! The SkySight mark is embedded as SVG and rasterized at startup.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/skysight.svg");

/// Edge length of the rasterized icon, in pixels.
pub const ICON_SIZE: u32 = 128;

/// Renders the embedded mark to a square RGBA buffer.
///
/// Returns `None` if the SVG cannot be parsed or has an empty size.
#[must_use]
pub fn render_rgba(size: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default())
        .map_err(|err| tracing::warn!(%err, "failed to parse window icon"))
        .ok()?;

    let source = tree.size();
    if source.width() <= 0.0 || source.height() <= 0.0 {
        return None;
    }
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / source.width(),
        size as f32 / source.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

/// Window title bar icon, or `None` if rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = render_rgba(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_renders_opaque_pixels() {
        let rgba = render_rgba(32).expect("icon renders");
        assert_eq!(rgba.len(), 32 * 32 * 4);
        assert!(rgba.chunks_exact(4).any(|px| px[3] == 255));
    }

    #[test]
    fn window_icon_is_available() {
        assert!(load_window_icon().is_some());
    }
}
