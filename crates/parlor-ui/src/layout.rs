//! Inline style helpers.

use parlor_media::Dimensions;

/// Fixed-size box style. Zero sizes are kept so empty media holds its place.
pub fn box_style(size: Dimensions) -> String {
    format!("width: {}px; height: {}px;", size.width, size.height)
}
