//! Photo size selection and aspect-preserving fit.

use crate::model::PhotoSize;

/// Nominal size used to pick a photo variant.
pub const PHOTO_SIZE: u32 = 320;
/// Bounding box for photos rendered inside a message.
pub const PHOTO_DISPLAY_SIZE: u32 = 320;
/// Nominal size for small previews.
pub const PHOTO_THUMBNAIL_SIZE: u32 = 90;
/// Bounding box for animations rendered inside a message.
pub const ANIMATION_DISPLAY_SIZE: u32 = 320;

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const ZERO: Dimensions = Dimensions { width: 0, height: 0 };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<&PhotoSize> for Dimensions {
    fn from(size: &PhotoSize) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Pick the size variant closest to `nominal`.
///
/// An inline variant ("i") always wins. Otherwise the comparison uses the
/// width when the first variant is landscape or square, and the height
/// otherwise; ties keep the earlier variant.
pub fn select_size_variant(sizes: &[PhotoSize], nominal: u32) -> Option<&PhotoSize> {
    let first = sizes.first()?;
    if nominal == 0 {
        return None;
    }

    if let Some(inline) = sizes.iter().find(|s| s.kind == "i") {
        return Some(inline);
    }

    let use_width = first.width >= first.height;
    let side = |s: &PhotoSize| if use_width { s.width } else { s.height };

    let mut best = first;
    let mut best_diff = side(first).abs_diff(nominal);
    for size in &sizes[1..] {
        let diff = side(size).abs_diff(nominal);
        if diff < best_diff {
            best = size;
            best_diff = diff;
        }
    }
    Some(best)
}

/// Scale `size` so that its larger side equals `max`, keeping aspect ratio.
pub fn fit_to_box(size: Dimensions, max: u32) -> Option<Dimensions> {
    fit_to_box_within(size, max, true)
}

/// Like [`fit_to_box`], but leaves sizes that already fit untouched unless
/// `increase_to_max` is set.
pub fn fit_to_box_within(size: Dimensions, max: u32, increase_to_max: bool) -> Option<Dimensions> {
    if size.is_empty() || max == 0 {
        return None;
    }

    if !increase_to_max && size.width < max && size.height < max {
        return Some(size);
    }

    let (w, h, m) = (size.width as u64, size.height as u64, max as u64);
    if size.width > size.height {
        Some(Dimensions::new(max, (h * m / w) as u32))
    } else {
        Some(Dimensions::new((w * m / h) as u32, max))
    }
}
