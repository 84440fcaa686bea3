//! View models for game messages.
//!
//! A [`GameViewModel`] is rebuilt on every render from the message payload and
//! the current cache contents; the UI layer only maps it onto elements.

use crate::cache::MediaCache;
use crate::model::{Animation, GameMessage, MessageKey, Photo};
use crate::sizing::{fit_to_box, select_size_variant, Dimensions};
use crate::text::{format_rich_text, FormattedText};

/// Whether the media shown for a message has its data yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaState {
    AwaitingMedia,
    MediaReady,
}

/// Photo box geometry and source.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoBox {
    /// File backing the chosen variant, if one was chosen.
    pub file_id: Option<i32>,
    /// Fitted size; zero when no variant or fit was available.
    pub size: Dimensions,
    /// Displayable reference, empty until the data is cached.
    pub src: String,
}

impl PhotoBox {
    pub fn build(photo: &Photo, cache: &MediaCache, size: u32, display_size: u32) -> Self {
        let fitted = select_size_variant(&photo.sizes, size)
            .and_then(|variant| fit_to_box(variant.into(), display_size).map(|fit| (variant, fit)));

        match fitted {
            Some((variant, fit)) => Self {
                file_id: Some(variant.photo.id),
                size: fit,
                src: cache.src(&variant.photo).unwrap_or_default(),
            },
            None => Self {
                file_id: None,
                size: Dimensions::ZERO,
                src: String::new(),
            },
        }
    }

    pub fn state(&self) -> MediaState {
        if self.file_id.is_some() && self.src.is_empty() {
            MediaState::AwaitingMedia
        } else {
            MediaState::MediaReady
        }
    }
}

/// What the media area of a game message shows.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaContent {
    /// Delegated to the animation renderer.
    Animation { key: MessageKey, animation: Animation },
    Photo(PhotoBox),
    None,
}

impl MediaContent {
    /// Pick the media for a game.
    ///
    /// An animation wins only when it has a source or a thumbnail; otherwise
    /// the photo, if any, is shown instead.
    pub fn resolve(
        key: MessageKey,
        game: &GameMessage,
        cache: &MediaCache,
        size: u32,
        display_size: u32,
    ) -> Self {
        if let Some(animation) = &game.animation {
            if cache.src(&animation.animation).is_some() || animation.thumbnail.is_some() {
                return MediaContent::Animation {
                    key,
                    animation: animation.clone(),
                };
            }
        }

        if let Some(photo) = &game.photo {
            return MediaContent::Photo(PhotoBox::build(photo, cache, size, display_size));
        }

        MediaContent::None
    }
}

/// Everything the game view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct GameViewModel {
    pub key: MessageKey,
    pub title: Option<String>,
    pub text: Option<FormattedText>,
    pub description: Option<String>,
    pub media: MediaContent,
}

impl GameViewModel {
    /// Returns `None` when there is no game to render.
    pub fn build(
        key: MessageKey,
        game: Option<&GameMessage>,
        cache: &MediaCache,
        size: u32,
        display_size: u32,
    ) -> Option<Self> {
        let game = game?;
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

        Some(Self {
            key,
            title: non_empty(&game.title),
            text: format_rich_text(&game.text),
            description: non_empty(&game.description),
            media: MediaContent::resolve(key, game, cache, size, display_size),
        })
    }

    pub fn media_state(&self) -> MediaState {
        match &self.media {
            MediaContent::Photo(photo) => photo.state(),
            _ => MediaState::MediaReady,
        }
    }
}

/// Geometry and sources for the animation renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationModel {
    pub size: Dimensions,
    /// Playable source, once the animation itself is cached.
    pub source: Option<String>,
    /// Thumbnail source, empty until the thumbnail is cached.
    pub thumbnail: String,
}

impl AnimationModel {
    pub fn build(animation: &Animation, cache: &MediaCache, display_size: u32) -> Self {
        let mut dims = Dimensions::new(animation.width, animation.height);
        if dims.is_empty() {
            if let Some(thumb) = &animation.thumbnail {
                dims = thumb.into();
            }
        }

        Self {
            size: fit_to_box(dims, display_size).unwrap_or(Dimensions::ZERO),
            source: cache.src(&animation.animation),
            thumbnail: animation
                .thumbnail
                .as_ref()
                .and_then(|t| cache.src(&t.photo))
                .unwrap_or_default(),
        }
    }

    pub fn state(&self) -> MediaState {
        if self.source.is_some() {
            MediaState::MediaReady
        } else {
            MediaState::AwaitingMedia
        }
    }
}
