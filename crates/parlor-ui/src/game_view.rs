//! Game message bubble.
//!
//! Renders the title, formatted text and description of a game, followed by
//! either its animation or its photo. The photo box is sized from the
//! selected variant and re-renders when the variant's data reaches the cache.

use dioxus::prelude::*;
use parlor_media::sizing::{PHOTO_DISPLAY_SIZE, PHOTO_SIZE};
use parlor_media::{GameMessage, GameViewModel, MediaCache, MediaContent, MessageKey};

use crate::animation::AnimationView;
use crate::hooks::use_blob_updates;
use crate::layout::box_style;
use crate::rich_text::FormattedTextView;
use crate::theme::CURRENT_THEME;

/// Game message content. Renders nothing when `game` is `None`.
///
/// Requires a [`MediaCache`] in context.
#[component]
pub fn GameView(
    chat_id: i64,
    message_id: i64,
    game: Option<GameMessage>,
    /// Fires when the photo or animation is clicked.
    open_media: EventHandler<()>,
    /// Nominal size used to pick a photo variant.
    size: Option<u32>,
    /// Bounding box for the rendered photo.
    display_size: Option<u32>,
) -> Element {
    let cache = use_context::<MediaCache>();
    let revision = use_blob_updates(chat_id, message_id);
    // The cache changes out of band; reading the revision ties renders to it
    let _ = revision();

    let Some(view) = GameViewModel::build(
        MessageKey::new(chat_id, message_id),
        game.as_ref(),
        &cache,
        size.unwrap_or(PHOTO_SIZE),
        display_size.unwrap_or(PHOTO_DISPLAY_SIZE),
    ) else {
        return rsx! {};
    };

    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "game",
            div { class: "game-border {theme.accent_background_light()}" }
            div {
                class: "game-wrapper",
                if let Some(title) = view.title {
                    div { class: "game-title {theme.accent_color_dark()}", "{title}" }
                }
                if let Some(text) = view.text {
                    div { class: "game-text", FormattedTextView { text } }
                }
                if let Some(description) = view.description {
                    div { class: "game-description", "{description}" }
                }
                {render_media(view.media, open_media)}
            }
        }
    }
}

fn render_media(media: MediaContent, open_media: EventHandler<()>) -> Element {
    match media {
        MediaContent::Animation { key, animation } => rsx! {
            AnimationView {
                chat_id: key.chat_id,
                message_id: key.message_id,
                animation,
                open_media,
            }
        },
        MediaContent::Photo(photo) => {
            let style = box_style(photo.size);
            rsx! {
                div {
                    class: "game-photo",
                    style: "{style}",
                    onclick: move |_| open_media.call(()),
                    img {
                        class: "photo-img",
                        style: "{style}",
                        src: "{photo.src}",
                        alt: "",
                    }
                }
            }
        }
        MediaContent::None => rsx! {},
    }
}
