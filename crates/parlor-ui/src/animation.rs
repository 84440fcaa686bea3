//! Animation renderer used inside media messages.

use dioxus::prelude::*;
use parlor_media::sizing::ANIMATION_DISPLAY_SIZE;
use parlor_media::{Animation, AnimationModel, MediaCache};

use crate::hooks::use_blob_updates;
use crate::layout::box_style;

/// Looping muted animation, or its thumbnail until the animation is cached.
#[component]
pub fn AnimationView(
    chat_id: i64,
    message_id: i64,
    animation: Animation,
    open_media: EventHandler<()>,
    display_size: Option<u32>,
) -> Element {
    let cache = use_context::<MediaCache>();
    let revision = use_blob_updates(chat_id, message_id);
    let _ = revision();

    let AnimationModel { size, source, thumbnail } = AnimationModel::build(
        &animation,
        &cache,
        display_size.unwrap_or(ANIMATION_DISPLAY_SIZE),
    );
    let style = box_style(size);

    rsx! {
        div {
            class: "animation",
            style: "{style}",
            onclick: move |_| open_media.call(()),

            if let Some(source) = source {
                video {
                    class: "animation-video",
                    style: "{style}",
                    src: "{source}",
                    poster: "{thumbnail}",
                    autoplay: true,
                    muted: true,
                    r#loop: true,
                }
            } else {
                img {
                    class: "animation-preview",
                    style: "{style}",
                    src: "{thumbnail}",
                    alt: "",
                }
                span { class: "animation-badge", "GIF" }
            }
        }
    }
}
