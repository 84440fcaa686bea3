//! Viewer application components.

use dioxus::prelude::*;
use parlor_media::{MediaCache, MessageKey};
use parlor_ui::{GameView, ThemeSwitcher, ThemedRoot};
use tracing::info;

use crate::config::ViewerSettings;
use crate::downloads::download_all;
use crate::fixture::{Fixture, FixtureMessage};

/// Message list backed by a fresh media cache.
///
/// Provides the cache to every message and starts the simulated downloads
/// once, on mount.
#[component]
pub fn App(fixture: Fixture, settings: ViewerSettings) -> Element {
    let cache = use_context_provider(MediaCache::new);
    let mut opened = use_signal(|| 0usize);

    use_hook({
        let fixture = fixture.clone();
        move || {
            spawn(async move {
                download_all(cache, &fixture, settings.download_delay()).await;
            });
        }
    });

    rsx! {
        ThemedRoot {
            ThemeSwitcher {}
            div {
                class: "message-list",
                for message in fixture.messages.iter() {
                    MessageBubble {
                        key: "{message.chat_id}-{message.message_id}",
                        message: message.clone(),
                        settings,
                        on_open: move |key: MessageKey| {
                            *opened.write() += 1;
                            info!(chat_id = key.chat_id, message_id = key.message_id, "Open media");
                        },
                    }
                }
                div { class: "message-meta", "Media opened {opened} times" }
            }
        }
    }
}

/// One message row. Hiding it unmounts the game view and its listener.
#[component]
fn MessageBubble(
    message: FixtureMessage,
    settings: ViewerSettings,
    on_open: EventHandler<MessageKey>,
) -> Element {
    let mut visible = use_signal(|| true);
    let key = message.key();
    let shown = visible();

    rsx! {
        div {
            class: "message-bubble",
            div {
                class: "message-meta",
                span { "chat {key.chat_id} \u{b7} message {key.message_id} " }
                button {
                    class: "message-toggle",
                    onclick: move |_| visible.set(!shown),
                    if shown { "Hide" } else { "Show" }
                }
            }
            if shown {
                GameView {
                    chat_id: key.chat_id,
                    message_id: key.message_id,
                    game: message.game.clone(),
                    open_media: move |_| on_open.call(key),
                    size: settings.size,
                    display_size: settings.display_size,
                }
            }
        }
    }
}
