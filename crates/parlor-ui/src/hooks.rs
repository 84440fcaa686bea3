//! Hooks binding component lifetimes to media cache subscriptions.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use parlor_media::{MediaCache, MessageKey};
use tracing::debug;

/// Re-render the calling component whenever blob data for its message lands.
///
/// Returns a revision counter; reading it during render subscribes the
/// component. Call it before reading the cache: the listener is registered
/// while the hook runs, so a blob stored between that render and the first
/// poll of the listener task still wakes the component.
///
/// The subscription is held by a resource owned by the calling scope, so it
/// is released on unmount and replaced when the key changes. Requires a
/// [`MediaCache`] in context.
pub fn use_blob_updates(chat_id: i64, message_id: i64) -> Signal<u64> {
    let cache = use_context::<MediaCache>();
    let revision = use_signal(|| 0u64);
    let starts = use_hook(|| Rc::new(Cell::new(0u64)));

    use_resource(use_reactive((&chat_id, &message_id), move |(chat_id, message_id)| {
        // Runs synchronously on mount; later runs follow a key change
        let mut updates = cache.subscribe(MessageKey::new(chat_id, message_id));
        let resubscribed = starts.get() > 0;
        starts.set(starts.get() + 1);

        async move {
            let mut revision = revision;
            // The render for the new key read the cache before this listener existed
            if resubscribed {
                *revision.write() += 1;
            }

            while let Some(update) = updates.recv().await {
                debug!(chat_id, message_id, file_id = ?update.file_id, "Blob ready, re-rendering");
                *revision.write() += 1;
            }
        }
    }));

    revision
}
