//! Client-side media cache with change notifications.
//!
//! Download tasks insert blobs with [`MediaCache::put_blob`]; views read them
//! by file id and hold a [`BlobSubscription`] while mounted so they can
//! re-render when the data for their message arrives.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::{debug, trace};

use crate::blob::Blob;
use crate::error::{MediaError, MediaResult};
use crate::model::{FileRef, MessageKey};

/// Buffered notifications per subscriber before it is considered lagged.
pub const BLOB_UPDATE_CAPACITY: usize = 256;

/// Notification that a blob for a message's media became available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobUpdate {
    pub chat_id: i64,
    pub message_id: i64,
    /// File that changed. `None` for a synthetic refresh after lag.
    pub file_id: Option<i32>,
}

impl BlobUpdate {
    pub fn new(key: MessageKey, file_id: i32) -> Self {
        Self {
            chat_id: key.chat_id,
            message_id: key.message_id,
            file_id: Some(file_id),
        }
    }

    fn refresh(key: MessageKey) -> Self {
        Self {
            chat_id: key.chat_id,
            message_id: key.message_id,
            file_id: None,
        }
    }

    pub fn key(&self) -> MessageKey {
        MessageKey::new(self.chat_id, self.message_id)
    }
}

struct CacheInner {
    blobs: DashMap<i32, Blob>,
    updates: broadcast::Sender<BlobUpdate>,
}

/// Shared handle to the media cache. Clones refer to the same cache.
#[derive(Clone)]
pub struct MediaCache {
    inner: Arc<CacheInner>,
}

impl MediaCache {
    pub fn new() -> Self {
        let (updates, _) = broadcast::channel(BLOB_UPDATE_CAPACITY);
        Self {
            inner: Arc::new(CacheInner {
                blobs: DashMap::new(),
                updates,
            }),
        }
    }

    /// Cached data for a file id.
    pub fn blob(&self, file_id: i32) -> Option<Blob> {
        self.inner.blobs.get(&file_id).map(|entry| entry.value().clone())
    }

    /// Data for a file reference: the cache entry, else the inline copy.
    pub fn file_blob(&self, file: &FileRef) -> Option<Blob> {
        self.blob(file.id).or_else(|| file.blob.clone())
    }

    /// Displayable reference (`data:` URL) for a blob.
    pub fn displayable_reference(&self, blob: Option<&Blob>) -> Option<String> {
        blob.map(|b| b.data_url().to_string())
    }

    /// Displayable reference for a file, if any data is available.
    pub fn src(&self, file: &FileRef) -> Option<String> {
        self.displayable_reference(self.file_blob(file).as_ref())
    }

    /// Store data for `file_id` and notify listeners of `key`.
    pub fn put_blob(&self, key: MessageKey, file_id: i32, blob: Blob) -> MediaResult<()> {
        if blob.is_empty() {
            return Err(MediaError::EmptyBlob(file_id));
        }

        debug!(
            chat_id = key.chat_id,
            message_id = key.message_id,
            file_id,
            bytes = blob.len(),
            "Blob cached"
        );
        self.inner.blobs.insert(file_id, blob);

        if self.inner.updates.send(BlobUpdate::new(key, file_id)).is_err() {
            trace!(file_id, "No blob listeners");
        }
        Ok(())
    }

    /// Drop cached data for a file. Views keep their last render.
    pub fn remove(&self, file_id: i32) -> MediaResult<Blob> {
        self.inner
            .blobs
            .remove(&file_id)
            .map(|(_, blob)| blob)
            .ok_or(MediaError::UnknownFile(file_id))
    }

    /// Listen for blob updates belonging to one message.
    pub fn subscribe(&self, key: MessageKey) -> BlobSubscription {
        trace!(chat_id = key.chat_id, message_id = key.message_id, "Blob listener registered");
        BlobSubscription {
            key,
            rx: self.inner.updates.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.updates.receiver_count()
    }

    pub fn len(&self) -> usize {
        self.inner.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.blobs.is_empty()
    }
}

impl Default for MediaCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MediaCache {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for MediaCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaCache")
            .field("entries", &self.inner.blobs.len())
            .field("listeners", &self.inner.updates.receiver_count())
            .finish()
    }
}

/// Registered blob listener for one message.
///
/// Dropping the handle deregisters it.
pub struct BlobSubscription {
    key: MessageKey,
    rx: broadcast::Receiver<BlobUpdate>,
}

impl BlobSubscription {
    pub fn key(&self) -> MessageKey {
        self.key
    }

    /// Wait for the next update for this message.
    ///
    /// Returns `None` once the cache is gone. A lagged receiver gets a
    /// synthetic update since the missed ones may have matched.
    pub async fn recv(&mut self) -> Option<BlobUpdate> {
        loop {
            match self.rx.recv().await {
                Ok(update) if update.key() == self.key => return Some(update),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    debug!(
                        chat_id = self.key.chat_id,
                        message_id = self.key.message_id,
                        missed,
                        "Blob listener lagged"
                    );
                    return Some(BlobUpdate::refresh(self.key));
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking variant of [`recv`](Self::recv).
    pub fn try_recv(&mut self) -> Option<BlobUpdate> {
        loop {
            match self.rx.try_recv() {
                Ok(update) if update.key() == self.key => return Some(update),
                Ok(_) => continue,
                Err(broadcast::error::TryRecvError::Lagged(_)) => {
                    return Some(BlobUpdate::refresh(self.key));
                }
                Err(_) => return None,
            }
        }
    }
}

impl Drop for BlobSubscription {
    fn drop(&mut self) {
        trace!(
            chat_id = self.key.chat_id,
            message_id = self.key.message_id,
            "Blob listener released"
        );
    }
}
