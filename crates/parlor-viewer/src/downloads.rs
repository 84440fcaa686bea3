//! Simulated download pipeline.
//!
//! Each media source is delivered into the [`MediaCache`] after its delay,
//! which is what wakes the mounted views waiting on it.

use std::path::Path;
use std::time::Duration;

use futures::future::join_all;
use parlor_media::{MediaCache, MessageKey};
use tracing::{info, warn};

use crate::fixture::{Fixture, MediaSource};

/// Outcome of a download run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub delivered: usize,
    pub failed: usize,
}

/// Deliver every media source in the fixture, concurrently.
pub async fn download_all(cache: MediaCache, fixture: &Fixture, default_delay: Duration) -> DownloadReport {
    let cache = &cache;
    let jobs = fixture.messages.iter().flat_map(|message| {
        let key = message.key();
        message
            .media
            .iter()
            .map(move |source| deliver(cache, key, source, &fixture.base_dir, default_delay))
    });

    let results = join_all(jobs).await;
    let delivered = results.iter().filter(|ok| **ok).count();
    let report = DownloadReport {
        delivered,
        failed: results.len() - delivered,
    };
    info!(delivered = report.delivered, failed = report.failed, "Downloads finished");
    report
}

async fn deliver(
    cache: &MediaCache,
    key: MessageKey,
    source: &MediaSource,
    base_dir: &Path,
    default_delay: Duration,
) -> bool {
    let delay = source.delay_ms.map(Duration::from_millis).unwrap_or(default_delay);
    tokio::time::sleep(delay).await;

    let loaded = source
        .load(base_dir)
        .and_then(|blob| Ok(cache.put_blob(key, source.file_id, blob)?));

    match loaded {
        Ok(()) => true,
        Err(e) => {
            warn!(
                chat_id = key.chat_id,
                message_id = key.message_id,
                file_id = source.file_id,
                error = %e,
                "Media download failed"
            );
            false
        }
    }
}
