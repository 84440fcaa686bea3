//! Immutable binary data with a lazily computed displayable reference.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use bytes::Bytes;

use crate::error::MediaResult;

struct BlobInner {
    data: Bytes,
    mime_type: String,
    data_url: OnceLock<String>,
}

/// Downloaded file contents.
///
/// Cloning is cheap: the bytes and the memoized `data:` URL are shared.
#[derive(Clone)]
pub struct Blob {
    inner: Arc<BlobInner>,
}

impl Blob {
    /// Wrap raw bytes with an explicit MIME type.
    pub fn new(data: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(BlobInner {
                data: data.into(),
                mime_type: mime_type.into(),
                data_url: OnceLock::new(),
            }),
        }
    }

    /// Read a file from disk, guessing the MIME type from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> MediaResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        Ok(Self::new(data, mime_from_path(path)))
    }

    pub fn data(&self) -> &Bytes {
        &self.inner.data
    }

    pub fn mime_type(&self) -> &str {
        &self.inner.mime_type
    }

    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// `data:` URL for use as an `src` attribute, encoded on first use.
    pub fn data_url(&self) -> &str {
        self.inner.data_url.get_or_init(|| {
            use base64::{Engine as _, engine::general_purpose::STANDARD};
            format!("data:{};base64,{}", self.inner.mime_type, STANDARD.encode(&self.inner.data))
        })
    }
}

impl PartialEq for Blob {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.mime_type == other.inner.mime_type && self.inner.data == other.inner.data)
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("mime_type", &self.inner.mime_type)
            .field("len", &self.inner.data.len())
            .finish()
    }
}

/// Guess a MIME type from a file extension.
pub fn mime_from_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}
