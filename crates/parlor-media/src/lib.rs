//! Media layer for Parlor chat message views.
//!
//! Holds everything about a game message that does not depend on the UI
//! framework:
//!
//! - **Model**: message payload types ([`GameMessage`], [`Photo`], [`Animation`])
//! - **Cache**: [`MediaCache`] mapping file ids to downloaded [`Blob`]s, with
//!   per-message change notifications via [`BlobSubscription`]
//! - **Sizing**: variant selection and aspect-preserving fit
//! - **Text**: rich text entity formatting
//! - **Content**: [`GameViewModel`] and the [`MediaContent`] dispatch
//!
//! # Example
//!
//! ```
//! use parlor_media::{GameMessage, GameViewModel, MediaCache, MessageKey, RichText};
//! use parlor_media::sizing::{PHOTO_DISPLAY_SIZE, PHOTO_SIZE};
//!
//! let cache = MediaCache::new();
//! let game = GameMessage {
//!     title: "Lumberjack".to_string(),
//!     text: RichText::plain("Beat my score"),
//!     ..Default::default()
//! };
//!
//! let view = GameViewModel::build(MessageKey::new(1, 2), Some(&game), &cache, PHOTO_SIZE, PHOTO_DISPLAY_SIZE)
//!     .unwrap();
//! assert_eq!(view.title.as_deref(), Some("Lumberjack"));
//! ```

pub mod blob;
pub mod cache;
pub mod content;
pub mod error;
pub mod model;
pub mod sizing;
pub mod text;

pub use blob::Blob;
pub use cache::{BlobSubscription, BlobUpdate, MediaCache};
pub use content::{AnimationModel, GameViewModel, MediaContent, MediaState, PhotoBox};
pub use error::{MediaError, MediaResult};
pub use model::{
    Animation, FileRef, GameMessage, MessageKey, Photo, PhotoSize, RichText, TextEntity,
    TextEntityKind,
};
pub use sizing::{fit_to_box, select_size_variant, Dimensions};
pub use text::{format_rich_text, FormattedText, SpanKind, TextSpan};
