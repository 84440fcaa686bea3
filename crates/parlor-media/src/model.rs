//! Message payload types consumed by the game view.
//!
//! These are owned by the message store and are read-only from the view's
//! perspective.

use serde::{Deserialize, Serialize};

use crate::blob::Blob;

/// Identity of a message, used to filter blob notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageKey {
    pub chat_id: i64,
    pub message_id: i64,
}

impl MessageKey {
    pub fn new(chat_id: i64, message_id: i64) -> Self {
        Self { chat_id, message_id }
    }
}

/// Reference to a remote file and, optionally, an inline copy of its data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileRef {
    /// Client-local file identifier, the media cache key.
    pub id: i32,
    /// Expected size in bytes (0 when unknown).
    #[serde(default)]
    pub size: u64,
    /// Inline data shipped with the message. Never serialized.
    #[serde(skip)]
    pub blob: Option<Blob>,
}

impl FileRef {
    pub fn new(id: i32) -> Self {
        Self { id, size: 0, blob: None }
    }

    /// Attach inline data.
    pub fn with_blob(mut self, blob: Blob) -> Self {
        self.size = blob.len() as u64;
        self.blob = Some(blob);
        self
    }
}

/// One size variant of a photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSize {
    /// Size tag ("s", "m", "x", "y", "i" for inline).
    #[serde(rename = "type", default)]
    pub kind: String,
    pub width: u32,
    pub height: u32,
    pub photo: FileRef,
}

impl PhotoSize {
    pub fn new(kind: impl Into<String>, width: u32, height: u32, photo: FileRef) -> Self {
        Self { kind: kind.into(), width, height, photo }
    }
}

/// A photo with its available size variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub sizes: Vec<PhotoSize>,
}

/// An animation (GIF or silent video) attached to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub thumbnail: Option<PhotoSize>,
    pub animation: FileRef,
}

/// Formatting entity over a span of message text.
///
/// `offset` and `length` are measured in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEntity {
    pub offset: usize,
    pub length: usize,
    #[serde(rename = "type")]
    pub kind: TextEntityKind,
}

impl TextEntity {
    pub fn new(offset: usize, length: usize, kind: TextEntityKind) -> Self {
        Self { offset, length, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextEntityKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Pre,
    PreCode { language: String },
    Url,
    TextUrl { url: String },
    Mention,
    MentionName { user_id: i64 },
    Hashtag,
    Cashtag,
    BotCommand,
    Email,
    PhoneNumber,
}

/// Message text with pre-parsed formatting entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub entities: Vec<TextEntity>,
}

impl RichText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), entities: Vec::new() }
    }

    pub fn with_entity(mut self, entity: TextEntity) -> Self {
        self.entities.push(entity);
        self
    }
}

/// Payload of a game message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameMessage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub text: RichText,
    #[serde(default)]
    pub photo: Option<Photo>,
    #[serde(default)]
    pub animation: Option<Animation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_message_from_json() {
        let json = r#"{
            "title": "Lumberjack",
            "description": "Chop as fast as you can",
            "text": {
                "text": "Beat my score!",
                "entities": [{ "offset": 0, "length": 4, "type": { "kind": "bold" } }]
            },
            "photo": {
                "sizes": [
                    { "type": "m", "width": 320, "height": 180, "photo": { "id": 7 } }
                ]
            }
        }"#;

        let game: GameMessage = serde_json::from_str(json).unwrap();
        assert_eq!(game.title, "Lumberjack");
        assert_eq!(game.text.entities[0].kind, TextEntityKind::Bold);
        let size = &game.photo.as_ref().unwrap().sizes[0];
        assert_eq!(size.kind, "m");
        assert_eq!(size.photo.id, 7);
        assert!(size.photo.blob.is_none());
        assert!(game.animation.is_none());
    }

    #[test]
    fn test_inline_blob_not_serialized() {
        let file = FileRef::new(3).with_blob(Blob::new(vec![1u8, 2], "image/png"));
        assert_eq!(file.size, 2);

        let json = serde_json::to_string(&file).unwrap();
        assert!(!json.contains("blob"));
    }
}
