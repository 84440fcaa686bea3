//! Message fixtures the viewer displays.
//!
//! A fixture is a JSON document listing game messages and, for each one, the
//! media files that the simulated download pipeline should deliver.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use parlor_media::{
    Animation, Blob, FileRef, GameMessage, MessageKey, Photo, PhotoSize, RichText, TextEntity,
    TextEntityKind,
};
use serde::{Deserialize, Serialize};

/// A set of messages and their downloadable media.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub messages: Vec<FixtureMessage>,
    /// Directory relative media paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureMessage {
    pub chat_id: i64,
    pub message_id: i64,
    pub game: Option<GameMessage>,
    #[serde(default)]
    pub media: Vec<MediaSource>,
}

impl FixtureMessage {
    pub fn key(&self) -> MessageKey {
        MessageKey::new(self.chat_id, self.message_id)
    }
}

/// Where a file's bytes come from once its download "completes".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSource {
    pub file_id: i32,
    /// File on disk, relative to the fixture.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Inline SVG markup, used by the built-in demo.
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Overrides the default download delay.
    #[serde(default)]
    pub delay_ms: Option<u64>,
}

impl MediaSource {
    /// Read the source's bytes.
    pub fn load(&self, base_dir: &Path) -> Result<Blob> {
        if let Some(svg) = &self.svg {
            let mime = self.mime_type.as_deref().unwrap_or("image/svg+xml");
            return Ok(Blob::new(svg.clone().into_bytes(), mime));
        }

        let Some(path) = &self.path else {
            bail!("media source for file {} has neither path nor svg", self.file_id);
        };
        let full_path = if path.is_absolute() {
            path.clone()
        } else {
            base_dir.join(path)
        };

        let blob = Blob::from_path(&full_path)
            .with_context(|| format!("reading media file {}", full_path.display()))?;
        Ok(match &self.mime_type {
            Some(mime) => Blob::new(blob.data().clone(), mime.clone()),
            None => blob,
        })
    }
}

impl Fixture {
    /// Load a fixture from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading fixture {}", path.display()))?;
        let mut fixture = Self::from_json(&json)
            .with_context(|| format!("parsing fixture {}", path.display()))?;
        fixture.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(fixture)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Built-in messages covering a photo, an animation thumbnail and text only.
    pub fn demo() -> Self {
        let photo = Photo {
            sizes: vec![
                PhotoSize::new("s", 90, 51, FileRef::new(101)),
                PhotoSize::new("m", 320, 180, FileRef::new(102)),
                PhotoSize::new("x", 800, 450, FileRef::new(103)),
            ],
        };

        let animation = Animation {
            duration: 3,
            width: 0,
            height: 0,
            file_name: "arcade.mp4".to_string(),
            mime_type: "video/mp4".to_string(),
            thumbnail: Some(PhotoSize::new("m", 320, 240, FileRef::new(202))),
            animation: FileRef::new(201),
        };

        Self {
            messages: vec![
                FixtureMessage {
                    chat_id: 1,
                    message_id: 10,
                    game: Some(GameMessage {
                        title: "Lumberjack".to_string(),
                        description: "Chop the tree, dodge the branches.".to_string(),
                        text: RichText::plain("Beat my score of 312 at example.com")
                            .with_entity(TextEntity::new(17, 3, TextEntityKind::Bold))
                            .with_entity(TextEntity::new(24, 11, TextEntityKind::Url)),
                        photo: Some(photo),
                        animation: None,
                    }),
                    media: vec![MediaSource {
                        file_id: 102,
                        path: None,
                        svg: Some(demo_svg(320, 180, "#2b6fb0", "Lumberjack")),
                        mime_type: None,
                        delay_ms: None,
                    }],
                },
                FixtureMessage {
                    chat_id: 1,
                    message_id: 11,
                    game: Some(GameMessage {
                        title: "Corsairs".to_string(),
                        description: "Sail, fire, plunder.".to_string(),
                        text: RichText::default(),
                        photo: None,
                        animation: Some(animation),
                    }),
                    media: vec![MediaSource {
                        file_id: 202,
                        path: None,
                        svg: Some(demo_svg(320, 240, "#ff4fd8", "Corsairs")),
                        mime_type: None,
                        delay_ms: Some(2500),
                    }],
                },
                FixtureMessage {
                    chat_id: 1,
                    message_id: 12,
                    game: Some(GameMessage {
                        title: "Math Battle".to_string(),
                        description: String::new(),
                        text: RichText::plain("/play with @quizbot")
                            .with_entity(TextEntity::new(0, 5, TextEntityKind::BotCommand))
                            .with_entity(TextEntity::new(11, 8, TextEntityKind::Mention)),
                        photo: None,
                        animation: None,
                    }),
                    media: Vec::new(),
                },
                FixtureMessage {
                    chat_id: 1,
                    message_id: 13,
                    game: None,
                    media: Vec::new(),
                },
            ],
            base_dir: PathBuf::new(),
        }
    }
}

fn demo_svg(width: u32, height: u32, color: &str, label: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="{w}" height="{h}" fill="{c}"/><text x="50%" y="50%" fill="#fff" font-family="sans-serif" font-size="28" text-anchor="middle" dominant-baseline="middle">{l}</text></svg>"##,
        w = width,
        h = height,
        c = color,
        l = label
    )
}
