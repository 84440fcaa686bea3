//! Rich text formatting.
//!
//! Turns message text plus its formatting entities into a flat list of
//! styled spans ready for rendering.

use crate::model::{RichText, TextEntity, TextEntityKind};

/// How a span of text is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Pre { language: Option<String> },
    Link { href: String },
    /// Mentions, hashtags, cashtags and bot commands.
    Highlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
}

/// Renderable formatted text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedText {
    pub spans: Vec<TextSpan>,
}

impl FormattedText {
    /// Concatenated text of all spans.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Format message text. Returns `None` when there is nothing to render.
///
/// Entities out of range are clamped to the text, entities overlapping an
/// earlier one are rendered as plain text, and offsets that split a
/// surrogate pair are widened to the whole character.
pub fn format_rich_text(text: &RichText) -> Option<FormattedText> {
    if text.text.is_empty() {
        return None;
    }

    let boundaries = utf16_boundaries(&text.text);
    let utf16_len = boundaries.len() - 1;

    let mut entities: Vec<&TextEntity> = text.entities.iter().collect();
    entities.sort_by_key(|e| e.offset);

    let mut spans = Vec::new();
    let mut cursor = 0usize;

    for entity in entities {
        let mut start = entity.offset.min(utf16_len);
        let mut end = entity.offset.saturating_add(entity.length).min(utf16_len);
        while boundaries[start].is_none() {
            start -= 1;
        }
        while boundaries[end].is_none() {
            end += 1;
        }
        if start >= end || start < cursor {
            continue;
        }

        let byte = |u: usize| boundaries[u].unwrap_or(text.text.len());
        if start > cursor {
            spans.push(TextSpan {
                text: text.text[byte(cursor)..byte(start)].to_string(),
                kind: SpanKind::Plain,
            });
        }

        let slice = &text.text[byte(start)..byte(end)];
        spans.push(TextSpan {
            text: slice.to_string(),
            kind: span_kind(&entity.kind, slice),
        });
        cursor = end;
    }

    if cursor < utf16_len {
        let from = boundaries[cursor].unwrap_or(text.text.len());
        spans.push(TextSpan {
            text: text.text[from..].to_string(),
            kind: SpanKind::Plain,
        });
    }

    Some(FormattedText { spans })
}

/// Byte offset for every UTF-16 position; `None` inside a surrogate pair.
fn utf16_boundaries(text: &str) -> Vec<Option<usize>> {
    let mut out = Vec::with_capacity(text.len() + 1);
    for (byte, ch) in text.char_indices() {
        out.push(Some(byte));
        if ch.len_utf16() == 2 {
            out.push(None);
        }
    }
    out.push(Some(text.len()));
    out
}

fn span_kind(kind: &TextEntityKind, slice: &str) -> SpanKind {
    match kind {
        TextEntityKind::Bold => SpanKind::Bold,
        TextEntityKind::Italic => SpanKind::Italic,
        TextEntityKind::Underline => SpanKind::Underline,
        TextEntityKind::Strikethrough => SpanKind::Strikethrough,
        TextEntityKind::Code => SpanKind::Code,
        TextEntityKind::Pre => SpanKind::Pre { language: None },
        TextEntityKind::PreCode { language } => SpanKind::Pre {
            language: Some(language.clone()),
        },
        TextEntityKind::Url => {
            let href = if slice.contains("://") {
                slice.to_string()
            } else {
                format!("http://{}", slice)
            };
            SpanKind::Link { href }
        }
        TextEntityKind::TextUrl { url } => SpanKind::Link { href: url.clone() },
        TextEntityKind::Email => SpanKind::Link {
            href: format!("mailto:{}", slice),
        },
        TextEntityKind::PhoneNumber => SpanKind::Link {
            href: format!("tel:{}", slice),
        },
        TextEntityKind::Mention
        | TextEntityKind::MentionName { .. }
        | TextEntityKind::Hashtag
        | TextEntityKind::Cashtag
        | TextEntityKind::BotCommand => SpanKind::Highlight,
    }
}
