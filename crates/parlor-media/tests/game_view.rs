//! Integration tests for game message view models and blob notifications
//!
//! These cover content selection, photo geometry, text presence and the
//! subscription lifecycle a mounted view goes through.

use std::time::Duration;

use parlor_media::sizing::{PHOTO_DISPLAY_SIZE, PHOTO_SIZE};
use parlor_media::{
    fit_to_box, select_size_variant, Animation, Blob, Dimensions, FileRef, GameMessage,
    GameViewModel, MediaCache, MediaContent, MediaState, MessageKey, Photo, PhotoSize, RichText,
};
use tokio::time::timeout;

const KEY: MessageKey = MessageKey { chat_id: 5, message_id: 10 };

fn photo() -> Photo {
    Photo {
        sizes: vec![
            PhotoSize::new("s", 90, 51, FileRef::new(11)),
            PhotoSize::new("m", 320, 180, FileRef::new(12)),
            PhotoSize::new("x", 800, 450, FileRef::new(13)),
        ],
    }
}

fn animation(thumbnail: Option<PhotoSize>) -> Animation {
    Animation {
        duration: 4,
        width: 480,
        height: 270,
        file_name: "intro.mp4".to_string(),
        mime_type: "video/mp4".to_string(),
        thumbnail,
        animation: FileRef::new(21),
    }
}

fn jpeg() -> Blob {
    Blob::new(vec![0xffu8, 0xd8, 0xff], "image/jpeg")
}

fn build(game: Option<&GameMessage>, cache: &MediaCache) -> Option<GameViewModel> {
    GameViewModel::build(KEY, game, cache, PHOTO_SIZE, PHOTO_DISPLAY_SIZE)
}

#[test]
fn test_no_game_renders_nothing() {
    let cache = MediaCache::new();
    assert!(build(None, &cache).is_none());
    assert!(GameViewModel::build(KEY, None, &cache, 0, 0).is_none());
}

#[test]
fn test_animation_with_source_wins_over_photo() {
    let cache = MediaCache::new();
    cache.put_blob(KEY, 21, Blob::new(vec![1u8; 8], "video/mp4")).unwrap();

    let game = GameMessage {
        animation: Some(animation(None)),
        photo: Some(photo()),
        ..Default::default()
    };

    let view = build(Some(&game), &cache).unwrap();
    match view.media {
        MediaContent::Animation { key, animation } => {
            assert_eq!(key, KEY);
            assert_eq!(animation.animation.id, 21);
        }
        other => panic!("expected animation, got {:?}", other),
    }
}

#[test]
fn test_animation_with_inline_source_or_thumbnail() {
    let cache = MediaCache::new();

    let mut inline = animation(None);
    inline.animation = FileRef::new(21).with_blob(Blob::new(vec![1u8; 8], "video/mp4"));
    let game = GameMessage { animation: Some(inline), ..Default::default() };
    assert!(matches!(build(Some(&game), &cache).unwrap().media, MediaContent::Animation { .. }));

    let thumb = PhotoSize::new("m", 320, 180, FileRef::new(22));
    let game = GameMessage { animation: Some(animation(Some(thumb))), ..Default::default() };
    assert!(matches!(build(Some(&game), &cache).unwrap().media, MediaContent::Animation { .. }));
}

#[test]
fn test_animation_without_source_falls_through_to_photo() {
    let cache = MediaCache::new();
    let game = GameMessage {
        animation: Some(animation(None)),
        photo: Some(photo()),
        ..Default::default()
    };

    let view = build(Some(&game), &cache).unwrap();
    assert!(matches!(view.media, MediaContent::Photo(_)));

    let game = GameMessage { animation: Some(animation(None)), ..Default::default() };
    assert_eq!(build(Some(&game), &cache).unwrap().media, MediaContent::None);
}

#[test]
fn test_photo_box_matches_fit_of_selected_variant() {
    let cache = MediaCache::new();
    let game = GameMessage { photo: Some(photo()), ..Default::default() };

    for (size, display) in [(320, 320), (90, 200), (1280, 260)] {
        let view = GameViewModel::build(KEY, Some(&game), &cache, size, display).unwrap();
        let sizes = &game.photo.as_ref().unwrap().sizes;
        let expected = select_size_variant(sizes, size)
            .and_then(|v| fit_to_box(v.into(), display))
            .unwrap();

        match view.media {
            MediaContent::Photo(photo_box) => assert_eq!(photo_box.size, expected),
            other => panic!("expected photo, got {:?}", other),
        }
    }
}

#[test]
fn test_photo_without_geometry_keeps_zero_box() {
    let cache = MediaCache::new();
    let game = GameMessage {
        photo: Some(Photo { sizes: vec![PhotoSize::new("m", 0, 0, FileRef::new(12))] }),
        ..Default::default()
    };

    match build(Some(&game), &cache).unwrap().media {
        MediaContent::Photo(photo_box) => {
            assert_eq!(photo_box.size, Dimensions::ZERO);
            assert_eq!(photo_box.src, "");
        }
        other => panic!("expected photo, got {:?}", other),
    }
}

#[test]
fn test_photo_source_tracks_cache() {
    let cache = MediaCache::new();
    let game = GameMessage { photo: Some(photo()), ..Default::default() };

    let view = build(Some(&game), &cache).unwrap();
    assert_eq!(view.media_state(), MediaState::AwaitingMedia);

    cache.put_blob(KEY, 12, jpeg()).unwrap();
    let view = build(Some(&game), &cache).unwrap();
    assert_eq!(view.media_state(), MediaState::MediaReady);
    match view.media {
        MediaContent::Photo(photo_box) => {
            assert_eq!(photo_box.file_id, Some(12));
            assert_eq!(photo_box.src, "data:image/jpeg;base64,/9j/");
        }
        other => panic!("expected photo, got {:?}", other),
    }
}

#[test]
fn test_text_only_game() {
    let cache = MediaCache::new();
    let game = GameMessage {
        title: "Corsairs".to_string(),
        description: String::new(),
        text: RichText::plain("Sail away"),
        ..Default::default()
    };

    let view = build(Some(&game), &cache).unwrap();
    assert_eq!(view.title.as_deref(), Some("Corsairs"));
    assert_eq!(view.text.unwrap().plain_text(), "Sail away");
    assert!(view.description.is_none());
    assert_eq!(view.media, MediaContent::None);

    let empty = build(Some(&GameMessage::default()), &cache).unwrap();
    assert!(empty.title.is_none() && empty.text.is_none() && empty.description.is_none());
}

#[tokio::test]
async fn test_only_matching_update_wakes_view() {
    let cache = MediaCache::new();
    let mut sub = cache.subscribe(KEY);

    cache.put_blob(MessageKey::new(5, 11), 12, jpeg()).unwrap();
    assert!(timeout(Duration::from_millis(50), sub.recv()).await.is_err());

    cache.put_blob(KEY, 12, jpeg()).unwrap();
    let update = timeout(Duration::from_millis(50), sub.recv()).await.unwrap().unwrap();
    assert_eq!(update.key(), KEY);

    // Exactly one wake-up
    assert!(timeout(Duration::from_millis(50), sub.recv()).await.is_err());
}

#[tokio::test]
async fn test_listener_counts_renders() {
    let cache = MediaCache::new();
    let mut sub = cache.subscribe(KEY);

    let watcher = tokio::spawn(async move {
        let mut renders = 0;
        while timeout(Duration::from_millis(100), sub.recv()).await.ok().flatten().is_some() {
            renders += 1;
        }
        renders
    });

    cache.put_blob(MessageKey::new(5, 11), 1, jpeg()).unwrap();
    cache.put_blob(MessageKey::new(6, 10), 2, jpeg()).unwrap();
    cache.put_blob(KEY, 3, jpeg()).unwrap();

    assert_eq!(watcher.await.unwrap(), 1);
}

#[tokio::test]
async fn test_unmounted_view_is_not_notified() {
    let cache = MediaCache::new();
    let sub = cache.subscribe(KEY);

    let task = tokio::spawn(async move {
        let mut sub = sub;
        sub.recv().await
    });
    tokio::task::yield_now().await;
    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());

    assert_eq!(cache.listener_count(), 0);
    cache.put_blob(KEY, 12, jpeg()).unwrap();
    assert_eq!(cache.len(), 1);
}
