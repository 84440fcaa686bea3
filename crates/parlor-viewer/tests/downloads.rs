//! Integration tests for fixture loading and the simulated download pipeline

use std::time::Duration;

use parlor_media::sizing::{PHOTO_DISPLAY_SIZE, PHOTO_SIZE};
use parlor_media::{GameViewModel, MediaCache, MediaContent, MediaState, MessageKey};
use parlor_viewer::downloads::{download_all, DownloadReport};
use parlor_viewer::fixture::Fixture;
use tokio::time::timeout;

const FIXTURE_JSON: &str = r#"{
    "messages": [
        {
            "chat_id": 5,
            "message_id": 10,
            "game": {
                "title": "Lumberjack",
                "photo": {
                    "sizes": [
                        { "type": "m", "width": 320, "height": 180, "photo": { "id": 12 } }
                    ]
                }
            },
            "media": [
                { "file_id": 12, "path": "media/lumberjack.png", "delay_ms": 0 },
                { "file_id": 13, "path": "media/missing.png", "delay_ms": 0 }
            ]
        },
        {
            "chat_id": 5,
            "message_id": 11,
            "game": null
        }
    ]
}"#;

fn write_fixture() -> (tempfile::TempDir, Fixture) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("media")).unwrap();
    std::fs::write(dir.path().join("media/lumberjack.png"), b"\x89PNG").unwrap();
    let path = dir.path().join("fixture.json");
    std::fs::write(&path, FIXTURE_JSON).unwrap();

    let fixture = Fixture::load(&path).unwrap();
    (dir, fixture)
}

#[test]
fn test_fixture_resolves_relative_paths() {
    let (dir, fixture) = write_fixture();
    assert_eq!(fixture.base_dir, dir.path());
    assert_eq!(fixture.messages.len(), 2);
    assert!(fixture.messages[1].game.is_none());

    let blob = fixture.messages[0].media[0].load(&fixture.base_dir).unwrap();
    assert_eq!(blob.mime_type(), "image/png");
}

#[test]
fn test_malformed_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"messages\": [ { \"chat_id\": \"five\" } ] }").unwrap();

    let err = Fixture::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("parsing fixture"));
}

#[tokio::test]
async fn test_downloads_wake_waiting_view() {
    let (_dir, fixture) = write_fixture();
    let cache = MediaCache::new();
    let key = MessageKey::new(5, 10);
    let game = fixture.messages[0].game.clone();

    let before = GameViewModel::build(key, game.as_ref(), &cache, PHOTO_SIZE, PHOTO_DISPLAY_SIZE).unwrap();
    assert_eq!(before.media_state(), MediaState::AwaitingMedia);

    let mut updates = cache.subscribe(key);
    let report = download_all(cache.clone(), &fixture, Duration::ZERO).await;
    assert_eq!(report, DownloadReport { delivered: 1, failed: 1 });

    let update = timeout(Duration::from_millis(100), updates.recv()).await.unwrap().unwrap();
    assert_eq!(update.file_id, Some(12));

    let after = GameViewModel::build(key, game.as_ref(), &cache, PHOTO_SIZE, PHOTO_DISPLAY_SIZE).unwrap();
    assert_eq!(after.media_state(), MediaState::MediaReady);
    match after.media {
        MediaContent::Photo(photo) => assert!(photo.src.starts_with("data:image/png;base64,")),
        other => panic!("expected photo, got {:?}", other),
    }
}

#[tokio::test]
async fn test_demo_downloads_all_deliver() {
    let demo = Fixture::demo();
    let expected = demo.messages.iter().map(|m| m.media.len()).sum::<usize>();

    let mut demo = demo;
    for message in &mut demo.messages {
        for source in &mut message.media {
            source.delay_ms = Some(0);
        }
    }

    let cache = MediaCache::new();
    let report = download_all(cache.clone(), &demo, Duration::ZERO).await;
    assert_eq!(report.delivered, expected);
    assert_eq!(report.failed, 0);
    assert_eq!(cache.len(), expected);
}
