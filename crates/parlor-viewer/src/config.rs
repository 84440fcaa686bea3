//! Command line configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use parlor_logging::{FileConfig, LogConfig, RotationStrategy};
use parlor_media::sizing::{PHOTO_DISPLAY_SIZE, PHOTO_SIZE};

use crate::fixture::Fixture;

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "parlor-viewer")]
#[command(about = "Desktop viewer for Parlor game messages")]
pub struct Args {
    /// Path to a JSON message fixture (uses the built-in demo if not provided)
    #[arg(short, long)]
    pub fixture: Option<PathBuf>,

    /// Nominal size used to pick photo variants
    #[arg(long, default_value_t = PHOTO_SIZE)]
    pub size: u32,

    /// Bounding box for rendered photos
    #[arg(long, default_value_t = PHOTO_DISPLAY_SIZE)]
    pub display_size: u32,

    /// Delay before each simulated download completes
    #[arg(long, default_value_t = 1500)]
    pub download_delay_ms: u64,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Human-readable console logs instead of JSONL
    #[arg(long)]
    pub pretty: bool,

    /// Also write JSONL logs to this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    pub fn log_config(&self) -> LogConfig {
        let mut config = if self.pretty {
            LogConfig::development()
        } else {
            LogConfig::default()
        };
        config.default_level = self.log_level.clone();
        config.file = self.log_dir.as_ref().map(|dir| FileConfig {
            directory: dir.clone(),
            prefix: "parlor-viewer".to_string(),
            rotation: RotationStrategy::Daily,
        });
        config
    }

    pub fn settings(&self) -> ViewerSettings {
        ViewerSettings {
            size: self.size,
            display_size: self.display_size,
            download_delay_ms: self.download_delay_ms,
        }
    }

    pub fn load_fixture(&self) -> Result<Fixture> {
        match &self.fixture {
            Some(path) => Fixture::load(path),
            None => Ok(Fixture::demo()),
        }
    }
}

/// Rendering and download settings shared with the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerSettings {
    pub size: u32,
    pub display_size: u32,
    pub download_delay_ms: u64,
}

impl ViewerSettings {
    pub fn download_delay(&self) -> Duration {
        Duration::from_millis(self.download_delay_ms)
    }
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            size: PHOTO_SIZE,
            display_size: PHOTO_DISPLAY_SIZE,
            download_delay_ms: 1500,
        }
    }
}
