//! Entry point for the Parlor message viewer.
//!
//! This Dioxus desktop application renders game messages from a fixture and
//! delivers their media through a simulated download pipeline.

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use parlor_logging::ParlorSubscriberBuilder;
use parlor_viewer::components::App;
use parlor_viewer::config::{Args, ViewerSettings};
use parlor_viewer::fixture::Fixture;

/// Global storage for the loaded fixture.
static FIXTURE: OnceLock<Fixture> = OnceLock::new();

/// Global storage for rendering settings.
static SETTINGS: OnceLock<ViewerSettings> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Keep the guard alive so file logs are flushed on exit
    let _log_guard = ParlorSubscriberBuilder::new()
        .with_config(args.log_config())
        .init();

    let fixture = args.load_fixture()?;
    tracing::info!(
        messages = fixture.messages.len(),
        source = ?args.fixture,
        "Starting Parlor viewer"
    );

    FIXTURE.set(fixture).ok();
    SETTINGS.set(args.settings()).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Parlor Viewer")
                        .with_inner_size(LogicalSize::new(560, 820)),
                )
                .with_custom_head(format!("<style>{}</style>", parlor_ui::SHARED_CSS)),
        )
        .launch(RootApp);

    Ok(())
}

/// Root component reading the launch configuration.
#[component]
fn RootApp() -> Element {
    let fixture = FIXTURE.get().cloned().unwrap_or_default();
    let settings = SETTINGS.get().copied().unwrap_or_default();

    use_drop(|| {
        tracing::info!("Shutting down Parlor viewer");
    });

    rsx! {
        App { fixture, settings }
    }
}
