//! Shared UI components for Parlor applications.
//!
//! Provides the game message view, its animation and rich text renderers,
//! and the theme system. Components that show media expect a
//! [`parlor_media::MediaCache`] in context.

pub mod animation;
pub mod game_view;
pub mod hooks;
pub mod layout;
pub mod rich_text;
pub mod theme;

pub use animation::AnimationView;
pub use game_view::GameView;
pub use hooks::use_blob_updates;
pub use rich_text::FormattedTextView;
pub use theme::{Theme, ThemeSwitcher, ThemedRoot, CURRENT_THEME};

/// Shared CSS containing theme definitions and message styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
