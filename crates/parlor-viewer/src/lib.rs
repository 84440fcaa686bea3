//! Desktop viewer for Parlor game messages
//!
//! Loads a message fixture, mounts a game view per message, and simulates the
//! download pipeline that fills the media cache behind them.

pub mod components;
pub mod config;
pub mod downloads;
pub mod fixture;
