//! Den - a terminal session manager for local development projects.
//!
//! This library discovers project directories under user-configured roots,
//! keeps a time-bounded discovery cache, and drives a modal terminal session
//! for browsing, favoriting and opening projects.
//!
//! # Public API
//! - [`core`]: Config, cache, scanner, git probe, suggestions and launchers
//! - [`session`]: The event-driven session state machine
//! - [`tui`]: Terminal runtime and rendering
//! - [`commands`]: Entry points used by the `den` binary

pub mod commands;
pub mod core;
pub mod session;
pub mod tui;

// Re-export the core public API for external users
pub use core::{
    discover,
    scan,
    Config,
    DenError,
    DiscoveryCache,
    GitState,
    Preferences,
    Project,
    Result,
    ScanOptions,
    SuggestionState,
};
pub use session::{Command, Session, SessionEvent};
