//! Interactive session state machine.
//!
//! The session is driven one event at a time by [`Session::handle`], which
//! returns the [`Command`]s the terminal runtime must execute. Keeping side
//! effects out of transitions lets every transition be tested without a
//! terminal.
//!
//! # Module Organization
//! - [`controller`]: [`Session`] and [`SessionEvent`]
//! - [`mode`]: The active mode and its mode-scoped data
//! - [`list`]: Filterable project list view
//! - [`command`]: Side effects requested by transitions

pub mod command;
pub mod controller;
pub mod list;
pub mod mode;

pub use command::{Command, ScanRequest, ScanResult};
pub use controller::{Session, SessionEvent};
pub use list::{FilterState, ProjectList};
pub use mode::{ContextAction, ContextMenu, DirectoryPrompt, Mode};
