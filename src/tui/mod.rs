//! Terminal front end: runtime loop, rendering and themes.

pub mod runtime;
pub mod theme;
pub mod view;

pub use runtime::{run, Executor, Exit};
pub use theme::Theme;
