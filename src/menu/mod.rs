//! The menu loop and its console collaborators.
//!
//! - [`Parlor`] — read a selection, dispatch, repeat until "3"
//! - [`Console`] — where prompts are read and [`Event`]s are reported
//! - [`Terminal`] — interactive TTY console
//! - [`Lines`] — plain reader/writer console for pipes and tests
mod console;
mod event;
mod parlor;
mod terminal;

pub use console::*;
pub use event::*;
pub use parlor::*;
pub use terminal::*;
