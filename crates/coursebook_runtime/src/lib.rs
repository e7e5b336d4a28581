//! Session state, command language, REPL, and CLI for Coursebook.
//!
//! This crate provides:
//! - [`Session`] - A catalog plus the view state of the registration form
//! - [`Command`] - The line-oriented command language
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`RuntimeConfig`] and [`logging`] - Ambient configuration for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod render;
pub mod repl;
pub mod session;

pub use command::Command;
pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use error::{CommandError, Result};
pub use render::Renderer;
pub use repl::{Repl, Reply};
pub use session::{EditMode, EditTarget, OfferingForm, Session, Tab};
