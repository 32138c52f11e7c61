//! Command dispatch engine for Void Archive.
//!
//! A [`Shell`] turns raw command lines into [`va_core::CommandResult`]s by
//! matching the verb against an ordered registry of [`Strategy`] values.
//! Strategies operate on a per-session [`VirtualFileSystem`] and fire
//! one-time narrative events through the [`EventTracker`].

pub mod config;
pub mod content;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod fs;
pub mod lock;
pub mod process;
pub mod shell;
pub mod strategy;

pub use config::{DEFAULT_ALLOWED_COMMANDS, ShellConfig};
pub use context::CommandContext;
pub use dispatcher::Dispatcher;
pub use error::{ShellError, ShellResult};
pub use events::EventTracker;
pub use fs::VirtualFileSystem;
pub use process::{ProcessOutput, ProcessRunner, SystemProcessRunner};
pub use shell::Shell;
pub use strategy::Strategy;
