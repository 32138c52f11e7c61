//! Durable game progression and command history for Void Archive.
//!
//! [`GameStateService`] and [`HistoryService`] sit on top of the storage
//! ports declared in [`va_core::port`]. The [`memory`] module provides
//! in-process adapters for both.

pub mod history;
pub mod memory;
pub mod service;

pub use history::HistoryService;
pub use memory::{InMemoryCommandHistory, InMemoryGameStates};
pub use service::GameStateService;
