//! Core types for Void Archive: sessions, messages, command results, and the
//! game-state model.
//!
//! This crate holds the data model shared by the shell engine and the
//! persistence layer. It has no runtime of its own; the outbound ports in
//! [`port`] are implemented by adapters elsewhere.

/// Error types used throughout the crate.
pub mod error;
/// Narrative events and their closed set of types.
pub mod event;
/// Virtual files and path helpers.
pub mod file;
/// Flattened command-history records.
pub mod history;
/// Timed response messages.
pub mod message;
/// Outbound ports for durable storage.
pub mod port;
/// Command results, exit codes, and intents.
pub mod result;
/// Session identifiers.
pub mod session;
/// Per-session game progression.
pub mod state;

/// Re-export error types.
pub use error::{VaError, VaResult};
/// Re-export event types.
pub use event::{EventType, GameEvent};
/// Re-export file types.
pub use file::{VirtualFile, normalize_path, parent_path};
/// Re-export history types.
pub use history::CommandRecord;
/// Re-export message types.
pub use message::{MessageKind, ResponseMessage};
/// Re-export port traits.
pub use port::{CommandHistory, LoadGameState, SaveGameState};
/// Re-export result types.
pub use result::{CommandIntent, CommandResult, ExitCode};
/// Re-export the session identifier.
pub use session::SessionId;
/// Re-export game-state types.
pub use state::{Ending, GameState};
