//! Narrative content store: canned message sequences and seed file trees.
//!
//! Everything here is static data. Nothing in this module holds session
//! state.

pub mod scripts;
pub mod seed;

use va_core::{EventType, ResponseMessage};

pub use scripts::{ELARA, WARDEN};
pub use seed::files_for_act;

/// The sequence played when `event` fires. Reserved events have none.
pub fn messages_for(event: EventType) -> Vec<ResponseMessage> {
    match event {
        EventType::ElaraFirstContact => scripts::play(scripts::ELARA_FIRST_CONTACT),
        EventType::SecureDirectoryAccessed => scripts::play(scripts::WARDEN_WARNING),
        EventType::HiddenDirectoryFound => scripts::play(scripts::HIDDEN_DIRECTORY_REACTION),
        EventType::SystemLogRead => scripts::play(scripts::SYSTEM_LOG_REACTION),
        EventType::LogicSealBroken
        | EventType::DataSealBroken
        | EventType::PowerSealBroken
        | EventType::ElaraRevealed
        | EventType::FinalChoice => Vec::new(),
    }
}

/// Elara's one-line greeting for a repeat `connect.sh`.
pub fn reconnect() -> ResponseMessage {
    scripts::ELARA_RECONNECT.to_message()
}

/// The boot sequence.
pub fn boot_sequence() -> Vec<ResponseMessage> {
    scripts::play(scripts::BOOT_SEQUENCE)
}

/// The welcome sequence.
pub fn welcome() -> Vec<ResponseMessage> {
    scripts::play(scripts::WELCOME)
}
