use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The closed set of one-time narrative triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// `connect.sh` was run for the first time: Elara makes contact.
    ElaraFirstContact,
    /// `ls -a` revealed a hidden entry.
    HiddenDirectoryFound,
    /// `/system_log` was read.
    SystemLogRead,
    /// A path under `/secure` was listed.
    SecureDirectoryAccessed,
    /// Reserved: the logic seal was broken.
    LogicSealBroken,
    /// Reserved: the data seal was broken.
    DataSealBroken,
    /// Reserved: the power seal was broken.
    PowerSealBroken,
    /// Reserved: Elara's nature is revealed.
    ElaraRevealed,
    /// Reserved: the player reaches the final choice.
    FinalChoice,
}

impl EventType {
    /// Every event type, in declaration order.
    pub const ALL: [EventType; 9] = [
        Self::ElaraFirstContact,
        Self::HiddenDirectoryFound,
        Self::SystemLogRead,
        Self::SecureDirectoryAccessed,
        Self::LogicSealBroken,
        Self::DataSealBroken,
        Self::PowerSealBroken,
        Self::ElaraRevealed,
        Self::FinalChoice,
    ];
}

/// An occurrence of a narrative event, with optional payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Which trigger fired.
    pub kind: EventType,
    /// Free-form payload. Unused by the act-1 scripts.
    #[serde(default)]
    pub data: BTreeMap<String, serde_json::Value>,
}

impl GameEvent {
    /// Create an event with no payload.
    pub fn new(kind: EventType) -> Self {
        Self {
            kind,
            data: BTreeMap::new(),
        }
    }

    /// Attach a payload entry.
    pub fn with_data(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }
}

impl From<EventType> for GameEvent {
    fn from(kind: EventType) -> Self {
        Self::new(kind)
    }
}
