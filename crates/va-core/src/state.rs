use serde::{Deserialize, Serialize};

use crate::session::SessionId;

/// How the story ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ending {
    /// Elara merges with the network.
    Singularity,
    /// The player becomes the Warden's target.
    Hunted,
    /// Someone gives themselves up.
    Sacrifice,
    /// The player rebuilds the system.
    Architect,
}

/// Durable per-session progression record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Owning session.
    pub session_id: SessionId,
    /// Current act, starting at 1.
    pub act: u32,

    // Act 1 progress
    /// Elara has made first contact.
    pub elara_contacted: bool,
    /// A hidden entry has been revealed.
    pub hidden_directory_found: bool,
    /// The system log has been read.
    pub system_log_read: bool,
    /// `/secure` has been listed.
    pub secure_directory_accessed: bool,

    // Act 2 seals
    /// The logic seal is broken.
    pub logic_seal_broken: bool,
    /// The data seal is broken.
    pub data_seal_broken: bool,
    /// The power seal is broken.
    pub power_seal_broken: bool,

    // Act 3
    /// The ending reached, if any.
    pub ending: Option<Ending>,
}

impl GameState {
    /// A fresh record: act 1, every flag false, no ending.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            act: 1,
            elara_contacted: false,
            hidden_directory_found: false,
            system_log_read: false,
            secure_directory_accessed: false,
            logic_seal_broken: false,
            data_seal_broken: false,
            power_seal_broken: false,
            ending: None,
        }
    }

    /// Number of broken seals (0-3).
    pub fn seals_broken(&self) -> usize {
        [
            self.logic_seal_broken,
            self.data_seal_broken,
            self.power_seal_broken,
        ]
        .iter()
        .filter(|b| **b)
        .count()
    }
}
