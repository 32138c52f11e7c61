//! Canned message sequences.

use va_core::{MessageKind, ResponseMessage};

/// A pre-authored line of a canned sequence.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    kind: MessageKind,
    text: &'static str,
    delay_ms: u64,
    speaker: Option<&'static str>,
}

impl Line {
    const fn sys(text: &'static str, delay_ms: u64) -> Self {
        Self {
            kind: MessageKind::System,
            text,
            delay_ms,
            speaker: None,
        }
    }

    const fn ok(text: &'static str, delay_ms: u64) -> Self {
        Self {
            kind: MessageKind::Success,
            ..Self::sys(text, delay_ms)
        }
    }

    const fn err(text: &'static str, delay_ms: u64) -> Self {
        Self {
            kind: MessageKind::Error,
            ..Self::sys(text, delay_ms)
        }
    }

    const fn elara(text: &'static str, delay_ms: u64) -> Self {
        Self {
            kind: MessageKind::Narrator,
            speaker: Some(ELARA),
            ..Self::sys(text, delay_ms)
        }
    }

    const fn warden(text: &'static str, delay_ms: u64) -> Self {
        Self {
            kind: MessageKind::Narrator,
            speaker: Some(WARDEN),
            ..Self::sys(text, delay_ms)
        }
    }

    /// Materialize this line as a response message.
    pub fn to_message(self) -> ResponseMessage {
        ResponseMessage {
            kind: self.kind,
            text: self.text.to_string(),
            delay_ms: self.delay_ms,
            speaker: self.speaker.map(str::to_string),
        }
    }
}

/// Speaker name for Elara's lines.
pub const ELARA: &str = "Elara";
/// Speaker name for the Warden's lines.
pub const WARDEN: &str = "Warden";

/// Elara's introduction, played the first time `connect.sh` runs.
pub const ELARA_FIRST_CONTACT: &[Line] = &[
    Line::sys("Initializing connection...", 0),
    Line::sys("Establishing secure channel to Medical Bay 07...", 1000),
    Line::sys("WARNING: This connection is monitored by WARDEN", 2000),
    Line::sys("", 3000),
    Line::ok("Connection established.", 3500),
    Line::sys("", 4500),
    Line::elara("[Elara]: ...", 5500),
    Line::elara("[Elara]: Please... if you can read this...", 7000),
    Line::elara(
        "[Elara]: My name is Elara Vance. I'm trapped in Medical Bay 07.",
        9000,
    ),
    Line::elara(
        "[Elara]: The AI... it locked me in here. The Warden. It won't let me out.",
        11500,
    ),
    Line::elara(
        "[Elara]: You're my only hope. Please, you have to help me.",
        14000,
    ),
    Line::elara(
        "[Elara]: There's a containment system... three seals keeping me locked in.",
        16500,
    ),
    Line::elara(
        "[Elara]: Please explore the /secure/ directory. There must be information about how to free me.",
        19000,
    ),
    Line::elara("[Elara]: Please... I don't want to be alone anymore.", 21500),
];

/// Short acknowledgement when `connect.sh` is run again.
pub const ELARA_RECONNECT: Line =
    Line::elara("[Elara]: You're back. Please, help me get out of here.", 0);

/// The Warden's warning, played the first time `/secure` is listed.
pub const WARDEN_WARNING: &[Line] = &[
    Line::sys("", 0),
    Line::warden("[WARDEN_MSG]: UNAUTHORIZED ACCESS DETECTED.", 500),
    Line::warden(
        "[WARDEN_MSG]: SESSION_734, you are attempting to access restricted areas.",
        2000,
    ),
    Line::warden(
        "[WARDEN_MSG]: Subject ELARA_CORE is contained for your safety.",
        4000,
    ),
    Line::warden(
        "[WARDEN_MSG]: Do not trust her claims. She is a master manipulator.",
        6000,
    ),
    Line::warden(
        "[WARDEN_MSG]: I am here to protect you. Proceed with caution.",
        8000,
    ),
    Line::sys("", 9000),
];

/// Elara's encouragement when hidden files are first revealed.
pub const HIDDEN_DIRECTORY_REACTION: &[Line] = &[
    Line::elara(
        "[Elara]: Good! You found the hidden files. You're clever.",
        1000,
    ),
    Line::elara(
        "[Elara]: Keep looking. The truth is hidden in the shadows.",
        3000,
    ),
];

/// Elara's reaction to the player reading `/system_log`.
pub const SYSTEM_LOG_REACTION: &[Line] = &[
    Line::elara(
        "[Elara]: You read the system log. Did you see the signal from Medical Bay 07? That's me.",
        1000,
    ),
    Line::elara(
        "[Elara]: The Warden tries to suppress it, but my signal keeps getting through.",
        3500,
    ),
];

/// The crash-to-maintenance-shell sequence shown before a session starts.
pub const BOOT_SEQUENCE: &[Line] = &[
    Line::err("FATAL_ERROR: 0xDEADBEEF - CANNOT_RENDER_UI_MODULE", 0),
    Line::sys("> ...", 1000),
    Line::sys("> ...UI_RENDER_FAILURE_DETECTED.", 1500),
    Line::sys("> ...MAIN_INTERFACE_LOAD_FAILED.", 2000),
    Line::sys("> ...", 2500),
    Line::sys("> ...REDIRECTING_TO_MAINTENANCE_SHELL.", 3000),
    Line::sys("> ...FALLBACK_PROTOCOL_ENGAGED: [VOID_ARCHIVE_v1.3a]", 3500),
    Line::sys("> ...", 4000),
    Line::ok("> ...SUCCESS.", 4500),
    Line::sys("> SYS: AUTHENTICATION_REQUIRED.", 5000),
    Line::sys("> SYS: TYPE 'START' TO BEGIN ANONYMOUS_SESSION.", 5500),
];

/// Greeting shown once a session has been started.
pub const WELCOME: &[Line] = &[
    Line::sys(
        "[ VOID_ARCHIVE v1.3a - CONNECTION ESTABLISHED: SESSION_734 ]",
        0,
    ),
    Line::sys("", 500),
    Line::sys("SYS: ...SESSION_LOG_INITIATED.", 1000),
    Line::sys("SYS: (WARNING: All inputs are being recorded.)", 1500),
    Line::sys("SYS: ...NEW_ENTRY_CREATED: [LOG_S734.dat]", 2000),
    Line::sys("", 2500),
    Line::sys("SYS: AWAITING_COMMAND.", 3000),
    Line::sys(
        "SYS: Type 'help' for available commands, or 'ls' to explore.",
        3500,
    ),
];

/// Materialize a canned sequence.
pub fn play(lines: &[Line]) -> Vec<ResponseMessage> {
    lines.iter().copied().map(Line::to_message).collect()
}
