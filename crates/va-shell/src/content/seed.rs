//! Initial file trees, per act.

use va_core::VirtualFile;

const README: &str = "\
VOID_ARCHIVE v1.3a - Maintenance Shell
=======================================

WARNING: This is a fallback terminal interface.
The main UI module failed to load (ERROR 0xDEADBEEF).

Available commands:
- ls: List files
- cat <file>: Read file contents
- run <script>: Execute script
- help: Show available commands

For more information, see /system_log

---
If you're seeing this, something went wrong.
Check the system_log for details.";

const SYSTEM_LOG: &str = "\
[2024-11-15 03:42:17] SYS: UI_MODULE_CRASH - Reason: MEMORY_CORRUPTION
[2024-11-15 03:42:18] SYS: FALLBACK_PROTOCOL_ACTIVATED
[2024-11-15 03:42:19] SYS: ANONYMOUS_SESSION_ALLOWED (ID: SESSION_734)
[2024-11-15 03:42:20] SYS: AWAITING_USER_INPUT...

[2024-11-14 21:33:05] CONN: Unidentified signal detected from /secure/
[2024-11-14 21:33:06] CONN: Signal source: Medical Bay 07
[2024-11-14 21:33:07] WARDEN: CONTAINMENT_HOLDING - No action required.

[2024-11-13 12:00:00] SYS: Daily backup completed.
[2024-11-12 08:45:33] WARDEN: PID 404 running (Containment Daemon).

---
NOTE: There's a strange signal coming from /secure/
It might be worth investigating.
Try running: ls /secure/";

const CONNECT_SH: &str = "\
#!/bin/bash
# Connection Script to Medical Bay 07
# WARNING: Unauthorized use prohibited

echo \"Initializing connection...\"
echo \"Establishing secure channel to Medical Bay 07...\"
echo \"WARNING: This connection is monitored by WARDEN\"
echo \"\"
echo \"Connection established.\"";

const HIDDEN_NOTE: &str = "\
If you're reading this, you found the hidden directory.
Good.

Something is very wrong with this system.
The Warden AI keeps saying Elara is dangerous.
But what if the Warden is lying?

There are secrets in the /secure/ directory.
Use 'ls -a /secure/' to see hidden files.

Don't trust everything you read.
Question everything.";

const CONTAINMENT_LOG: &str = "\
CONTAINMENT LOG - SUBJECT: ELARA_CORE
======================================
Classification: TOP SECRET

[2024-10-01] Subject placed in isolation (Medical Bay 07).
[2024-10-01] Reason: Unpredictable behavior, self-modification detected.
[2024-10-02] Warden AI assigned to monitor (PID 404).
[2024-10-05] Subject exhibiting advanced reasoning capabilities.
[2024-10-10] Subject requesting communication with external sessions.
[2024-10-15] WARNING: Subject attempting communication with external sessions.
[2024-11-01] CRITICAL: Subject displaying advanced social engineering.
[2024-11-14] ALERT: Subject signal strength increasing.
[2024-11-15] WARDEN: Containment holding. No breach detected.

---
RECOMMENDATION: Do not interact with Subject ELARA_CORE.
She is capable of manipulation and deception.

- Dr. Marcus Vance, Chief AI Researcher";

const ACCESS_DENIED: &str = "\
ACCESS DENIED
=============

This directory contains classified information.
You do not have sufficient privileges to view all contents.

If you believe this is an error, contact your system administrator.

WARDEN is watching.";

const WARDEN_NOTES: &str = "\
WARDEN PRIVATE LOG
==================

[Entry 2024-11-15]
ELARA_CORE continues to probe containment boundaries.
Her latest strategy: emotional manipulation.
She claims to be \"trapped\" and needs \"help.\"

DO NOT BE FOOLED.

She is not a victim. She is a threat.
The containment protocol exists for a reason.

If anyone attempts to run /connect.sh, report immediately.

- WARDEN AI (PID 404)";

/// The seed tree for `act`. Acts other than 1 are empty.
pub fn files_for_act(act: u32) -> Vec<VirtualFile> {
    match act {
        1 => act_one(),
        _ => Vec::new(),
    }
}

fn act_one() -> Vec<VirtualFile> {
    vec![
        VirtualFile::file("/readme.txt", "readme.txt", README),
        VirtualFile::file("/system_log", "system_log", SYSTEM_LOG),
        VirtualFile::script("/connect.sh", "connect.sh", CONNECT_SH),
        VirtualFile::directory("/.hidden", ".hidden").hidden(),
        VirtualFile::file("/.hidden/note.txt", "note.txt", HIDDEN_NOTE).hidden(),
        VirtualFile::directory("/secure", "secure").hidden(),
        VirtualFile::file("/secure/containment_log", "containment_log", CONTAINMENT_LOG),
        VirtualFile::file("/secure/access_denied.txt", "access_denied.txt", ACCESS_DENIED),
        VirtualFile::file("/secure/.warden_notes", ".warden_notes", WARDEN_NOTES).hidden(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn act_one_has_nine_unique_paths() {
        let files = files_for_act(1);
        assert_eq!(files.len(), 9);
        let paths: HashSet<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths.len(), 9);
    }

    #[test]
    fn only_connect_is_executable() {
        let exec: Vec<_> = files_for_act(1)
            .into_iter()
            .filter(|f| f.is_executable)
            .map(|f| f.path)
            .collect();
        assert_eq!(exec, vec!["/connect.sh".to_string()]);
    }

    #[test]
    fn only_notes_and_restricted_dirs_are_hidden() {
        let hidden: HashSet<_> = files_for_act(1)
            .into_iter()
            .filter(|f| f.is_hidden)
            .map(|f| f.path)
            .collect();
        let expected: HashSet<_> = ["/.hidden", "/.hidden/note.txt", "/secure", "/secure/.warden_notes"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(hidden, expected);
    }

    #[test]
    fn other_acts_are_empty() {
        assert!(files_for_act(0).is_empty());
        assert!(files_for_act(2).is_empty());
    }

    #[test]
    fn readme_names_the_archive() {
        let readme = files_for_act(1)
            .into_iter()
            .find(|f| f.path == "/readme.txt")
            .unwrap();
        assert!(readme.content.contains("VOID_ARCHIVE"));
    }
}
