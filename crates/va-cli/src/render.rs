use std::time::Duration;

use colored::{ColoredString, Colorize};

use va_core::{MessageKind, ResponseMessage};
use va_shell::content::{ELARA, WARDEN};

fn style(msg: &ResponseMessage) -> ColoredString {
    let text = msg.text.as_str();
    match msg.kind {
        MessageKind::System => text.normal(),
        MessageKind::Success => text.green(),
        MessageKind::Error => text.red(),
        MessageKind::Narrator if msg.is_spoken_by(WARDEN) => text.red().bold(),
        MessageKind::Narrator if msg.is_spoken_by(ELARA) => text.magenta(),
        MessageKind::Narrator => text.cyan(),
    }
}

/// Print a message sequence. With `pace`, wait out each line's delay
/// relative to the start of the sequence.
pub async fn print_sequence(messages: &[ResponseMessage], pace: bool) {
    let mut elapsed = 0;
    for msg in messages {
        if pace && msg.delay_ms > elapsed {
            tokio::time::sleep(Duration::from_millis(msg.delay_ms - elapsed)).await;
            elapsed = msg.delay_ms;
        }
        println!("{}", style(msg));
    }
}
