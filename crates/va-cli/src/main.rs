//! Terminal front-end for the Void Archive maintenance shell.

mod render;
mod repl;

use std::process;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use va_core::SessionId;
use va_shell::ShellConfig;

#[derive(Parser)]
#[command(
    name = "va",
    about = "VOID_ARCHIVE v1.3a - a narrative maintenance shell",
    version
)]
struct Cli {
    /// Resume under a specific session id (default: a fresh one)
    #[arg(long)]
    session: Option<String>,

    /// Act whose file tree is seeded
    #[arg(long, default_value = "1")]
    act: u32,

    /// Time limit for `exec`, in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Starting working directory
    #[arg(long, default_value = "/")]
    cwd: String,

    /// Replay message delays instead of printing everything at once
    #[arg(long)]
    pace: bool,

    /// Print the command table and exit
    #[arg(long)]
    commands: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ShellConfig {
        ShellConfig::default()
            .with_act(self.act)
            .with_exec_timeout(Duration::from_secs(self.timeout_secs))
            .with_working_directory(self.cwd.as_str())
    }

    fn session(&self) -> Result<SessionId, String> {
        match &self.session {
            Some(raw) => raw.parse::<SessionId>().map_err(|e| e.to_string()),
            None => Ok(SessionId::new()),
        }
    }
}

fn init_tracing(verbose: u8) -> Result<(), String> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match init_tracing(cli.verbose) {
        Ok(()) if cli.commands => {
            repl::print_commands(&cli.config());
            Ok(())
        }
        Ok(()) => match cli.session() {
            Ok(session) => repl::run(cli.config(), session, cli.pace).await,
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
