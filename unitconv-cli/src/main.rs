//! unitconv - interactive unit converter
//!
//! Reads requests like "1 km to feet" from stdin, one per line, and prints
//! one result line per request. Type `exit` (or close stdin) to stop.
//!
//! Logs go to stderr, filtered by RUST_LOG (default: warn).

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unitconv::{OutputFormat, Session, SessionConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Convert lengths, weights and temperatures", long_about = None)]
struct Cli {
    /// Do not print the prompt before each request
    #[arg(long)]
    no_prompt: bool,

    /// Print one JSON object per request instead of a sentence
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::default();
        if self.no_prompt {
            config = config.without_prompt();
        }
        if self.json {
            config = config.with_format(OutputFormat::Json);
        }
        config
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    info!(
        version = VERSION,
        stdin_is_terminal = io::stdin().is_terminal(),
        "unitconv started"
    );

    let session = Session::new(cli.session_config());
    let stdin = io::stdin();
    let stdout = io::stdout();

    match session.run(stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "i/o failure");
            eprintln!("unitconv: {}", e);
            ExitCode::FAILURE
        }
    }
}
