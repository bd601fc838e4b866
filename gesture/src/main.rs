//! rt-gesture - replay recorded hand landmarks through the gesture pipeline.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use rt_gesture::gesture::DEFAULT_WINDOW;
use rt_gesture::replay::read_frames;
use rt_gesture::{registry, SessionConfig, TrackingSession};

#[derive(Parser, Debug)]
#[command(name = "rt-gesture", about = "Hand gesture classification from landmark streams", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a recorded landmark stream, one s-expression frame per line
    Replay {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Number of recent frames in the majority vote
        #[arg(long, default_value_t = DEFAULT_WINDOW)]
        window: usize,

        /// Abort on the first malformed line instead of skipping it
        #[arg(long)]
        strict: bool,
    },
    /// List the known gestures
    Registry,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries frame output.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rt_gesture=info".into()),
        )
        .init();

    match cli.command {
        Command::Replay {
            input,
            window,
            strict,
        } => replay(&input, window, strict),
        Command::Registry => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for info in registry::all() {
                writeln!(out, "{}", info.to_sexp())?;
            }
            Ok(())
        }
    }
}

fn replay(input: &str, window: usize, strict: bool) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = if input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let path = PathBuf::from(input);
        let file = File::open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        Box::new(BufReader::new(file))
    };

    let config = SessionConfig {
        smoothing_window: window,
        ..SessionConfig::default()
    };
    let mut session = TrackingSession::new(config)?;
    info!("replaying {} with {}", input, session.config_sexp());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut index: u64 = 0;

    for frame in read_frames(reader) {
        index += 1;
        let frame = match frame {
            Ok(f) => f,
            Err(e) if strict => return Err(e).context("replay aborted"),
            Err(e) => {
                warn!("{}", e);
                writeln!(out, "(:frame {} :error \"{}\")", index, escape(&e.to_string()))?;
                continue;
            }
        };

        match session.process_frame(frame.hands.as_slice(), frame.width, frame.height) {
            Ok(outcome) => writeln!(out, "{}", outcome.to_sexp(index))?,
            Err(e) => {
                let stable = session
                    .stable_key()
                    .map(|k| format!("\"{}\"", k))
                    .unwrap_or_else(|| "nil".to_string());
                writeln!(
                    out,
                    "(:frame {} :skipped \"{}\" :stable {})",
                    index,
                    escape(&e.to_string()),
                    stable
                )?;
            }
        }
    }

    info!("{}", session.status_sexp());
    session.end();
    Ok(())
}

/// Escape a string for embedding in an s-expression string literal.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
