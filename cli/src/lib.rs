//! # midpoint
//!
//! Command-line harness for the binary-search midpoint overflow demonstration.
//!
//! ## Usage
//! Run the three classic scenarios:
//! ```sh
//! midpoint demo
//! ```
//!
//! Search `[1..=len]` with a chosen index width and midpoint strategy:
//! ```sh
//! midpoint search --target 100 --bit-width 8 --mode prone
//! ```
//!
//! Logging is controlled with `RUST_LOG`, e.g. `RUST_LOG=midpoint::search=debug`.

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod command;

#[derive(Debug, Parser)]
#[command(name = "midpoint", bin_name = "midpoint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: command::Command,
}

pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}

/// Default environment variables for search configuration.
const ENV: &str = r#"
MIDPOINT_SEARCH_BITWIDTH=8
MIDPOINT_SEARCH_MODE=prone
"#;
