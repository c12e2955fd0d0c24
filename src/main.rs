//! PassGuard: password strength analyzer and custom wordlist generator.

mod cli;
mod interactive;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "tracing")]
    init_tracing();

    // Any argument selects batch mode; none opens the interactive form.
    if std::env::args_os().len() > 1 {
        cli::run(cli::Cli::parse())
    } else {
        interactive::run()
    }
}

/// Logs go to stderr so stdout only carries results.
#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_env("PASSGUARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }
}
