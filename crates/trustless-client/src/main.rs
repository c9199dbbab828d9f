use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing::{error, level_filters::LevelFilter, subscriber::set_global_default};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::cli::{Cli, Commands};

mod cli;

fn main() -> ExitCode {
    init_tracing();
    if let Err(e) = run() {
        error!("Trustless client error: {e}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let subscriber_builder = FmtSubscriber::builder().with_env_filter(filter);
    set_global_default(subscriber_builder.with_ansi(true).finish()).expect(
        "Failed to set up the global default subscriber for logging. Please check if the RUST_LOG environment variable is set correctly.",
    );
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get { url, chain_rest } => {
            let value = trustless_client::get(&url, chain_rest.as_deref())?;
            io::stdout().write_all(&value)?;
        }
    }

    Ok(())
}
