use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a data item from a trustless gateway, verify it against the
    /// chain and print it to stdout
    Get {
        /// gateway url of the data item, including query parameters
        url: String,
        /// override for the chain REST endpoint the bundle summary is
        /// fetched from; required for chain ids without a known endpoint
        #[clap(short, long)]
        chain_rest: Option<String>,
    },
}
