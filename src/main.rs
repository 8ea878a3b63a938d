use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use artofmemory::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging; stdout is reserved for quiz output
    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::new("artofmemory=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "artofmemory=warn".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli::execute(args)
}
