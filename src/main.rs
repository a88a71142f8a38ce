//! osmkeys CLI: resolve conventional OSM tag keys for object category names

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use osmkeys::{ConfigManager, KeyResolver};

#[derive(Parser, Debug)]
#[command(
    name = "osmkeys",
    version,
    about = "Resolve conventional OSM tag keys for real-world object categories"
)]
struct Cli {
    /// Category names to resolve (exact, case-sensitive)
    names: Vec<String>,

    /// External catalog JSON overriding the embedded table
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// List all known category names and exit
    #[arg(long)]
    list: bool,

    /// Emit the resolution as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut builder = ConfigManager::custom().verbose(cli.verbose);
    if let Some(path) = cli.catalog.clone() {
        builder = builder.catalog_path(path);
    }
    let config = builder.build();

    let resolver = KeyResolver::new(config).context("could not load the category catalog")?;

    if cli.list {
        for name in resolver.catalog().category_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolution = resolver.resolve(&cli.names);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    if !resolution.valid {
        eprintln!("{}", resolution.message);
        std::process::exit(1);
    }

    println!("{resolution}");
    if let Some(urls) = &resolution.reference_urls {
        println!();
        for url in urls {
            println!("{url}");
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
