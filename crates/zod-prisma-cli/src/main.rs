//! `zod-prisma`: generate Zod validators from a Prisma DMMF document.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zod_prisma::{Datamodel, FsWriter, GeneratorPaths, MANIFEST};

mod config;

use config::CliConfig;

#[derive(Debug, Parser)]
#[command(name = "zod-prisma", version, about = "Generate Zod schemas from a Prisma datamodel")]
struct Cli {
    /// DMMF JSON document (as produced by `prisma` generators).
    schema: PathBuf,

    /// Output directory [default: zod]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Location of the generated Prisma client [default: node_modules/@prisma/client]
    #[arg(long)]
    client: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long = "config-file")]
    config_file: Option<PathBuf>,

    /// Generator option override, e.g. `-c relationModel=true`.
    #[arg(short = 'c', long = "config", value_name = "KEY=VALUE")]
    options: Vec<String>,

    /// Log progress (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config_file {
        Some(path) => CliConfig::load_file(path)?,
        None => CliConfig::default(),
    };
    let options = config.options(&cli.options)?;

    let content = std::fs::read_to_string(&cli.schema)
        .with_context(|| format!("failed to read {}", cli.schema.display()))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", cli.schema.display()))?;
    let datamodel = Datamodel::from_json(&json)
        .with_context(|| format!("{} is not a DMMF datamodel", cli.schema.display()))?;

    let paths = GeneratorPaths {
        output: cli
            .output
            .or(config.output)
            .unwrap_or_else(|| PathBuf::from(MANIFEST.default_output)),
        client: cli
            .client
            .or(config.client)
            .unwrap_or_else(|| PathBuf::from("node_modules/@prisma/client")),
    };

    tracing::info!(
        generator = MANIFEST.pretty_name,
        version = MANIFEST.version,
        models = datamodel.models.len(),
        "generating"
    );
    let output = zod_prisma::run(&datamodel.models, &options, &paths, &mut FsWriter)?;

    println!(
        "Generated {} in {} ({} models)",
        MANIFEST.pretty_name,
        paths.output.display(),
        output.models.len()
    );
    Ok(())
}
