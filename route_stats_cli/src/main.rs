use clap::{Parser, Subcommand};

use crate::{generate::GenerateSubcommands, stats::StatsArgs};

mod file_utils;
mod generate;
mod print;
mod stats;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute distances, warnings and travel time of a route response
    Stats {
        #[command(flatten)]
        args: StatsArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Stats { args } => stats::run(args)?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}
