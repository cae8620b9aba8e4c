use std::path::PathBuf;

use clap::Subcommand;
use route_stats::json::schema;

use crate::file_utils::write_file;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Write the JSON schemas of the route response, the stats and the config
    JsonSchema {
        /// Output folder of the schema files
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            write_file(
                &out.join("route_response.schema.json"),
                &schema::generate_input_json_schema()?,
            )?;
            write_file(
                &out.join("route_stats.schema.json"),
                &schema::generate_output_json_schema()?,
            )?;
            write_file(
                &out.join("stats_config.schema.json"),
                &schema::generate_config_json_schema()?,
            )?;
        }
    }

    Ok(())
}
