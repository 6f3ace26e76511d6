//! Census Analyser CLI - load and inspect census tables from the shell

use anyhow::Context;
use census_analyser::config::{self, CensusConfig};
use census_analyser::output::is_quiet;
use census_analyser::ui::{self, Icons};
use census_analyser::{adapter, CensusLoader};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "census")]
#[command(version)]
#[command(about = "Census Analyser - validated loading of state census CSV files")]
#[command(long_about = r#"
Census Analyser validates a census CSV file (existence, type, header,
delimiter) and loads its rows into a collection keyed by state.

Example usage:
  census load --country india-census --path IndiaStateCensusData.csv
  census load --country state-code --path IndiaStateCode.csv --format json
  census schemas
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and load a census file
    Load {
        /// Schema of the file (india-census, india-state-code, us-census)
        #[arg(short, long)]
        country: Option<String>,

        /// Path to the CSV file
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Expected header line (defaults to the schema's header)
        #[arg(long)]
        header: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Maximum number of records to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List supported schemas
    Schemas,

    /// Write a census.toml template
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli) {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(config::default_config_path);

    match cli.command {
        Commands::Load { country, path, header, format, limit } => {
            let config = config::load_config(Some(&config_path))?.unwrap_or_default();
            let request = config.resolve(country.as_deref(), path.as_deref(), header.as_deref())?;

            let loader = CensusLoader::new();
            let records = match loader.load(request.country, &request.path, &request.header) {
                Ok(records) => records,
                Err(e) => {
                    let kind = e.kind();
                    return Err(anyhow::Error::new(e)
                        .context(format!("{} {}", kind, request.path.display())));
                }
            };

            match format {
                Format::Json => {
                    println!("{}", serde_json::to_string_pretty(&records)?);
                }
                Format::Text => {
                    if !is_quiet() {
                        ui::header(&format!("Loaded {}", request.path.display()));
                        ui::info(Icons::GLOBE, "Schema", request.country.as_str());
                    }
                    ui::info(Icons::KEY, "Records", &records.len().to_string());
                    if records.is_empty() {
                        ui::warn("header matched but the file has no data rows");
                    }

                    let table = ui::records_table(&records, limit);
                    if !table.is_empty() {
                        println!("{}", table);
                    }
                    if let Some(limit) = limit.filter(|l| *l < records.len()) {
                        ui::summary_row("…", &format!("{} more", records.len() - limit));
                    }
                }
            }
        }

        Commands::Schemas => {
            let registry = adapter::default_registry();
            if !is_quiet() {
                ui::section("Supported schemas");
            }
            println!("{}", ui::schemas_table(&registry.countries()));
        }

        Commands::Init { force } => {
            config::write_config(&config_path, &CensusConfig::template(), force)
                .with_context(|| format!("writing {}", config_path.display()))?;
            ui::success(&format!("Wrote {}", config_path.display()));
            if !is_quiet() {
                ui::info(Icons::FILE, "Edit", "country, path and header to match your data");
            }
        }
    }

    Ok(())
}
