//! Visit Vitals CLI
//!
//! Summarizes patient visit vitals and prints or exports
//! dashboard-ready reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use visit_vitals::commands::{
    display_schema, display_version, execute_demographics, execute_overview, validate_args,
    validate_dataset_file, OverviewArgs,
};
use visit_vitals::model::Metric;
use visit_vitals::provider::{DataProvider, DemoProvider, JsonFileProvider};
use visit_vitals::utils::config::DEFAULT_DECIMALS;

/// Visit Vitals - vital-sign summaries for patient visits
#[derive(Parser, Debug)]
#[command(name = "visit-vitals")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Dataset JSON file (defaults to the built-in demo data)
    #[arg(short, long, global = true, env = "VISIT_VITALS_DATA")]
    data: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize one patient's visits
    Overview {
        /// Patient id
        #[arg(short, long)]
        patient: u32,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Decimal places for printed values
        #[arg(long, default_value_t = DEFAULT_DECIMALS)]
        decimals: usize,

        /// Only include these metrics (HR, SBP, DBP); repeat or comma-separate
        #[arg(short, long = "metric", value_delimiter = ',')]
        metrics: Vec<Metric>,

        /// Skip the text report on stdout
        #[arg(long)]
        quiet: bool,
    },

    /// List patients with their visit counts
    Demographics,

    /// Validate a dataset JSON file
    Validate {
        /// Path to dataset JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let provider: Box<dyn DataProvider> = match &cli.data {
        Some(path) => Box::new(JsonFileProvider::new(path.clone())),
        None => Box::new(DemoProvider::new()),
    };

    match cli.command {
        Commands::Overview {
            patient,
            output,
            decimals,
            metrics,
            quiet,
        } => {
            let args = OverviewArgs {
                patient_id: patient,
                output_json: output,
                decimals,
                metrics,
                print_report: !quiet,
            };

            validate_args(&args)?;
            execute_overview(provider.as_ref(), &args)?;
        }

        Commands::Demographics => {
            execute_demographics(provider.as_ref())?;
        }

        Commands::Validate { file } => {
            validate_dataset_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
