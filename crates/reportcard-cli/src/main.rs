//! reportcard CLI — student report cards from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;
mod form;

#[derive(Parser)]
#[command(
    name = "reportcard",
    version,
    about = "Student report generator with history and PDF export"
)]
struct Cli {
    /// Config file path (default: ./reportcard.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// History file path (overrides config and REPORTCARD_HISTORY)
    #[arg(long, global = true)]
    history: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a report, display it, and append it to history
    Calculate {
        /// Student name
        #[arg(long)]
        name: String,

        /// Math score (0-100)
        #[arg(long, allow_hyphen_values = true)]
        math: String,

        /// English score (0-100)
        #[arg(long, allow_hyphen_values = true)]
        english: String,

        /// Chemistry score (0-100)
        #[arg(long, allow_hyphen_values = true)]
        chemistry: String,

        /// Science score (0-100)
        #[arg(long, allow_hyphen_values = true)]
        science: String,

        /// Also export the report to this PDF file
        #[arg(long)]
        pdf: Option<PathBuf>,
    },

    /// Export text to a PDF file
    Export {
        /// Destination PDF path
        #[arg(long)]
        output: PathBuf,

        /// Read the text from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Show all saved reports
    History {
        /// Output format
        #[arg(long, value_enum, default_value_t = HistoryFormat::Text)]
        format: HistoryFormat,

        /// Also export the displayed history to this PDF file
        #[arg(long)]
        pdf: Option<PathBuf>,
    },

    /// Find the first saved report for a student
    Find {
        /// Student name (case-sensitive prefix)
        name: String,

        /// Also export the report to this PDF file
        #[arg(long)]
        pdf: Option<PathBuf>,
    },

    /// Interactive report form on stdin
    Form,

    /// Create a starter reportcard.toml
    Init,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HistoryFormat {
    /// Raw history text
    Text,
    /// One row per parsed report
    Table,
    /// Parsed reports as JSON
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reportcard=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = commands::load_config(cli.config.as_deref(), cli.history).and_then(|config| {
        match cli.command {
            Commands::Calculate {
                name,
                math,
                english,
                chemistry,
                science,
                pdf,
            } => commands::calculate::execute(
                &config,
                name,
                [math, english, chemistry, science],
                pdf,
            ),
            Commands::Export { output, input } => {
                commands::export::execute(&config, output, input)
            }
            Commands::History { format, pdf } => commands::history::execute(&config, format, pdf),
            Commands::Find { name, pdf } => commands::find::execute(&config, name, pdf),
            Commands::Form => commands::form::execute(&config),
            Commands::Init => commands::init::execute(),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
