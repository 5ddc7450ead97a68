mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "bodymap",
    version,
    about = "Body-part incident map for occupational safety (SST) records"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve raw body-part labels to canonical body regions
    Classify {
        /// One or more raw labels, e.g. "Muñeca izq"
        #[arg(required = true)]
        labels: Vec<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Aggregate body-part records (JSON) into canonical regions
    Aggregate {
        /// JSON file: array of records or {"parts": [...]}
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show all regions, including those without incidents
        #[arg(long)]
        show_all: bool,

        /// List the incidents behind each region
        #[arg(long)]
        verbose: bool,
    },
    /// Group raw incident rows (JSON) into per-label body-part records
    Group {
        /// JSON file: array of incident rows
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the records to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Show the detail panel for one region
    Detail {
        /// JSON file: array of records or {"parts": [...]}
        input_file: PathBuf,

        /// Region id, e.g. "hombro_izquierdo"
        region: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List the canonical body regions
    Regions {
        /// Also list every label variant that maps to each region
        #[arg(long)]
        aliases: bool,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify { labels, output } => commands::classify::run(&labels, &output),
        Commands::Aggregate {
            input_file,
            output,
            show_all,
            verbose,
        } => commands::aggregate::run(input_file, &output, show_all, verbose),
        Commands::Group {
            input_file,
            output,
            out,
        } => commands::group::run(input_file, &output, out),
        Commands::Detail {
            input_file,
            region,
            output,
        } => commands::detail::run(input_file, &region, &output),
        Commands::Regions { aliases } => commands::regions::list(aliases),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
