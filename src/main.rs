mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use containerspec::document::DocumentFormat;
use containerspec::shared::{self, Config};

#[derive(Parser)]
#[command(name = "containerspec")]
#[command(about = "Containerspec - Container descriptor decoder and normalizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a container document and print its normalized form
    Normalize {
        /// Container document (YAML or JSON)
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// Input format (defaults to the file extension)
        #[arg(long)]
        from: Option<DocumentFormat>,

        /// Output format (defaults to CONTAINERSPEC_FORMAT, then yaml)
        #[arg(long)]
        to: Option<DocumentFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a summary of a container document
    Inspect {
        #[arg(value_name = "PATH")]
        input: PathBuf,

        #[arg(long)]
        from: Option<DocumentFormat>,
    },

    /// Wire published events between the containers of several components
    Subscriptions {
        /// Component documents
        #[arg(value_name = "PATH", required = true)]
        inputs: Vec<PathBuf>,

        #[arg(long)]
        from: Option<DocumentFormat>,
    },
}

fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let _guard = match shared::init_logging(&config.log_dir, &config.service_name) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };

    let cli = Cli::parse();
    tracing::debug!("Using config {:?}", config);

    match cli.command {
        Commands::Normalize {
            input,
            from,
            to,
            output,
        } => {
            let to = to.unwrap_or(config.default_format);
            commands::normalize::run(&input, from, to, output)?;
        }
        Commands::Inspect { input, from } => {
            commands::inspect::run(&input, from)?;
        }
        Commands::Subscriptions { inputs, from } => {
            commands::subscriptions::run(inputs, from)?;
        }
    }

    Ok(())
}
