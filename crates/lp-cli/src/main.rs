//! CLI frontend for the lifepath character generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::generate::OutputFormat;

#[derive(Parser)]
#[command(
    name = "lifepath",
    about = "Lifepath: random character backstories rolled from tables",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log table rolls and branch decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a character and print the biography
    Generate {
        /// Name of the character (random if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Role of the character (random configured role if omitted)
        #[arg(short, long)]
        role: Option<String>,

        /// Sex of the character: male or female (random if omitted)
        #[arg(short, long)]
        sex: Option<String>,

        /// Path to the table data
        #[arg(short, long, default_value = lp_lifepath::DEFAULT_TABLES_PATH)]
        tables: PathBuf,

        /// RNG seed for a reproducible character
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the configured roles
    Roles {
        /// Path to the table data
        #[arg(short, long, default_value = lp_lifepath::DEFAULT_TABLES_PATH)]
        tables: PathBuf,
    },

    /// Check the table data for missing tables and rows
    Check {
        /// Path to the table data
        #[arg(short, long, default_value = lp_lifepath::DEFAULT_TABLES_PATH)]
        tables: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,lp_lifepath=debug,lp_tables=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            name,
            role,
            sex,
            tables,
            seed,
            format,
        } => commands::generate::run(
            &tables,
            name.as_deref(),
            role.as_deref(),
            sex.as_deref(),
            seed,
            format,
        ),
        Commands::Roles { tables } => commands::roles::run(&tables),
        Commands::Check { tables } => commands::check::run(&tables),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
