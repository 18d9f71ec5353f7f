//! CLI Adapter.

mod init;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{AppError, ScaffoldRequest};

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(version)]
#[command(about = "CLI tool for Semantic Flow Root Repositories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new SFRootRepo at the given path
    #[clap(visible_alias = "i")]
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: String,
        /// Site root URL; skips inference and the site root prompt
        #[arg(long = "siteRoot", visible_alias = "site-root", value_name = "URL")]
        site_root: Option<String>,
        /// Output folder name
        #[arg(long, value_name = "DIR")]
        output: Option<String>,
        /// Source folder name
        #[arg(long, value_name = "DIR")]
        src: Option<String>,
        /// Print diagnostic logs to stderr
        #[arg(long)]
        debug: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { path, site_root, output, src, debug } => {
            init::run_init(ScaffoldRequest {
                path: PathBuf::from(path),
                explicit_site_root: site_root,
                explicit_output_dir: output,
                explicit_src_dir: src,
                debug,
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
