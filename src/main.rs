use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cmcron::AppError;

#[derive(Parser)]
#[command(name = "cmcron")]
#[command(version)]
#[command(
    about = "Package XML/JSON config files into a ConfigMap with a CronJob mounting it",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate configmap.yaml and cronjob.yaml for a config directory
    #[clap(visible_alias = "g")]
    Generate {
        /// Directory containing the XML and JSON files (prompted when omitted)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Mount path for the ConfigMap volume (prompted when omitted)
        #[arg(short, long)]
        mount_path: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { dir, mount_path } => {
            cmcron::generate(dir.as_deref(), mount_path).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
