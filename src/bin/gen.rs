//! ruleset-gen: CLI for converting Clash rule lists into platform rule formats.

use clap::{Parser, Subcommand};
use ruleset_gen::{batch, mirror, Platform};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ruleset-gen")]
#[command(version = "0.1.0")]
#[command(about = "Convert Clash rule lists into Egern and sing-box rule-set formats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Mirror the Clash rule tree into the Egern and Singbox trees
    Copy,

    /// Convert rule files in place to the Egern format
    Egern {
        /// Rule file or directory to convert
        path: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Convert rule files in place to the sing-box rule-set format
    Singbox {
        /// Rule file or directory to convert
        path: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Copy) {
        Commands::Copy => run_copy(),
        Commands::Egern { path, verbose } => run_convert(Platform::Egern, &path, verbose),
        Commands::Singbox { path, verbose } => run_convert(Platform::Singbox, &path, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_copy() -> ruleset_gen::Result<()> {
    mirror::mirror_rulesets(Path::new("."))?;
    println!("All Ruleset Processed!");
    Ok(())
}

fn run_convert(platform: Platform, path: &Path, verbose: bool) -> ruleset_gen::Result<()> {
    let files = batch::collect_files(path)?;
    if files.is_empty() {
        println!("No files found in: {}", path.display());
        return Ok(());
    }

    for file in &files {
        match batch::process_file(platform, file) {
            Ok(parsed) => {
                if verbose {
                    println!("Parsed {} rule lines from {}", parsed, file.display());
                }
                println!("Processed ({}): {}", platform, file.display());
            }
            Err(e) => println!("Failed to process {}: {}", file.display(), e),
        }
    }

    println!("Processed Completed.");
    Ok(())
}
