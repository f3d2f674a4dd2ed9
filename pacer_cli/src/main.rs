use clap::{Parser, Subcommand};
use pacer_core::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pacer")]
#[command(about = "Workout statistics from raw sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the packages file from config
    #[arg(long, global = true)]
    packages: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print one summary line per sensor package (default)
    Summarize,

    /// Print the built-in sample packages as JSON
    Samples,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    pacer_core::logging::init_with_level(&config.log.level);

    let result = match cli.command {
        Some(Commands::Samples) => cmd_samples(),
        Some(Commands::Summarize) | None => cmd_summarize(cli.packages, &config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_summarize(packages_override: Option<PathBuf>, config: &Config) -> Result<()> {
    let packages = match packages_override.or_else(|| config.input.packages_file.clone()) {
        Some(path) => read_packages_file(&path)?,
        None => sample_packages().to_vec(),
    };

    tracing::info!("Summarizing {} sensor packages", packages.len());

    // The first bad package aborts the run: no line is printed for it and
    // nothing after it is processed.
    for package in &packages {
        let workout = read_package(package)?;
        println!("{}", workout.summary());
    }

    Ok(())
}

fn cmd_samples() -> Result<()> {
    let json = serde_json::to_string_pretty(sample_packages())?;
    println!("{json}");
    Ok(())
}
