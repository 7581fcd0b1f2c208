use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use relcheck_unresolved::{Config, OutputFormat};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "relcheck")]
#[command(about = "Static checks for JavaScript/TypeScript source trees", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report relative imports that do not resolve to a file
    Unresolved(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Unresolved(cfg) => {
            if let Some(jobs) = cfg.jobs {
                rayon::ThreadPoolBuilder::new().num_threads(jobs).build_global()?;
            }
            let num_threads = rayon::current_num_threads();
            info!(
                "Running unresolved import check on {} (using {} threads)",
                cfg.root.display(),
                num_threads
            );

            let format = cfg.format;
            let result = relcheck_unresolved::run_unresolved_check(cfg)?;
            debug!("Found {} unresolved imports", result.errors.len());

            match format {
                OutputFormat::Text => relcheck_unresolved::print_report(&mut stdout, &result.errors)?,
                OutputFormat::Json => {
                    relcheck_unresolved::print_json_report(&mut stdout, &result.errors)?
                }
            }
            stdout.flush()?;

            let elapsed_ms = start.elapsed().as_millis();
            match format {
                OutputFormat::Text => eprintln!(
                    "{} Finished in {}ms on {} files (using {} threads).",
                    "●".bright_blue(),
                    elapsed_ms.to_string().cyan(),
                    result.files_scanned.to_string().cyan(),
                    num_threads.to_string().cyan()
                ),
                // Keep machine-readable runs quiet unless logging is enabled
                OutputFormat::Json => info!(
                    "Finished in {}ms on {} files (using {} threads).",
                    elapsed_ms, result.files_scanned, num_threads
                ),
            }

            if !result.errors.is_empty() {
                // Non-zero exit to fail CI
                std::process::exit(1);
            }

            Ok(())
        }
    }
}
