use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use zeroize::Zeroizing;

use shamir_recover::cli::{Cli, Commands, reconstruct_config};
use shamir_recover::commands::{
    Reconstruction, decode_value, encode_value, reconstruct_file, reconstruct_str,
};
use shamir_recover::domain::ReconstructConfig;

/// Read a share document from stdin
fn read_document() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Paste the share document (JSON), then press Ctrl-D:");
    }

    let mut document = Zeroizing::new(String::new());
    io::stdin()
        .lock()
        .read_to_string(&mut document)
        .context("Failed to read share document from stdin")?;

    if document.trim().is_empty() {
        anyhow::bail!("No share document provided");
    }

    Ok(document)
}

/// Install the logger; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn reconstruct_all(
    files: &[std::path::PathBuf],
    config: &ReconstructConfig,
) -> Result<Vec<Reconstruction>> {
    if files.is_empty() {
        let document = read_document()?;
        return Ok(vec![reconstruct_str(&document, "<stdin>", config)?]);
    }

    files
        .iter()
        .map(|path| reconstruct_file(path, config))
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Reconstruct {
            files,
            exact,
            all_points,
            json,
        } => {
            let config = reconstruct_config(exact, all_points);
            let results = reconstruct_all(&files, &config)?;

            if json {
                for result in &results {
                    println!("{}", serde_json::to_string(&result.summary())?);
                }
            } else {
                for result in &results {
                    println!("{result}");
                    println!();
                }
                if results.len() > 1 {
                    println!("==================================================");
                    println!("Final Results:");
                    for result in &results {
                        println!("Secret from {}: {}", result.source(), result.secret());
                    }
                }
            }
        }
        Commands::Decode { base, digits } => {
            println!("{}", decode_value(&digits, &base)?);
        }
        Commands::Encode { base, value } => {
            println!("{}", encode_value(&value, &base)?);
        }
    }

    Ok(())
}
