//! `jsonval` CLI: check, minify, and measure JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate JSON (stdin)
//! echo '{"name":"Alice","age":30}' | jsonval check
//!
//! # Minify from file to file
//! jsonval minify -i data.json -o data.min.json
//!
//! # Show size statistics
//! jsonval stats -i data.json
//!
//! # Tighten the nesting bound for untrusted input
//! jsonval --max-depth 16 check -i upload.json
//! ```
//!
//! Set `RUST_LOG=jsonval=debug` to see parser logging on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsonval::{ParseOptions, Value};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsonval", version, about = "Strict JSON checker and minifier")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum nesting depth of arrays/objects
    #[arg(long, global = true, default_value_t = jsonval::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the input is valid JSON and print its root type
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Re-emit the input in minimal canonical form
    Minify {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show size statistics (input bytes, minified bytes, reduction)
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = ParseOptions::new().with_max_depth(cli.max_depth);

    match cli.command {
        Commands::Check { input } => {
            let json = read_input(input.as_deref())?;
            let value = parse_input(&json, &options)?;
            println!("valid {}", value.value_type());
        }
        Commands::Minify { input, output } => {
            let json = read_input(input.as_deref())?;
            let value = parse_input(&json, &options)?;
            let mut minified = jsonval::serialize(&value);
            if output.is_none() {
                minified.push('\n');
            }
            write_output(output.as_deref(), &minified)?;
        }
        Commands::Stats { input } => {
            let json = read_input(input.as_deref())?;
            let value = parse_input(&json, &options)?;
            let minified = jsonval::serialize(&value);
            let input_bytes = json.len();
            let minified_bytes = minified.len();
            let ratio = if input_bytes > 0 {
                (1.0 - (minified_bytes as f64 / input_bytes as f64)) * 100.0
            } else {
                0.0
            };
            println!("Root type:      {}", value.value_type());
            println!("Input size:     {} bytes", input_bytes);
            println!("Minified size:  {} bytes", minified_bytes);
            println!("Reduction:      {:.1}%", ratio);
        }
    }

    Ok(())
}

fn parse_input(json: &str, options: &ParseOptions) -> Result<Value> {
    jsonval::parse_with_options(json, options).context("Invalid JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
