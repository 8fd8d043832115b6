//! Command-line interface for the extractor.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{DEFAULT_TEXT_INPUT, DEFAULT_TEXT_OUTPUT, DEFAULT_XML_INPUT};
use crate::egov::extract_articles_from_file;
use crate::error::{ExtractorError, Result};
use crate::json::{generate_json, save_json, write_json};
use crate::segment::segment_file;
use crate::types::Article;

/// Keiho extractor - Convert Japanese legal codes into JSON article records.
#[derive(Parser)]
#[command(name = "keiho-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Segment a plain-text code (blank-line separated sections) into JSON.
    Segment {
        /// Plain-text source file
        #[arg(short, long, default_value = DEFAULT_TEXT_INPUT)]
        input: PathBuf,

        /// JSON output file
        #[arg(short, long, default_value = DEFAULT_TEXT_OUTPUT)]
        output: PathBuf,

        /// Verify the output file is up to date instead of writing it
        #[arg(long)]
        check: bool,
    },

    /// Convert e-Gov law XML into JSON.
    Xml {
        /// e-Gov XML source file
        #[arg(short, long, default_value = DEFAULT_XML_INPUT)]
        input: PathBuf,

        /// JSON output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Segment {
            input,
            output,
            check,
        } => segment_command(&input, &output, check),
        Commands::Xml { input, output } => xml_command(&input, output.as_deref()),
    }
}

/// Execute the segment command.
fn segment_command(input: &Path, output: &Path, check: bool) -> Result<()> {
    let articles = segment_file(input)?;

    if check {
        let expected = generate_json(&articles)?;
        // Compared byte for byte; no BOM or line-ending normalization.
        let actual = fs::read_to_string(output).map_err(|source| ExtractorError::ReadInput {
            path: output.to_path_buf(),
            source,
        })?;
        if actual != expected {
            return Err(ExtractorError::OutputMismatch {
                path: output.to_path_buf(),
            });
        }
        println!(
            "{} {} ({} articles)",
            style("Up to date:").green().bold(),
            output.display(),
            articles.len()
        );
        return Ok(());
    }

    let saved = save_json(&articles, output)?;
    print_summary(&articles);
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        saved.display()
    );

    Ok(())
}

/// Execute the xml command.
fn xml_command(input: &Path, output: Option<&Path>) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Parsing {}...", input.display()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let articles = match extract_articles_from_file(input) {
        Ok(articles) => articles,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    match output {
        Some(path) => {
            let saved = save_json(&articles, path)?;
            print_summary(&articles);
            println!(
                "{} {}",
                style("Saved to:").green().bold(),
                saved.display()
            );
        }
        None => {
            // Keep stdout pure JSON
            write_json(&articles, io::stdout().lock())?;
            eprintln!("  Articles: {}", articles.len());
        }
    }

    Ok(())
}

/// Print article counts.
fn print_summary(articles: &[Article]) {
    let captioned = articles.iter().filter(|a| !a.caption.is_empty()).count();
    println!("  Articles: {}", style(articles.len()).cyan());
    println!("  With caption: {captioned}");
}
