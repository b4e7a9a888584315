//! # sheetpack-cli
//!
//! Thin command-line entry point around the sheetpack core: reads workbook
//! files, runs split/merge, writes the resulting artifacts.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use sheetpack_core::{merge, split, MergeDatePrefix, NamingRule, SheetError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// sheetpack - split and merge xlsx workbooks
#[derive(Parser)]
#[command(name = "sheetpack")]
#[command(author, version, about = "Split and merge xlsx workbooks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Split a workbook into one file per sheet
    Split {
        /// Source workbook (.xlsx)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output filename rule
        #[arg(short, long, value_enum, default_value_t)]
        rule: RuleArg,

        /// Directory to write the output files into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Merge several workbooks into one
    Merge {
        /// Source workbooks (.xlsx), at least two
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Name of the merged output file
        #[arg(short = 'o', long, default_value = "merged.xlsx")]
        output: String,

        /// Prefix the output filename with today's date (YYYYMMDD)
        #[arg(long)]
        date_prefix: bool,

        /// Directory to write the output file into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

/// Output filename rule for `split`.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum RuleArg {
    /// {original}_{sheet}.xlsx
    #[default]
    OriginalAndSheet,
    /// {sheet}.xlsx
    SheetOnly,
    /// {date}_{original}_{sheet}.xlsx
    DateOriginalAndSheet,
    /// {date}_{sheet}.xlsx
    DateAndSheet,
}

impl From<RuleArg> for NamingRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::OriginalAndSheet => NamingRule::OriginalAndSheet,
            RuleArg::SheetOnly => NamingRule::SheetOnly,
            RuleArg::DateOriginalAndSheet => NamingRule::DateOriginalAndSheet,
            RuleArg::DateAndSheet => NamingRule::DateAndSheet,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    match cli.command {
        Command::Split {
            file,
            rule,
            out_dir,
        } => {
            let written = run_split(&file, rule.into(), &out_dir)?;
            if written.is_empty() {
                println!("{}", "workbook has no sheets, nothing to split".yellow());
            } else {
                for name in &written {
                    println!("{} {name}", "wrote".green());
                }
                println!("{}", format!("split into {} file(s)", written.len()).green());
            }
        }
        Command::Merge {
            files,
            output,
            date_prefix,
            out_dir,
        } => {
            let written = run_merge(&files, &output, date_prefix, &out_dir)?;
            println!("{} {written}", "wrote".green());
        }
    }

    Ok(())
}

/// Split one workbook file and write each artifact into `out_dir`
fn run_split(file: &Path, rule: NamingRule, out_dir: &Path) -> Result<Vec<String>> {
    require_xlsx(file)?;

    let bytes =
        fs::read(file).with_context(|| format!("Failed to read file: {}", file.display()))?;
    let filename = display_name(file);

    let artifacts = split(&bytes, &filename, rule)
        .with_context(|| format!("Failed to split {}", file.display()))?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = out_dir.join(&artifact.filename);
        fs::write(&path, &artifact.bytes)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote split artifact");
        written.push(artifact.filename);
    }

    Ok(written)
}

/// Merge workbook files and write the single artifact into `out_dir`
fn run_merge(files: &[PathBuf], output: &str, date_prefix: bool, out_dir: &Path) -> Result<String> {
    if files.len() < 2 {
        return Err(SheetError::EmptyInput(format!(
            "merge needs at least two input files, got {}",
            files.len()
        ))
        .into());
    }
    for file in files {
        require_xlsx(file)?;
    }

    let mut inputs = Vec::with_capacity(files.len());
    for file in files {
        let bytes =
            fs::read(file).with_context(|| format!("Failed to read file: {}", file.display()))?;
        inputs.push((display_name(file), bytes));
    }

    // The date token in the output name is an alternate way to ask for the
    // date prefix; the token itself is dropped from the name.
    let (heuristic_prefix, output) = strip_date_token(output);
    let prefix = if date_prefix || heuristic_prefix {
        MergeDatePrefix::Compact
    } else {
        MergeDatePrefix::None
    };

    let artifact = merge(&inputs, output, prefix).context("Failed to merge workbooks")?;

    let path = out_dir.join(&artifact.filename);
    fs::write(&path, &artifact.bytes)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(artifact.filename)
}

/// Reject files that do not carry the .xlsx extension
fn require_xlsx(file: &Path) -> Result<()> {
    if file.extension().is_some_and(|ext| ext == "xlsx") {
        Ok(())
    } else {
        bail!("only .xlsx files are supported: {}", file.display())
    }
}

/// The filename component of a path, as the core sees it
fn display_name(file: &Path) -> String {
    file.file_name()
        .map_or_else(|| file.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Detect and drop a leading `YYYYMMDD` / `[YYYYMMDD]` token in the output name
fn strip_date_token(output: &str) -> (bool, &str) {
    for token in ["[YYYYMMDD]", "YYYYMMDD"] {
        if let Some(rest) = output.strip_prefix(token) {
            return (true, rest.strip_prefix('_').unwrap_or(rest));
        }
    }
    (false, output)
}
