use anyhow::{Context, Result};
use clap::Parser;
use place_anonymizer::anonymizer::Anonymizer;
use place_anonymizer::batch::anonymize_lines;
use place_anonymizer::utils::logger::init_logger;
use place_anonymizer::utils::settings::{InputFormat, Settings};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Replace city, district, county, township and village names in free text
/// with generic markers, keeping province names.
#[derive(Debug, Parser)]
#[command(name = "place-anonymizer", version, about)]
struct Cli {
    /// Input file (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input format
    #[arg(short, long, value_enum)]
    format: Option<InputFormat>,

    /// Settings file (TOML, JSON or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for log files
    #[arg(long)]
    log_dir: Option<String>,

    /// Print a per-stage replacement summary to stderr
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let log_dir = cli.log_dir.clone().unwrap_or(settings.log_dir);
    if let Err(e) = init_logger(&log_dir) {
        eprintln!("Logging disabled: {:#}", e);
    }

    let format = cli.format.unwrap_or(settings.input_format);
    let input = read_input(cli.input.as_deref())?;
    info!("Read {} bytes of {:?} input", input.len(), format);

    let anonymizer = Anonymizer::new();
    let output = anonymize_lines(&anonymizer, &input, format)?;
    if output.lines.is_empty() {
        warn!("Input contained no lines");
    }

    write_output(cli.output.as_deref(), &output.lines)?;

    if cli.report {
        eprint!("{}", output.summary());
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, lines: &[String]) -> Result<()> {
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }

    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} lines to {}", lines.len(), path.display());
        }
        None => io::stdout()
            .write_all(content.as_bytes())
            .context("Failed to write stdout")?,
    }

    Ok(())
}
