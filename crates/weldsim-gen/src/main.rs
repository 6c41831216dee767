//! ---
//! wms_section: "02-simulation"
//! wms_subsection: "02-generator-cli"
//! wms_type: "source"
//! wms_scope: "code"
//! wms_description: "Command-line entry point for record generation and export."
//! wms_version: "v0.1.0"
//! wms_owner: "tbd"
//! ---
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use weldsim_common::{init_tracing, SimConfig, StartTime};
use weldsim_sim::{default_file_name, write_csv, write_json, WeldingSimulationEngine};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Generate synthetic welding-machine operating records",
    long_about = None
)]
struct Cli {
    /// Number of records to generate (config default: 7500)
    #[arg(long)]
    records: Option<u64>,

    /// Interval between records in seconds (config default: 5)
    #[arg(long)]
    interval_secs: Option<f64>,

    /// Start timestamp as 'YYYY-MM-DD HH:MM:SS'; defaults to now
    #[arg(long)]
    start: Option<StartTime>,

    /// Output file path. Use '-' for stdout. Defaults to
    /// '<start-date>-welding_machine_records.csv' in the working directory.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Explicit output format when extension is ambiguous
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Random seed for reproducible runs; omitted means OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration file path (YAML); WELDSIM_CONFIG overrides
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SimConfig::from_path(path)?,
        None => SimConfig::load(&["weldsim.yaml", "configs/weldsim.yaml"])?,
    };
    init_tracing(config.logging.format);

    let records_requested = cli.records.unwrap_or(config.records);
    let interval_secs = cli.interval_secs.unwrap_or(config.interval_seconds);
    let start = cli.start.unwrap_or(config.start_time);

    let mut engine = match cli.seed {
        Some(seed) => WeldingSimulationEngine::seeded(interval_secs, start, seed),
        None => WeldingSimulationEngine::from_entropy(interval_secs, start),
    }
    .context("failed to set up the simulation engine")?;
    let records = engine
        .generate(records_requested)
        .context("failed to generate records")?;

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(default_file_name(&records)));
    let format = determine_format(&output, cli.format);

    if output.as_os_str() == "-" {
        let stdout = io::stdout().lock();
        write_records(stdout, &records, format)?;
    } else {
        let file = std::fs::File::create(&output)
            .with_context(|| format!("failed to create output file {}", output.display()))?;
        write_records(file, &records, format)?;
        info!(
            records = records.len(),
            output = %output.display(),
            "generation complete"
        );
    }

    Ok(())
}

fn determine_format(path: &Path, override_format: Option<OutputFormat>) -> OutputFormat {
    if let Some(format) = override_format {
        return format;
    }
    if path.as_os_str() == "-" {
        return OutputFormat::Json;
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Csv,
    }
}

fn write_records<W: Write>(
    writer: W,
    records: &[weldsim_sim::SimulationRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, records)?,
        OutputFormat::Json => write_json(writer, records)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determine_format_defaults_to_csv() {
        let format = determine_format(Path::new("records.data"), None);
        assert!(matches!(format, OutputFormat::Csv));
        let format = determine_format(Path::new("out.csv"), None);
        assert!(matches!(format, OutputFormat::Csv));
    }

    #[test]
    fn determine_format_honours_json_extension() {
        let format = determine_format(Path::new("records.json"), None);
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn determine_format_for_stdout_defaults_to_json() {
        let format = determine_format(Path::new("-"), None);
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn determine_format_prefers_explicit_override() {
        let format = determine_format(Path::new("out.csv"), Some(OutputFormat::Json));
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn cli_parses_start_timestamps() {
        let cli = Cli::parse_from([
            "weldsim-gen",
            "--records",
            "3",
            "--interval-secs",
            "5",
            "--start",
            "2025-05-03 08:00:00",
        ]);
        assert_eq!(cli.records, Some(3));
        assert!(matches!(cli.start, Some(StartTime::At(_))));
    }

    #[test]
    fn cli_rejects_malformed_start() {
        let result = Cli::try_parse_from(["weldsim-gen", "--start", "05-03-2025"]);
        assert!(result.is_err());
    }
}
