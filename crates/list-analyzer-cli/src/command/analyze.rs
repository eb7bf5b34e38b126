use std::path::{Path, PathBuf};

use list_analyzer_stats::analyze;

use crate::util::{self, Output, OutputFormat};

/// Sequence analyzed when neither numbers nor an input file are given.
const SAMPLE_VALUES: [i64; 6] = [5, 9, 2, 4, 11, 13];

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// Integers to analyze [default: 5 9 2 4 11 13]
    #[arg(allow_negative_numbers = true, conflicts_with = "input")]
    numbers: Vec<i64>,
    /// JSON file containing an array of integers to analyze
    #[arg(long)]
    input: Option<PathBuf>,
    /// Report format (text or json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let AnalyzeArg {
        numbers,
        input,
        format,
        output,
    } = arg;

    let values = collect_values(numbers, input.as_deref())?;
    if values.is_empty() {
        log::warn!("input sequence is empty; only the count is meaningful");
    }
    let stats = analyze(&values);

    let mut output = Output::from_output_path(output.clone())?;
    log::debug!("writing {format:?} report to {}", output.display_path());
    output.write_report(&stats, *format)
}

fn collect_values(numbers: &[i64], input: Option<&Path>) -> anyhow::Result<Vec<i64>> {
    if let Some(path) = input {
        let values = util::read_numbers_file(path)?;
        log::debug!("loaded {} values from {}", values.len(), path.display());
        return Ok(values);
    }

    if numbers.is_empty() {
        log::debug!("no numbers given, analyzing built-in sample {SAMPLE_VALUES:?}");
        return Ok(SAMPLE_VALUES.to_vec());
    }

    log::debug!("analyzing {} values from the command line", numbers.len());
    Ok(numbers.to_vec())
}
