use std::{
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use list_analyzer_stats::StatsResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Destination of the statistics report
#[derive(Debug)]
pub(crate) enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Opens `output_path` for writing, or stdout when no path is given.
    pub(crate) fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = output_path else {
            return Ok(Output::Stdout {
                writer: io::stdout().lock(),
            });
        };
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub(crate) fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    /// Writes `stats` in the requested format and flushes the destination.
    pub(crate) fn write_report(
        &mut self,
        stats: &StatsResult,
        format: OutputFormat,
    ) -> anyhow::Result<()> {
        match format {
            OutputFormat::Text => write_text_report(&mut *self, stats)
                .with_context(|| format!("Failed to write report to {}", self.display_path()))?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *self, stats)
                    .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
                writeln!(self).with_context(|| {
                    format!("Failed to write JSON to {}", self.display_path())
                })?;
            }
        }
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Writes the report as one `Label: value` line per statistic.
///
/// Floating-point fields use `Debug` formatting so integral values keep
/// their fractional part (`7.0`, not `7`).
fn write_text_report<W>(writer: &mut W, stats: &StatsResult) -> io::Result<()>
where
    W: Write,
{
    let StatsResult {
        count,
        min,
        max,
        total: _,
        mean,
        median,
        std_dev,
    } = stats;

    writeln!(writer, "Count: {count}")?;
    writeln!(writer, "Min: {min}")?;
    writeln!(writer, "Max: {max}")?;
    writeln!(writer, "Mean: {mean:?}")?;
    writeln!(writer, "Median: {median:?}")?;
    writeln!(writer, "Standard Deviation: {std_dev:?}")?;
    Ok(())
}

/// Read the sequence to analyze from a JSON file
///
/// # Arguments
///
/// * `path` - Path to a JSON file holding an array of integers, e.g. `[5, 9, 2]`
///
/// # Errors
///
/// Returns error if the file cannot be opened, is not valid JSON, or contains
/// anything other than integers representable as `i64`
pub(crate) fn read_numbers_file(path: &Path) -> anyhow::Result<Vec<i64>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open numbers file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse numbers JSON file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use list_analyzer_stats::analyze;

    use super::*;

    fn render(stats: &StatsResult) -> String {
        let mut buf = Vec::new();
        write_text_report(&mut buf, stats).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_report_line_order() {
        let report = render(&analyze(&[1, 2, 3, 4, 5]));
        let std_dev_line = format!("Standard Deviation: {:?}", 2.0_f64.sqrt());
        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            [
                "Count: 5",
                "Min: 1",
                "Max: 5",
                "Mean: 3.0",
                "Median: 3.0",
                std_dev_line.as_str(),
            ]
        );
    }

    #[test]
    fn test_text_report_for_empty_input() {
        let report = render(&analyze(&[]));
        assert_eq!(
            report,
            "Count: 0\nMin: 0\nMax: 0\nMean: 0.0\nMedian: 0.0\nStandard Deviation: 0.0\n"
        );
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_read_numbers_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numbers.json");
        fs::write(&path, "[5, -9, 2]").unwrap();
        assert_eq!(read_numbers_file(&path).unwrap(), [5, -9, 2]);
    }

    #[test]
    fn test_read_numbers_file_rejects_non_integers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numbers.json");
        fs::write(&path, "[1, 2.5]").unwrap();
        let err = read_numbers_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse numbers JSON file"));
    }

    #[test]
    fn test_read_numbers_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_numbers_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open numbers file"));
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let text_path = dir.path().join("report.txt");
        let json_path = dir.path().join("report.json");
        let stats = analyze(&[10, 1, 4, 3]);

        let mut output = Output::from_output_path(Some(text_path.clone())).unwrap();
        assert_eq!(output.display_path(), text_path.display().to_string());
        output.write_report(&stats, OutputFormat::Text).unwrap();
        drop(output);
        assert_eq!(fs::read_to_string(&text_path).unwrap(), render(&stats));

        let mut output = Output::from_output_path(Some(json_path.clone())).unwrap();
        output.write_report(&stats, OutputFormat::Json).unwrap();
        drop(output);
        let written: StatsResult =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(written.count, 4);
        assert_eq!(written.total, 18);
        assert_eq!(written.mean, 4.5);
        assert_eq!(written.median, 3.5);
        assert!((written.std_dev - stats.std_dev).abs() < 1e-12);
    }

    #[test]
    fn test_output_path_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        let err = Output::from_output_path(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
