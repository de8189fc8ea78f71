use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::YuleError;
use crate::finder::YearRange;
use crate::stats::PatternStats;

/// Supported export encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Structured record: range metadata, result years, optional statistics.
    Json,
    /// Tabular with a `year` header row.
    Csv,
    /// Plain listing, one year per line.
    Txt,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
        }
    }

    /// Destination used when the caller does not name one.
    pub fn default_filename(&self) -> PathBuf {
        PathBuf::from(format!("christmas_sundays.{}", self.extension()))
    }
}

impl FromStr for ExportFormat {
    type Err = YuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "txt" => Ok(ExportFormat::Txt),
            _ => Err(YuleError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// The structured-record form; round-trips through JSON without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub range: YearRange,
    pub count: usize,
    pub years: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PatternStats>,
}

impl ExportDocument {
    pub fn new(range: YearRange, years: Vec<i32>, statistics: Option<PatternStats>) -> Self {
        Self {
            range,
            count: years.len(),
            years,
            statistics,
        }
    }
}

/// Serialize results in the requested format.
pub fn render(
    range: YearRange,
    years: &[i32],
    stats: Option<&PatternStats>,
    format: ExportFormat,
) -> String {
    match format {
        ExportFormat::Json => {
            let doc = ExportDocument::new(range, years.to_vec(), stats.cloned());
            let mut text =
                serde_json::to_string_pretty(&doc).expect("export document serializes to JSON");
            text.push('\n');
            text
        }
        ExportFormat::Csv => {
            let mut out = String::from("year\n");
            for year in years {
                out.push_str(&year.to_string());
                out.push('\n');
            }
            out
        }
        ExportFormat::Txt => {
            let mut out = String::new();
            for year in years {
                out.push_str(&year.to_string());
                out.push('\n');
            }
            out
        }
    }
}

/// Parse a structured-record export back into its document form.
pub fn parse_json(text: &str) -> Result<ExportDocument, YuleError> {
    let doc: ExportDocument = serde_json::from_str(text)?;
    // Deserialization bypasses the validated constructor; re-check the range.
    YearRange::new(doc.range.start, doc.range.end)?;
    Ok(doc)
}

/// One-shot write of rendered output; no retry on failure.
pub fn write_results(path: &Path, contents: &str) -> Result<(), YuleError> {
    fs::write(path, contents).map_err(|source| YuleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Render and write in one call, returning the destination used.
pub fn export_results(
    range: YearRange,
    years: &[i32],
    stats: Option<&PatternStats>,
    format: ExportFormat,
    destination: Option<&Path>,
) -> Result<PathBuf, YuleError> {
    let destination = destination
        .map(Path::to_path_buf)
        .unwrap_or_else(|| format.default_filename());
    let rendered = render(range, years, stats, format);
    write_results(&destination, &rendered)?;
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::analyze_patterns;

    const YEARS: [i32; 4] = [2005, 2011, 2016, 2022];

    fn range() -> YearRange {
        YearRange::new(2000, 2025).unwrap()
    }

    #[test]
    fn csv_has_year_header() {
        let out = render(range(), &YEARS, None, ExportFormat::Csv);
        assert_eq!(out, "year\n2005\n2011\n2016\n2022\n");
    }

    #[test]
    fn txt_is_one_year_per_line() {
        let out = render(range(), &YEARS, None, ExportFormat::Txt);
        assert_eq!(out, "2005\n2011\n2016\n2022\n");
    }

    #[test]
    fn json_round_trips_years_and_range() {
        let text = render(range(), &YEARS, None, ExportFormat::Json);
        let doc = parse_json(&text).unwrap();
        assert_eq!(doc.range, range());
        assert_eq!(doc.count, 4);
        assert_eq!(doc.years, YEARS);
        assert_eq!(doc.statistics, None);
    }

    #[test]
    fn json_round_trips_statistics() {
        let stats = analyze_patterns(range(), &YEARS, 2017);
        let text = render(range(), &YEARS, Some(&stats), ExportFormat::Json);
        let doc = parse_json(&text).unwrap();
        assert_eq!(doc.statistics, Some(stats));
    }

    #[test]
    fn json_round_trips_empty_result_set() {
        let text = render(range(), &[], None, ExportFormat::Json);
        let doc = parse_json(&text).unwrap();
        assert_eq!(doc.range, range());
        assert_eq!(doc.count, 0);
        assert!(doc.years.is_empty());
    }

    #[test]
    fn format_parsing_is_case_insensitive() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("Csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, YuleError::UnsupportedFormat(ref s) if s == "xml"));
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!(matches!(
            parse_json("{\"years\": [2005]}"),
            Err(YuleError::Malformed(_))
        ));
    }

    #[test]
    fn reversed_range_in_document_is_rejected() {
        let text = "{\"range\":{\"start\":2025,\"end\":2000},\"count\":0,\"years\":[]}";
        assert!(matches!(
            parse_json(text),
            Err(YuleError::InvalidRange { .. })
        ));
    }

    #[test]
    fn default_filenames_follow_format() {
        assert_eq!(
            ExportFormat::Json.default_filename(),
            PathBuf::from("christmas_sundays.json")
        );
        assert_eq!(
            ExportFormat::Txt.default_filename(),
            PathBuf::from("christmas_sundays.txt")
        );
    }

    #[test]
    fn unwritable_destination_surfaces_io_error() {
        let dest = Path::new("/nonexistent-yulee-dir/out.json");
        let err = write_results(dest, "x").unwrap_err();
        assert!(matches!(err, YuleError::Io { ref path, .. } if path == dest));
    }
}
