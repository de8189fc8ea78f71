use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::export::ExportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "yulee",
    about = "Find the years whose December 25th falls on a Sunday",
    version,
    long_about = None
)]
pub struct Args {
    /// First year of the search range (inclusive)
    #[arg(short, long, default_value_t = 2000)]
    pub start: i32,

    /// Last year of the search range (inclusive)
    #[arg(short, long, default_value_t = 2100)]
    pub end: i32,

    /// Calculation method
    #[arg(short, long, value_enum, default_value_t = Method::Optimized)]
    pub method: Method,

    /// Print detailed pattern analysis
    #[arg(short, long)]
    pub analyze: bool,

    /// Print a text timeline of the matches
    #[arg(long)]
    pub visualize: bool,

    /// Export results to a file in the given format
    #[arg(long, value_enum)]
    pub export: Option<ExportFormat>,

    /// Destination for --export (defaults to christmas_sundays.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Reference year for the next-occurrence stat (defaults to the current year)
    #[arg(long)]
    pub reference_year: Option<i32>,

    /// Run the built-in accuracy checks against known-good year lists
    #[arg(long)]
    pub test: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Delivery strategy for the one underlying weekday check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Check every year in the range directly
    Basic,
    /// Reuse the precomputed 400-year cycle table
    Optimized,
    /// Stream years from the lazy iterator
    Generator,
}
