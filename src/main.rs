use std::process;
use std::time::Instant;

use anyhow::{bail, Result};
use chrono::{Datelike, Utc};
use clap::Parser;
use tracing::info;

use yulee::args::{Args, Method};
use yulee::export;
use yulee::finder::{self, SundayChristmases, YearRange};
use yulee::report;
use yulee::stats::analyze_patterns;
use yulee::utils::setup_logging;

// Golden lists carried from the original accuracy suite; every year is
// individually verifiable against a published calendar.
const ACCURACY_CASES: &[(i32, i32, &[i32])] = &[
    (
        2000,
        2100,
        &[
            2005, 2011, 2016, 2022, 2033, 2039, 2044, 2050, 2061, 2067, 2072, 2078, 2089, 2095,
        ],
    ),
    (1970, 2017, &[1977, 1983, 1988, 1994, 2005, 2011, 2016]),
    (
        2008,
        2121,
        &[
            2011, 2016, 2022, 2033, 2039, 2044, 2050, 2061, 2067, 2072, 2078, 2089, 2095, 2101,
            2107, 2112, 2118,
        ],
    ),
];

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if args.test {
        return run_accuracy_checks();
    }

    let range = YearRange::new(args.start, args.end)?;

    let scan_start = Instant::now();
    let years = match args.method {
        Method::Basic => finder::direct_scan(range),
        Method::Optimized => finder::cycle_scan(range),
        Method::Generator => SundayChristmases::new(range).collect(),
    };
    info!(
        "Scanned {} years in {:.1}ms ({} matches)",
        range.span(),
        scan_start.elapsed().as_secs_f64() * 1000.0,
        years.len()
    );

    report::print_results(range, &years);

    let reference_year = args.reference_year.unwrap_or_else(|| Utc::now().year());
    let stats = analyze_patterns(range, &years, reference_year);

    if args.analyze {
        report::print_analysis(&stats);
    }

    if args.visualize {
        report::print_timeline(range, &stats);
    }

    if let Some(format) = args.export {
        // Statistics ride along in the export only when they were asked for.
        let stats_for_export = args.analyze.then_some(&stats);
        let destination = export::export_results(
            range,
            &years,
            stats_for_export,
            format,
            args.output.as_deref(),
        )?;
        println!("Results exported to {}", destination.display());
    }

    Ok(())
}

fn run_accuracy_checks() -> Result<()> {
    println!("Running accuracy checks...");

    let mut failures = 0;
    for &(start, end, expected) in ACCURACY_CASES {
        let range = YearRange::new(start, end)?;
        let result = finder::find_sunday_christmases(range);
        if result == expected {
            println!("ok   {start}-{end}");
        } else {
            println!("FAIL {start}-{end}");
            println!("  expected: {expected:?}");
            println!("  got:      {result:?}");
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} accuracy check(s) failed");
    }
    println!("All accuracy checks passed");
    Ok(())
}
