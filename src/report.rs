use crate::finder::YearRange;
use crate::stats::PatternStats;

pub fn print_results(range: YearRange, years: &[i32]) {
    println!("\n--- Sunday Christmases {} ---", range);
    println!("Found {} occurrences", years.len());

    if years.is_empty() {
        println!("(none in range)");
        return;
    }

    let listed: Vec<String> = years.iter().map(i32::to_string).collect();
    println!("{}", listed.join(", "));
}

pub fn print_analysis(stats: &PatternStats) {
    println!("\n--- Pattern analysis ---");
    println!("Total Sunday Christmases: {}", stats.count);
    println!("Frequency: {:.1}%", stats.frequency_percent);

    match stats.average_gap {
        Some(avg) => println!("Average gap: {avg:.2} years"),
        None => println!("Average gap: -"),
    }
    if let Some(max) = stats.max_gap {
        println!("Longest gap: {max} years");
    }
    if let Some(gap) = stats.most_common_gap {
        println!("Most common gap: {gap} years");
    }
    if let (Some(first), Some(last)) = (stats.first_year, stats.last_year) {
        println!("First / last in range: {first} / {last}");
    }
    match stats.next_year {
        Some(year) => println!("Next occurrence: {year}"),
        None => println!("Next occurrence: none in range"),
    }
}

/// One bar per decade, one `#` per Sunday Christmas in it.
pub fn print_timeline(range: YearRange, stats: &PatternStats) {
    println!("\n--- Timeline {} ---", range);

    if stats.by_decade.is_empty() {
        println!("(no occurrences to plot)");
        return;
    }

    let mut decade = range.start / 10 * 10;
    let last_decade = range.end / 10 * 10;
    while decade <= last_decade {
        let count = stats.by_decade.get(&decade).copied().unwrap_or(0);
        println!("{decade:>4}s | {}", "#".repeat(count));
        decade += 10;
    }

    if !stats.gaps.is_empty() {
        let gaps: Vec<String> = stats.gaps.iter().map(i32::to_string).collect();
        println!("Gaps: {}", gaps.join(", "));
    }
}
