//! Statistics reporting.

use console::style;

use crate::rename::RunReport;

/// Print the end-of-run summary.
pub fn print_run_stats(report: &RunReport) {
    let renamed_label = if report.dry_run {
        "Would rename:"
    } else {
        "Renamed:"
    };

    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!(
        "{}",
        style(format!("Summary for {}:", report.directory.display())).bold()
    );
    println!("  {:<13} {}", renamed_label, style(report.renamed_count).green());
    println!(
        "  {:<13} {} (no creation time)",
        "Skipped:",
        style(report.skipped_count).yellow()
    );
    if report.failed_count > 0 {
        println!("  {:<13} {}", "Failed:", style(report.failed_count).red());
        for (path, error) in report.failures() {
            println!("    {} {}", style(path.display()).red(), style(error).dim());
        }
    }
    println!("  {:<13} {}", "Ignored:", report.ignored_count);
    println!("{}", style("═".repeat(50)).dim());
}

/// Print the report as JSON on stdout.
pub fn print_json_report(report: &RunReport) -> crate::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
