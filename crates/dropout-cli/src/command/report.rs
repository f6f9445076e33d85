//! Plain-text analytics report
//!
//! Prints the dashboard sections as aligned tables, one section after another.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use dropout_analytics::{AnalyticsResult, compute_analytics};
use dropout_stats::five_number::FiveNumberSummary;

use crate::{store::RecordStore, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    /// Path to the student records file (.csv or .json)
    pub records: PathBuf,

    /// Analytics configuration JSON file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let config = util::read_config_file(arg.config.as_deref())?;
    let store = RecordStore::load(&arg.records)?;
    let result = compute_analytics(store.records(), &config)
        .with_context(|| format!("Failed to analyze {}", store.source().display()))?;

    println!("Student Dropout Report");
    println!("======================\n");
    println!("Source: {}\n", store.describe_source());

    print_summary(&result);
    println!();
    print_distributions(&result);
    println!();
    print_groups(&result);
    println!();
    print_comparisons(&result);
    println!();
    print_correlations(&result);
    println!();
    print_boxplots(&result);
    println!();
    print_risk(&result);

    Ok(())
}

fn print_summary(result: &AnalyticsResult) {
    println!("Summary:");
    println!("  Students:           {}", result.total_students);
    println!("  Dropout rate:       {}%", result.dropout_rate);
    println!("  Average GPA:        {}", result.average_gpa);
    println!("  Average attendance: {}%", result.average_attendance);
}

fn print_distributions(result: &AnalyticsResult) {
    for dist in &result.distributions {
        println!("Distribution of {}:", dist.feature.name());
        for band in &dist.bands {
            println!("  {:<12} {:>8}", band.range, band.count);
        }
        println!();
    }

    let counts = &result.count_distribution;
    println!("Distribution of {}:", counts.feature.name());
    for value in &counts.counts {
        println!("  {:<12} {:>8}", value.value, value.count);
    }
}

fn print_groups(result: &AnalyticsResult) {
    let grouped = &result.groups;
    let [first, second] = grouped
        .groups
        .first()
        .map_or(["Avg 1", "Avg 2"], |g| g.averages.map(|a| a.feature.name()));

    println!("By {}:", grouped.key.name());
    println!(
        "  {:<10} {:>8} {:>20} {:>20} {:>10}",
        grouped.key.name(),
        "Students",
        first,
        second,
        "Dropout%"
    );
    println!("  {}", "-".repeat(72));
    for group in &grouped.groups {
        println!(
            "  {:<10} {:>8} {:>20.2} {:>20.2} {:>9.1}%",
            group.key,
            group.count,
            group.averages[0].mean,
            group.averages[1].mean,
            group.dropout_rate
        );
    }
}

fn print_comparisons(result: &AnalyticsResult) {
    println!("Dropout vs. retained averages:");
    println!("  {:<24} {:>12} {:>12}", "Feature", "Dropout", "Retained");
    println!("  {}", "-".repeat(50));
    for cmp in &result.comparisons {
        println!(
            "  {:<24} {:>12.2} {:>12.2}",
            cmp.feature.name(),
            cmp.dropout_avg,
            cmp.non_dropout_avg
        );
    }
}

fn print_correlations(result: &AnalyticsResult) {
    println!("Correlation with dropout (|r|, strongest first):");
    for (rank, corr) in result.correlations.iter().enumerate() {
        println!(
            "  {:>2}. {:<24} {:>6.3}",
            rank + 1,
            corr.feature.name(),
            corr.correlation
        );
    }
}

fn print_boxplots(result: &AnalyticsResult) {
    println!("Boxplot summaries (min / q1 / median / q3 / max):");
    for boxplot in &result.boxplots {
        println!("  {}:", boxplot.feature.name());
        println!("    {:<10} {}", "Retained", format_summary(boxplot.non_dropout));
        println!("    {:<10} {}", "Dropout", format_summary(boxplot.dropout));
    }
}

fn print_risk(result: &AnalyticsResult) {
    println!("Risk categories:");
    println!("  {:<16} {:>8} {:>8}", "Category", "Students", "Dropouts");
    println!("  {}", "-".repeat(34));
    for group in &result.risk {
        println!(
            "  {:<16} {:>8} {:>8}",
            group.category.to_string(),
            group.count,
            group.dropouts
        );
    }
}

fn format_summary(summary: Option<FiveNumberSummary>) -> String {
    summary.map_or_else(
        || "N/A".to_owned(),
        |s| {
            format!(
                "{:.2} / {:.2} / {:.2} / {:.2} / {:.2}",
                s.min, s.q1, s.median, s.q3, s.max
            )
        },
    )
}
