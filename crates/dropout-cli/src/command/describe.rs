use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use dropout_stats::descriptive::DescriptiveStats;
use dropout_analytics::{
    Feature,
    correlation::{self, CorrelationMatrix},
    describe::{self, FeatureDescription},
};

use crate::store::RecordStore;

#[derive(Debug, Clone, Args)]
pub(crate) struct DescribeArg {
    /// Path to the student records file (.csv or .json)
    pub records: PathBuf,

    /// Feature IDs to describe (comma-separated, defaults to all features)
    #[arg(long, value_delimiter = ',')]
    pub features: Vec<Feature>,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let features = if arg.features.is_empty() {
        Feature::ALL.to_vec()
    } else {
        arg.features.clone()
    };
    let store = RecordStore::load(&arg.records)?;
    let descriptions = describe::describe(store.records(), &features)
        .with_context(|| format!("Failed to describe {}", store.source().display()))?;
    let outcome = describe::describe_outcome(store.records())
        .with_context(|| format!("Failed to describe {}", store.source().display()))?;
    let matrix = correlation::correlation_matrix(store.records(), &features);

    println!("Source: {}\n", store.describe_source());
    print_descriptions(&descriptions, &outcome);
    println!();
    print_matrix(&matrix);
    Ok(())
}

fn print_descriptions(descriptions: &[FeatureDescription], outcome: &DescriptiveStats) {
    println!(
        "  {:<24} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Feature", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max"
    );
    println!("  {}", "-".repeat(110));
    let rows = descriptions
        .iter()
        .map(|d| (d.feature.id(), &d.stats))
        .chain([("dropout", outcome)]);
    for (label, s) in rows {
        println!(
            "  {:<24} {:>7} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3}",
            label, s.count, s.mean, s.std_dev, s.min, s.p25, s.median, s.p75, s.max
        );
    }
}

fn print_matrix(matrix: &CorrelationMatrix) {
    println!("Correlation matrix:");
    print!("  {:<24}", "");
    for (i, _) in matrix.labels.iter().enumerate() {
        print!(" {:>7}", format!("[{i}]"));
    }
    println!();
    for (i, (label, row)) in matrix.labels.iter().zip(&matrix.values).enumerate() {
        print!("  {:<24}", format!("[{i}] {label}"));
        for value in row {
            print!(" {value:>7.3}");
        }
        println!();
    }
}
