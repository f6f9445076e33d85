use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, describe::DescribeArg, report::ReportArg};

mod analyze;
mod describe;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute all analytics and write them as JSON
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Print a human-readable analytics report
    Report(#[clap(flatten)] ReportArg),
    /// Print descriptive statistics and the correlation matrix
    Describe(#[clap(flatten)] DescribeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Describe(arg) => describe::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_describe_features_are_comma_separated() {
        let args = CommandArgs::try_parse_from([
            "dropout",
            "describe",
            "data.csv",
            "--features",
            "gpa,attendance",
        ])
        .unwrap();
        let Mode::Describe(arg) = args.mode else {
            panic!("expected describe mode");
        };
        assert_eq!(arg.features.len(), 2);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(CommandArgs::try_parse_from(["dropout"]).is_err());
    }
}
