use clap::{Parser, Subcommand};

use self::{record::RecordArg, report::ReportArg};

mod record;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print statistics for every benchmark sample file (default)
    Report(#[clap(flatten)] ReportArg),
    /// Append a measurement to a benchmark sample file
    Record(#[clap(flatten)] RecordArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Report(ReportArg::default())) {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Record(arg) => record::run(&arg)?,
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
    fn test_no_subcommand_defaults_to_report() {
        let args = CommandArgs::try_parse_from(["gasstat"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_record_arguments() {
        let args = CommandArgs::try_parse_from([
            "gasstat",
            "record",
            "product",
            "price_gas_used",
            "23512",
        ])
        .unwrap();
        assert!(matches!(args.mode, Some(Mode::Record(_))));
    }

    #[test]
    fn test_report_rejects_unknown_category() {
        let result = CommandArgs::try_parse_from(["gasstat", "report", "--category", "auction"]);
        assert!(result.is_err());
    }
}
