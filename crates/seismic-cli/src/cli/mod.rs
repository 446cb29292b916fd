mod commands;
mod config;
mod dispatch;
mod helpers;

use clap::Parser;
use config::GlobalArgs;
use dispatch::{PROGRAM_NAME, command_alias_from_program_name};
use seismic_core::domain::SeismicError;

pub fn run_from_env() -> i32 {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| PROGRAM_NAME.to_string());
    let remaining: Vec<String> = args.collect();

    match run_with_program_name(&program_name, remaining) {
        Ok(code) => code,
        Err(error) => {
            let seismic_error = error.as_seismic_error();
            eprintln!("{}", seismic_error.diagnostic_line());
            if let Some(summary_line) = seismic_error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            seismic_error.exit_code()
        }
    }
}

fn run_with_program_name(program_name: &str, args: Vec<String>) -> Result<i32, CliError> {
    let alias_command = command_alias_from_program_name(program_name);
    let full_args = std::iter::once(PROGRAM_NAME.to_string())
        .chain(alias_command.map(str::to_string))
        .chain(args)
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            config::init_logging(&cli.global)?;
            dispatch_parsed(&cli.global, cli.command)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "seismic-design",
    version,
    about = "Seismic design coefficients from tabulated fault spectra"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Interpolate SDS, SD1, SMS and SM1 for a fault and distance
    #[command(name = "get_seismic_coefficients", visible_alias = "coefficients")]
    Coefficients(commands::CoefficientsArgs),
    /// Derive horizontal seismic force coefficients (Kx or Ky)
    #[command(name = "seismic_kx", visible_alias = "kx")]
    Kx(commands::KxArgs),
    /// Derive the design force report (V and VM)
    #[command(name = "seismic_report", visible_alias = "report")]
    Report(commands::ReportArgs),
    /// List tabulated faults with their distance spans
    Faults,
}

fn dispatch_parsed(global: &GlobalArgs, command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Coefficients(args) => commands::run_coefficients_command(global, args),
        CliCommand::Kx(args) => commands::run_kx_command(global, args),
        CliCommand::Report(args) => commands::run_report_command(global, args),
        CliCommand::Faults => commands::run_faults_command(global),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(SeismicError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_seismic_error(&self) -> SeismicError {
        match self {
            Self::Usage(message) => SeismicError::usage(message.trim_end()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => SeismicError::internal(format!("{error:#}")),
        }
    }
}

impl From<SeismicError> for CliError {
    fn from(error: SeismicError) -> Self {
        Self::Compute(error)
    }
}

#[cfg(test)]
mod tests {
    use super::{CliError, PROGRAM_NAME, run_with_program_name};
    use seismic_core::domain::SeismicErrorKind;

    fn run<I, S>(args: I) -> Result<i32, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        run_with_program_name(PROGRAM_NAME, args.into_iter().map(Into::into).collect())
    }

    #[test]
    fn missing_subcommand_is_a_usage_error() {
        let error = run(Vec::<String>::new()).expect_err("a subcommand is required");
        assert!(matches!(error, CliError::Usage(_)));
        assert_eq!(error.as_seismic_error().kind(), SeismicErrorKind::Usage);
        assert_eq!(error.as_seismic_error().exit_code(), 2);
    }

    #[test]
    fn help_exits_successfully() {
        assert_eq!(run(["--help"]).expect("help should render"), 0);
    }

    #[test]
    fn non_numeric_distance_is_rejected_by_the_parser() {
        let error = run([
            "get_seismic_coefficients",
            "--fault-name",
            "A",
            "--distance-km",
            "far",
        ])
        .expect_err("distance must be numeric");
        assert!(matches!(error, CliError::Usage(_)));
    }
}
