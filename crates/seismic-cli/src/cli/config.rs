use super::CliError;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

pub(super) const DEFAULT_FAULT_DATA: &str = "data/sample_fault_data.json";
pub(super) const FAULT_DATA_ENV: &str = "SEISMIC_FAULT_DATA";

static LOGGING: OnceLock<Result<(), String>> = OnceLock::new();

#[derive(clap::Args, Debug, Clone)]
pub(super) struct GlobalArgs {
    /// Fault table JSON (fault name -> distance -> SDS/SD1/SMS/SM1)
    #[arg(long, global = true, env = FAULT_DATA_ENV, default_value = DEFAULT_FAULT_DATA)]
    pub(super) fault_data: PathBuf,

    /// Pretty-print the JSON payload
    #[arg(long, global = true)]
    pub(super) pretty: bool,

    /// Exit with the error's code when a request is rejected
    #[arg(long, global = true)]
    pub(super) fail_on_error: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub(super) log_level: String,
}

/// Installs the stderr subscriber on the first call; later calls return
/// the first call's outcome. `RUST_LOG` wins over `--log-level`.
pub(super) fn init_logging(args: &GlobalArgs) -> Result<(), CliError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.log_level).map_err(|error| {
            CliError::Usage(format!("invalid --log-level '{}': {error}", args.log_level))
        })?,
    };

    LOGGING
        .get_or_init(move || {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|error| error.to_string())
        })
        .clone()
        .map_err(|error| anyhow::anyhow!("failed to initialise logging: {error}"))?;
    Ok(())
}
