use super::CliError;
use super::config::GlobalArgs;
use anyhow::Context;
use seismic_core::domain::{SeismicError, SeismicResult};
use seismic_core::fault_table::FaultTable;
use seismic_core::modules::render_outcome;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(super) fn resolve_cli_path(working_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    }
}

/// Loads the fault table named by `--fault-data`. Any failure here is fatal.
pub(super) fn load_fault_table(global: &GlobalArgs) -> Result<FaultTable, CliError> {
    let working_dir =
        std::env::current_dir().context("failed to read current working directory")?;
    let path = resolve_cli_path(&working_dir, &global.fault_data);
    tracing::debug!(path = %path.display(), "loading fault table");
    let table = FaultTable::load(&path).map_err(SeismicError::from)?;
    Ok(table)
}

/// Writes the payload to stdout. Rejected requests still print their
/// `{"error": ...}` payload and only change the exit code under
/// `--fail-on-error`.
pub(super) fn emit_outcome<T: Serialize>(
    global: &GlobalArgs,
    outcome: &SeismicResult<T>,
) -> Result<i32, CliError> {
    let rendered =
        render_outcome(outcome, global.pretty).context("failed to serialize response payload")?;
    write_stdout(&rendered)?;

    match outcome {
        Err(error) if global.fail_on_error => {
            eprintln!("{}", error.diagnostic_line());
            Ok(error.exit_code())
        }
        _ => Ok(0),
    }
}

pub(super) fn write_stdout(payload: &str) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{payload}").context("failed to write response to stdout")?;
    handle
        .flush()
        .context("failed to flush response to stdout")?;
    Ok(())
}
