use seismic_core::domain::Operation;
use std::path::Path;

pub(super) const PROGRAM_NAME: &str = "seismic-design";

pub(super) const OPERATION_COMMANDS: [Operation; 3] = [
    Operation::SpectralCoefficients,
    Operation::HorizontalCoefficients,
    Operation::DesignReport,
];

pub(super) fn operation_for_command(command: &str) -> Option<Operation> {
    OPERATION_COMMANDS
        .iter()
        .copied()
        .find(|operation| operation.as_str() == command)
}

/// Maps a busybox-style executable name (`seismic_kx`, `seismic_report.exe`,
/// ...) to the subcommand it should run.
pub(super) fn command_alias_from_program_name(program_name: &str) -> Option<&'static str> {
    let executable_name = Path::new(program_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(program_name);
    let normalized = executable_name
        .strip_suffix(".exe")
        .unwrap_or(executable_name);

    if normalized == PROGRAM_NAME {
        return None;
    }

    operation_for_command(normalized).map(Operation::as_str)
}
