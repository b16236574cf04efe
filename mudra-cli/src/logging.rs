// mudra-cli/src/logging.rs
//
// Logging-adjacent helpers for the CLI. The logging implementation itself
// uses the standard `log` crate with `env_logger` as the backend,
// configured in main.rs via the RUST_LOG environment variable.

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// Used to generate unique file names for run reports.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
