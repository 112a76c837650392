//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract. Scripts rely on them.
//!
//! # Exit Codes
//!
//! | Code | Description                                          |
//! |------|------------------------------------------------------|
//! | 0    | Success (result file written)                        |
//! | 1    | General error (unspecified)                          |
//! | 2    | Usage error (wrong argument count, unknown option)   |
//! | 3    | Input unavailable (sightings or signatures file)     |
//! | 4    | Output unavailable (result file)                     |
//! | 5    | No search method selected (stdin closed)             |
//! | 6    | Invalid configuration (settings file or environment) |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into `CliError`

use sightings_io::IoError;

/// Success - result file written.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments. Matches clap's own usage exit code.
pub const EXIT_USAGE: u8 = 2;

/// A sightings or signatures file cannot be opened or read.
pub const EXIT_INPUT_UNAVAILABLE: u8 = 3;

/// The result file cannot be opened or written.
pub const EXIT_OUTPUT_UNAVAILABLE: u8 = 4;

/// Standard input closed before a valid search method was chosen.
pub const EXIT_NO_SELECTION: u8 = 5;

/// Settings file unreadable or invalid, or bad `SIGHTINGS_STRATEGY`.
pub const EXIT_CONFIG: u8 = 6;

/// Map an IoError to its exit code.
pub fn io_exit_code(err: &IoError) -> u8 {
    match err {
        IoError::InputUnavailable { .. } => EXIT_INPUT_UNAVAILABLE,
        IoError::OutputUnavailable { .. } => EXIT_OUTPUT_UNAVAILABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let mut codes = vec![
            EXIT_SUCCESS,
            EXIT_ERROR,
            EXIT_USAGE,
            EXIT_INPUT_UNAVAILABLE,
            EXIT_OUTPUT_UNAVAILABLE,
            EXIT_NO_SELECTION,
            EXIT_CONFIG,
        ];
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn io_errors_map_by_direction() {
        let input = IoError::InputUnavailable { path: "a".into(), reason: "gone".into() };
        let output = IoError::OutputUnavailable { path: "b".into(), reason: "gone".into() };
        assert_eq!(io_exit_code(&input), EXIT_INPUT_UNAVAILABLE);
        assert_eq!(io_exit_code(&output), EXIT_OUTPUT_UNAVAILABLE);
    }
}
