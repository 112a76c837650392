// Whitespace-separated integer loaders

use std::path::Path;
use std::str::FromStr;

use log::{info, warn};
use sightings_engine::{Signature, Sighting};

use crate::error::IoError;

/// Load `speed brightness` pairs from `path`.
///
/// Reading stops at end of input or at the first token that is not an `i32`,
/// after taking any integer that token starts with.
/// A trailing unpaired value is dropped.
pub fn read_sightings(path: &Path) -> Result<Vec<Sighting>, IoError> {
    let content = read_input(path)?;
    let sightings = parse_sightings(&content, path);
    info!("loaded {} sightings from {}", sightings.len(), path.display());
    Ok(sightings)
}

/// Load query signatures from `path`. Same stop rules as [`read_sightings`].
pub fn read_signatures(path: &Path) -> Result<Vec<Signature>, IoError> {
    let content = read_input(path)?;
    let signatures = parse_signatures(&content, path);
    info!("loaded {} signatures from {}", signatures.len(), path.display());
    Ok(signatures)
}

pub fn parse_sightings(content: &str, source: &Path) -> Vec<Sighting> {
    let values: Vec<i32> = leading_integers(content, source);
    if values.len() % 2 != 0 {
        warn!("{}: dropping unpaired trailing value {}", source.display(), values[values.len() - 1]);
    }
    values
        .chunks_exact(2)
        .map(|pair| Sighting::new(pair[0], pair[1]))
        .collect()
}

pub fn parse_signatures(content: &str, source: &Path) -> Vec<Signature> {
    leading_integers(content, source)
}

/// Invalid UTF-8 is replaced rather than rejected; it ends parsing like any
/// other malformed token.
fn read_input(path: &Path) -> Result<String, IoError> {
    let bytes = std::fs::read(path).map_err(|e| IoError::InputUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse integers until the first token that is not one. A token that starts
/// with an integer (`5abc`) yields that integer and then ends parsing.
fn leading_integers<T: FromStr>(content: &str, source: &Path) -> Vec<T> {
    let mut values = Vec::new();
    for (index, token) in content.split_whitespace().enumerate() {
        if let Ok(value) = token.parse::<T>() {
            values.push(value);
            continue;
        }

        let prefix = integer_prefix(token);
        if let Ok(value) = prefix.parse::<T>() {
            values.push(value);
        }
        warn!(
            "{}: stopped reading at token {} ({token:?} is not a valid integer)",
            source.display(),
            index + 1
        );
        break;
    }
    values
}

/// Optional sign followed by ASCII digits.
fn integer_prefix(token: &str) -> &str {
    let sign = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign..].bytes().take_while(u8::is_ascii_digit).count();
    &token[..sign + digits]
}
