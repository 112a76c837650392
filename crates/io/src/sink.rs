// Result file sink
//
// The destination is opened in `prepare`, before any search work, and written
// in place by `commit`. Symlinks, devices and existing files are written
// through, keeping their mode and owner. A destination that did not exist is
// only created again at commit time, so an abandoned or killed run leaves the
// directory as it found it.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::IoError;

pub struct ResultSink {
    destination: PathBuf,
    /// Open handle on a destination that already existed.
    file: Option<File>,
}

impl ResultSink {
    /// Check that `destination` can be opened for writing, without truncating it.
    ///
    /// Call before searching so an unwritable destination fails fast.
    pub fn prepare(destination: &Path) -> Result<Self, IoError> {
        if destination.is_dir() {
            return Err(output_unavailable(destination, "is a directory".into()));
        }

        let existed = fs::symlink_metadata(destination).is_ok();
        let file = open_for_write(destination)?;
        let file = if existed {
            Some(file)
        } else {
            drop(file);
            fs::remove_file(destination).map_err(|e| output_unavailable(destination, e.to_string()))?;
            None
        };

        debug!("result destination {} is writable (existing: {existed})", destination.display());
        Ok(Self {
            destination: destination.to_path_buf(),
            file,
        })
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Replace the destination's contents with `matches` as one decimal line.
    pub fn commit(self, matches: usize) -> Result<PathBuf, IoError> {
        let destination = self.destination;
        let unavailable = |e: std::io::Error| output_unavailable(&destination, e.to_string());

        let mut file = match self.file {
            Some(file) => file,
            None => open_for_write(&destination)?,
        };
        // Devices and pipes cannot be truncated.
        if file.metadata().map_err(unavailable)?.is_file() {
            file.set_len(0).map_err(unavailable)?;
        }
        writeln!(file, "{matches}").map_err(unavailable)?;
        file.flush().map_err(unavailable)?;

        debug!("wrote {matches} to {}", destination.display());
        Ok(destination)
    }
}

fn open_for_write(destination: &Path) -> Result<File, IoError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .open(destination)
        .map_err(|e| output_unavailable(destination, e.to_string()))
}

fn output_unavailable(destination: &Path, reason: String) -> IoError {
    IoError::OutputUnavailable {
        path: destination.to_path_buf(),
        reason,
    }
}
