// RegPlot - platform/fs.rs
//
// Filesystem access for the input log and export destination.

use crate::util::error::{ExportError, ParseError};
use std::fs::File;
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

/// Read the whole log into memory.
///
/// The content must be valid UTF-8; anything else is reported as an
/// encoding error rather than silently replaced.
pub fn read_log_file(path: &Path) -> Result<String, ParseError> {
    let bytes = std::fs::read(path).map_err(|e| ParseError::Io {
        file: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Log file read");

    String::from_utf8(bytes).map_err(|e| ParseError::InvalidEncoding {
        file: path.to_path_buf(),
        source: e,
    })
}

/// Write an export to `path` through `write`.
///
/// Output goes to a sibling `.tmp` file that is renamed over `path` only
/// once `write` and the final flush succeed. On any failure the temp file
/// is removed and an existing `path` is left untouched.
pub fn write_export_file<F>(path: &Path, write: F) -> Result<usize, ExportError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<usize, ExportError>,
{
    let tmp = temp_path(path);
    let result = write_and_rename(&tmp, path, write);
    if result.is_err() {
        if let Err(e) = std::fs::remove_file(&tmp) {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %tmp.display(), error = %e, "Cannot remove partial export");
            }
        }
    }
    result
}

fn write_and_rename<F>(tmp: &Path, path: &Path, write: F) -> Result<usize, ExportError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<usize, ExportError>,
{
    let io_err = |p: &Path| {
        let p = p.to_path_buf();
        move |source| ExportError::Io { path: p, source }
    };

    let mut writer = File::create(tmp).map(BufWriter::new).map_err(io_err(tmp))?;
    let rows = write(&mut writer)?;
    writer
        .into_inner()
        .map_err(|e| e.into_error())
        .and_then(|file| file.sync_all())
        .map_err(io_err(tmp))?;

    std::fs::rename(tmp, path).map_err(io_err(path))?;
    Ok(rows)
}

/// `out.csv` -> `out.csv.tmp`, in the same directory so the rename stays
/// on one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
