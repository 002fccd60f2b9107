//! Persisting generated sources.
//!
//! Both artifacts are staged as temporary files next to their destination
//! and only moved into place once both are fully written. A header that
//! already exists is copied aside first and put back if the implementation
//! cannot be persisted, so a failed run leaves the previous pair as it was.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::{Builder, NamedTempFile, TempPath};
use tracing::{debug, info, warn};

use crate::codegen::GeneratedSources;
use crate::error::{CitygenError, Result};

/// Where the two artifacts of a run were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenArtifacts {
    pub header: PathBuf,
    pub implementation: PathBuf,
}

/// Implementation file path for `header_path`: same directory, the
/// header's extension replaced by `suffix`.
///
/// ```
/// use std::path::Path;
/// use citygen::output::implementation_path;
///
/// let path = implementation_path(Path::new("boards/city_data.h"), "_impl.cc").unwrap();
/// assert_eq!(path, Path::new("boards/city_data_impl.cc"));
/// ```
pub fn implementation_path(header_path: &Path, suffix: &str) -> Result<PathBuf> {
    let stem = header_path.file_stem().ok_or_else(|| {
        CitygenError::Persistence(format!(
            "Output path '{}' has no file name",
            header_path.display()
        ))
    })?;
    Ok(header_path.with_file_name(format!("{}{}", stem.to_string_lossy(), suffix)))
}

/// Base name of the header as referenced by the implementation's `#include`.
///
/// Names that cannot appear inside a quoted include are rejected.
pub fn include_name(header_path: &Path) -> Result<String> {
    let name = header_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CitygenError::Persistence(format!(
                "Output path '{}' has no file name",
                header_path.display()
            ))
        })?;

    if name.chars().any(|c| c == '"' || c == '\\' || c.is_control()) {
        return Err(CitygenError::Persistence(format!(
            "Output file name {:?} cannot be used in an #include",
            name
        )));
    }

    Ok(name)
}

/// Write both artifacts, all or nothing.
pub fn write_sources(
    sources: &GeneratedSources,
    header_path: &Path,
    impl_suffix: &str,
) -> Result<WrittenArtifacts> {
    let impl_path = implementation_path(header_path, impl_suffix)?;

    let staged_header = stage(header_path, &sources.header)?;
    let staged_impl = stage(&impl_path, &sources.implementation)?;
    let backup = back_up(header_path)?;

    persist(staged_header, header_path)?;
    if let Err(e) = persist(staged_impl, &impl_path) {
        return Err(match roll_back(header_path, backup) {
            Ok(()) => e,
            Err(rollback) => CitygenError::Persistence(format!("{}; {}", e, rollback)),
        });
    }

    info!(
        header = %header_path.display(),
        implementation = %impl_path.display(),
        "generated sources written"
    );

    Ok(WrittenArtifacts {
        header: header_path.to_path_buf(),
        implementation: impl_path,
    })
}

/// Copy an existing header to a temporary path beside it.
///
/// The copy is deleted when the returned path is dropped.
fn back_up(header_path: &Path) -> Result<Option<TempPath>> {
    if !header_path.is_file() {
        return Ok(None);
    }

    let dir = destination_dir(header_path);
    let backup = Builder::new()
        .prefix(".citygen-backup")
        .tempfile_in(dir)
        .map_err(|e| CitygenError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?
        .into_temp_path();

    fs::copy(header_path, &backup).map_err(|e| CitygenError::Io {
        path: header_path.to_path_buf(),
        source: e,
    })?;

    debug!(header = %header_path.display(), "backed up existing header");
    Ok(Some(backup))
}

/// Undo a persisted header: restore the previous one, or remove the new one
/// if there was none.
fn roll_back(header_path: &Path, backup: Option<TempPath>) -> std::result::Result<(), String> {
    let restored = match backup {
        Some(backup) => backup
            .persist(header_path)
            .map_err(|e| format!("restoring '{}' failed: {}", header_path.display(), e.error)),
        None => fs::remove_file(header_path)
            .map_err(|e| format!("removing '{}' failed: {}", header_path.display(), e)),
    };

    if let Err(reason) = &restored {
        warn!(header = %header_path.display(), "{}", reason);
    }
    restored
}

fn destination_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Write `contents` to a temporary file in the destination's directory.
fn stage(destination: &Path, contents: &str) -> Result<NamedTempFile> {
    let dir = destination_dir(destination);

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            CitygenError::Persistence(format!(
                "Failed to create directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| CitygenError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let written = staged
        .write_all(contents.as_bytes())
        .and_then(|_| staged.flush())
        .and_then(|_| readable_by_all(&staged));
    if let Err(e) = written {
        return Err(CitygenError::Io {
            path: staged.path().to_path_buf(),
            source: e,
        });
    }

    debug!(destination = %destination.display(), bytes = contents.len(), "staged artifact");
    Ok(staged)
}

/// Temporary files are created owner-only; generated sources should not be.
#[cfg(unix)]
fn readable_by_all(staged: &NamedTempFile) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    staged
        .as_file()
        .set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn readable_by_all(_staged: &NamedTempFile) -> std::io::Result<()> {
    Ok(())
}

fn persist(staged: NamedTempFile, destination: &Path) -> Result<()> {
    staged.persist(destination).map_err(|e| {
        CitygenError::Persistence(format!(
            "Failed to write '{}': {}",
            destination.display(),
            e.error
        ))
    })?;
    Ok(())
}
