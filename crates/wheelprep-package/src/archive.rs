//! Zip archive assembly.

use std::fs::File;
use std::io::{self, Seek, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use wheelprep_core::ensure_directory;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::PackageError;
use crate::request::{DIST_DIR, ENTRYPOINT, PackageRequest};

/// Build `dist/<addon_name>.zip` and return its path.
///
/// Inputs are checked before anything is written; a failure after that
/// point discards the staged file and leaves any previous archive intact.
pub fn build_archive(request: &PackageRequest) -> Result<PathBuf, PackageError> {
    validate_addon_name(&request.addon_name)?;

    let entrypoint = request.entrypoint();
    if !entrypoint.is_file() {
        return Err(PackageError::MissingEntrypoint(entrypoint));
    }
    if request.include_wheels && !request.wheels_dir.is_dir() {
        return Err(PackageError::WheelsDirMissing(request.wheels_dir.clone()));
    }

    let dist_dir = request.root.join(DIST_DIR);
    ensure_directory(&dist_dir)?;

    let staged = NamedTempFile::new_in(&dist_dir).map_err(|source| PackageError::Io {
        path: dist_dir.clone(),
        source,
    })?;

    let mut zip = ZipWriter::new(staged);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    add_file(
        &mut zip,
        &format!("{}/{ENTRYPOINT}", request.addon_name),
        &entrypoint,
        options,
    )?;

    if request.include_wheels {
        let count = add_tree(
            &mut zip,
            &format!("{}/wheels", request.addon_name),
            &request.wheels_dir,
            options,
        )?;
        info!(count, wheels_dir = %request.wheels_dir.display(), "Added wheels to archive");
    }

    let staged = zip.finish()?;

    let archive_path = request.archive_path();
    if archive_path.exists() {
        warn!(path = %archive_path.display(), "Replacing existing archive");
    }
    staged
        .persist(&archive_path)
        .map_err(|e| PackageError::Io {
            path: archive_path.clone(),
            source: e.error,
        })?;

    Ok(archive_path)
}

fn validate_addon_name(name: &str) -> Result<(), PackageError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(PackageError::InvalidAddonName(name.to_string())),
    }
}

fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &str,
    source: &Path,
    options: SimpleFileOptions,
) -> Result<(), PackageError> {
    debug!(entry, source = %source.display(), "Adding archive entry");
    let io_err = |source_err| PackageError::Io {
        path: source.to_path_buf(),
        source: source_err,
    };

    let mut file = File::open(source).map_err(io_err)?;
    zip.start_file(entry, options)?;
    io::copy(&mut file, zip).map_err(io_err)?;
    Ok(())
}

/// Add every regular file below `dir` under `prefix`, in sorted order.
/// Directories themselves are not stored as entries.
fn add_tree<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    prefix: &str,
    dir: &Path,
    options: SimpleFileOptions,
) -> Result<usize, PackageError> {
    let mut count = 0;
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|source| PackageError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        let name = format!("{prefix}/{}", archive_name(relative));
        add_file(zip, &name, entry.path(), options)?;
        count += 1;
    }
    Ok(count)
}

/// Zip entry names always use forward slashes.
fn archive_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
