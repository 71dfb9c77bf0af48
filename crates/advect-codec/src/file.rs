//! Filesystem wrappers around the codec.
//!
//! [`save`] never exposes a half-written field: it encodes into a
//! temporary file next to the target, syncs it, and renames it over the
//! target. If anything fails the temporary file is removed and the
//! target keeps its previous contents. A replaced file keeps its
//! permissions.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use advect_core::{FieldError, Grid, FILE_SIZE};
use tracing::debug;

use crate::codec::{decode, write_grid};

/// Read and decode the field stored at `path`.
///
/// Trailing bytes beyond one field are ignored.
///
/// # Errors
///
/// [`FieldError::Io`] if the file cannot be read, [`FieldError::Format`]
/// if it is shorter than one field.
pub fn load(path: impl AsRef<Path>) -> Result<Grid, FieldError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read field file");
    if bytes.len() > FILE_SIZE {
        debug!(
            trailing = bytes.len() - FILE_SIZE,
            "ignoring bytes past the end of the field"
        );
    }
    decode(&bytes)
}

/// Encode `grid` and atomically replace the file at `path`.
///
/// # Errors
///
/// [`FieldError::Io`] if the temporary file cannot be created, written,
/// synced, or renamed into place.
pub fn save(path: impl AsRef<Path>, grid: &Grid) -> Result<(), FieldError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".advect-").suffix(".tmp");
    // A fresh file gets the same mode `File::create` would give it.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir)?;
    if let Some(existing) = fs::metadata(path).ok().filter(|m| m.is_file()) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    {
        let mut w = BufWriter::new(tmp.as_file_mut());
        write_grid(&mut w, grid)?;
        w.flush()?;
    }
    tmp.as_file().sync_all()?;
    debug!(tmp = %tmp.path().display(), bytes = FILE_SIZE, "staged field");

    tmp.persist(path).map_err(|e| FieldError::Io(e.error))?;
    debug!(path = %path.display(), "wrote field file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use advect_core::Vector3;
    use advect_test_utils::random_grid;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wind.advect");
        let grid = random_grid(1);

        save(&path, &grid).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), FILE_SIZE as u64);
        assert_eq!(load(&path).unwrap(), grid);
        assert_eq!(entries(dir.path()), vec!["wind.advect".to_string()]);
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wind.advect");
        fs::write(&path, vec![0xFF; FILE_SIZE * 2]).unwrap();

        let grid = Grid::filled(Vector3::from_xy(1.0, -1.0));
        save(&path, &grid).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), FILE_SIZE as u64);
        assert_eq!(load(&path).unwrap(), grid);
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn save_keeps_permissions_of_replaced_file() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wind.advect");
        for bits in [0o644, 0o640, 0o600] {
            fs::write(&path, b"old").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(bits)).unwrap();

            save(&path, &random_grid(2)).unwrap();
            assert_eq!(mode(&path), bits, "mode {bits:o} not kept");
        }
    }

    #[cfg(unix)]
    #[test]
    fn fresh_save_uses_default_create_mode() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain");
        fs::write(&plain, b"").unwrap();
        let path = dir.path().join("fresh.advect");

        save(&path, &Grid::default()).unwrap();
        assert_eq!(mode(&path), mode(&plain));
    }

    #[test]
    fn failed_save_leaves_target_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // The target is a directory, so the final rename must fail.
        let target = dir.path().join("occupied");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), b"x").unwrap();

        let err = save(&target, &Grid::default()).unwrap_err();
        assert!(matches!(err, FieldError::Io(_)), "got {err:?}");
        assert!(target.is_dir());
        assert_eq!(entries(dir.path()), vec!["occupied".to_string()]);
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("wind.advect");
        assert!(matches!(
            save(&path, &Grid::default()),
            Err(FieldError::Io(_))
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("absent.advect")).unwrap_err();
        match err {
            FieldError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn load_short_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.advect");
        fs::write(&path, vec![0u8; 100]).unwrap();
        assert!(matches!(
            load(&path),
            Err(FieldError::Format { found: 100, .. })
        ));
    }
}
