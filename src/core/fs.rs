//! Owner-only file writes.
//!
//! Files are staged in a temporary file next to their destination (created
//! `0600` by `tempfile`) and flushed. Only a commit renames them into place,
//! so a failed or abandoned write never touches the final path.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::trace;

use crate::error::{Result, WriteError};

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    trace!(path = %dir.display(), "creating directory");
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Make `dir` absolute against the working directory.
pub fn absolute(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(dir))
}

/// Owner-only file written next to its target but not yet renamed into
/// place. Dropping it removes the staged file and leaves the target alone.
#[derive(Debug)]
pub struct Staged {
    file: NamedTempFile,
    target: PathBuf,
}

impl Staged {
    /// Final path the file is renamed to on commit.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Rename into place, replacing any existing file at the target.
    pub fn commit(self) -> Result<PathBuf> {
        let Staged { file, target } = self;

        file.persist(&target).map_err(|e| WriteError::Write {
            path: target.clone(),
            source: e.error,
        })?;
        restrict(&target)?;

        trace!(path = %target.display(), "committed private file");
        Ok(target)
    }
}

/// Write `contents` to a temporary file in the directory of `path`, flushed
/// and owner-only, without touching `path` itself.
pub fn stage_private(path: &Path, contents: &[u8]) -> Result<Staged> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    ensure_dir(&parent)?;

    let write_err = |source: std::io::Error| WriteError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(&parent).map_err(write_err)?;
    restrict(file.path())?;
    file.write_all(contents).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;

    trace!(path = %path.display(), len = contents.len(), "staged private file");
    Ok(Staged {
        file,
        target: path.to_path_buf(),
    })
}

/// Restrict `path` to owner read/write.
#[cfg(unix)]
pub fn restrict(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    use crate::core::constants::SECRET_FILE_MODE;

    fs::set_permissions(path, fs::Permissions::from_mode(SECRET_FILE_MODE)).map_err(
        |source| WriteError::Permissions {
            path: path.to_path_buf(),
            source,
        },
    )?;
    Ok(())
}

#[cfg(not(unix))]
pub fn restrict(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_stage_private_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a/b/app.env");

        stage_private(&path, b"A=1\n").unwrap().commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "A=1\n");
    }

    #[test]
    fn test_stage_private_replaces_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("app.env");
        fs::write(&path, "OLD=1\n").unwrap();

        stage_private(&path, b"NEW=1\n").unwrap().commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "NEW=1\n");
        // only the destination remains, no staged leftovers
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_stage_private_sets_owner_only_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("app.env");
        fs::write(&path, "OLD=1\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        stage_private(&path, b"NEW=1\n").unwrap().commit().unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_dropped_stage_leaves_target_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("b.secret");
        fs::write(&path, "old").unwrap();

        let staged = stage_private(&path, b"new").unwrap();
        assert_eq!(staged.target(), path.as_path());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 2);
        drop(staged);

        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_commit_replaces_target() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("b.secret");
        fs::write(&path, "old").unwrap();

        let staged = stage_private(&path, b"new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");

        assert_eq!(staged.commit().unwrap(), path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_absolute_joins_relative_paths() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute(Path::new("out")).unwrap(), cwd.join("out"));
        assert_eq!(absolute(Path::new("/srv")).unwrap(), PathBuf::from("/srv"));
    }
}
