use crate::result::Result;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the directory to package: the given path, or the directory
/// containing the running executable when none is given
pub fn resolve_source_dir(path: Option<&Path>) -> Result<PathBuf> {
    let base_path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let exe = std::env::current_exe()?;
            exe.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."))
        }
    };

    let source_dir = fs::canonicalize(&base_path)?;

    if !source_dir.is_dir() {
        return Err(crate::error::Error::NotADirectory(
            source_dir.display().to_string(),
        ));
    }

    Ok(source_dir)
}

/// File name of the running executable, used as the self-exclusion name
pub fn self_name() -> OsString {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_os_string()))
        .unwrap_or_else(|| OsString::from(env!("CARGO_PKG_NAME")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_source_dir() {
        let temp_dir = TempDir::new().unwrap();
        let resolved = resolve_source_dir(Some(temp_dir.path())).unwrap();
        assert!(resolved.is_dir());
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_resolve_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("plain.txt");
        fs::write(&file_path, b"not a directory").unwrap();

        let result = resolve_source_dir(Some(&file_path));
        assert!(matches!(
            result,
            Err(crate::error::Error::NotADirectory(_))
        ));
    }

    #[test]
    fn test_resolve_missing_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-dir");
        assert!(resolve_source_dir(Some(&missing)).is_err());
    }

    #[test]
    fn test_self_name_is_nonempty() {
        assert!(!self_name().is_empty());
    }
}
