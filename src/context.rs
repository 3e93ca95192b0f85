use crate::error::Error;
use crate::result::Result;
use std::ffi::OsString;
use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (print each entry as it is added)
    pub verbose: bool,

    /// Directory to package
    pub source_dir: PathBuf,

    /// Parent of the source directory; the archive is written here
    pub parent_dir: PathBuf,

    /// Base name of the source directory; becomes the archive stem and
    /// the prefix of every entry name
    pub name: String,

    /// File name excluded from the archive (the tool's own file)
    pub exclude: OsString,
}

impl Context {
    pub fn new(source_dir: PathBuf, exclude: OsString, verbose: bool) -> Result<Self> {
        let parent_dir = source_dir
            .parent()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| {
                Error::Custom(format!(
                    "cannot package {}: it has no parent directory",
                    source_dir.display()
                ))
            })?;

        let name = source_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| {
                Error::Custom(format!(
                    "cannot package {}: it has no base name",
                    source_dir.display()
                ))
            })?;

        Ok(Self {
            verbose,
            source_dir,
            parent_dir,
            name,
            exclude,
        })
    }

    /// Destination path for the archive: `<parent>/<name>.<extension>`
    pub fn archive_path(&self, extension: &str) -> PathBuf {
        self.parent_dir.join(format!("{}.{}", self.name, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_path() {
        let ctx = Context::new(
            PathBuf::from("/work/skills/debug"),
            OsString::from("repack"),
            false,
        )
        .unwrap();

        assert_eq!(ctx.name, "debug");
        assert_eq!(ctx.parent_dir, PathBuf::from("/work/skills"));
        assert_eq!(
            ctx.archive_path("zip"),
            PathBuf::from("/work/skills/debug.zip")
        );
        assert_eq!(
            ctx.archive_path("tar.gz"),
            PathBuf::from("/work/skills/debug.tar.gz")
        );
    }

    #[test]
    fn test_root_is_rejected() {
        let result = Context::new(PathBuf::from("/"), OsString::from("repack"), false);
        assert!(result.is_err());
    }
}
