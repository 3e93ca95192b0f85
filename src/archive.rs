use crate::context::Context;
use crate::result::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tar::Builder;
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::FileOptions;

/// Enumerate every regular file under the source directory, skipping the
/// excluded file name wherever it appears. Returns `(path, entry name)`
/// pairs; entry names are relative to the source directory's parent so the
/// directory name itself is the root of the archive.
fn collect_entries(ctx: &Context) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(&ctx.source_dir) {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || entry.file_name() == ctx.exclude.as_os_str() {
            continue;
        }

        let name = path.strip_prefix(&ctx.parent_dir).unwrap().to_path_buf();
        entries.push((path.to_path_buf(), name));
    }

    Ok(entries)
}

/// Remove a stale archive from a previous run; every run produces a fresh file
fn remove_stale(ctx: &Context, archive_path: &Path) -> Result<()> {
    if archive_path.exists() {
        fs::remove_file(archive_path)?;
        if ctx.verbose {
            println!("Removed old {}", archive_path.display());
        }
    }
    Ok(())
}

/// Package the source directory into `<parent>/<name>.zip` with
/// deflate-compressed entries
pub fn create_zip(ctx: &Context) -> Result<PathBuf> {
    let archive_path = ctx.archive_path("zip");
    remove_stale(ctx, &archive_path)?;

    let file = File::create(&archive_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> = FileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for (path, name) in collect_entries(ctx)? {
        if ctx.verbose {
            println!("Adding {}", name.display());
        }

        zip.start_file(name.to_string_lossy().to_string(), options)?;
        let mut f = File::open(&path)?;
        let mut buffer = Vec::new();
        f.read_to_end(&mut buffer)?;
        zip.write_all(&buffer)?;
    }

    zip.finish()?;
    Ok(archive_path)
}

/// Package the source directory into `<parent>/<name>.tar.gz`
pub fn create_tar_gz(ctx: &Context) -> Result<PathBuf> {
    let archive_path = ctx.archive_path("tar.gz");
    remove_stale(ctx, &archive_path)?;

    let file = File::create(&archive_path)?;
    let enc = GzEncoder::new(file, Compression::default());
    let mut tar = Builder::new(enc);

    for (path, name) in collect_entries(ctx)? {
        if ctx.verbose {
            println!("Adding {}", name.display());
        }

        tar.append_path_with_name(&path, &name)?;
    }

    let enc = tar.into_inner()?;
    enc.finish()?;
    Ok(archive_path)
}
