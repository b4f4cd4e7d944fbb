//! Archive packaging for the written vCard units.

use std::fs::{self, File};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::info;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Default archive file name.
pub const ARCHIVE_FILE_NAME: &str = "vcard_batches.zip";

/// Bundle the unit files into one archive, then remove the loose units.
///
/// Entries are named after the unit file names and added in batch order.
/// The standalone unit files are deleted only after the archive is
/// finalized, so a packaging failure leaves them on disk.
pub fn bundle_units(archive_path: &Path, unit_paths: &[PathBuf]) -> Result<()> {
    let file = File::create(archive_path)
        .with_context(|| format!("create archive: {}", archive_path.display()))?;
    let mut archive = ZipWriter::new(file);
    let entry_options = SimpleFileOptions::default();

    for path in unit_paths {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| anyhow!("unit path has no file name: {}", path.display()))?;
        let content =
            fs::read(path).with_context(|| format!("read unit file: {}", path.display()))?;
        archive
            .start_file(name, entry_options)
            .with_context(|| format!("add archive entry: {name}"))?;
        archive
            .write_all(&content)
            .with_context(|| format!("write archive entry: {name}"))?;
    }

    archive
        .finish()
        .with_context(|| format!("finalize archive: {}", archive_path.display()))?;

    for path in unit_paths {
        fs::remove_file(path)
            .with_context(|| format!("remove unit file: {}", path.display()))?;
    }

    info!(
        archive = %archive_path.display(),
        entry_count = unit_paths.len(),
        "vcard batches archived"
    );
    Ok(())
}
