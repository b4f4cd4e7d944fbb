//! The export run with explicit stages.
//!
//! 1. **Ingest**: read the contacts CSV into the typed table
//! 2. **Normalize**: run the field-normalization pipeline
//! 3. **Persist**: write the normalized table back out as CSV
//! 4. **Serialize**: write batched vCard units
//! 5. **Package**: bundle the units into the archive
//!
//! A dry run stops after normalization and reports what a real run would
//! have produced.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use vcf_card::{HttpPhotoFetcher, PhotoFetcher};
use vcf_export::{
    ARCHIVE_FILE_NAME, ExportOptions, ExportProgress, bundle_units, write_vcard_batches,
};
use vcf_ingest::{read_contacts_csv, write_contacts_csv};
use vcf_model::{LabelPolicy, ProcessingOptions};
use vcf_transform::normalize_table;

/// Inputs for one export run.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub contacts_csv: PathBuf,
    /// Output directory; defaults to the input file's directory.
    pub output_dir: Option<PathBuf>,
    pub batch_size: usize,
    pub label_policy: LabelPolicy,
    /// Disable photo fetching entirely.
    pub skip_photos: bool,
    /// Normalize and report without writing any output files.
    pub dry_run: bool,
}

/// Outcome of one export run.
#[derive(Debug)]
pub struct RunSummary {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub records_read: usize,
    pub emitted: usize,
    pub skipped: usize,
    pub unit_count: usize,
    pub normalized_csv: Option<PathBuf>,
    pub archive: Option<PathBuf>,
    pub dry_run: bool,
}

/// Run the whole export. `on_progress` fires once per written batch.
pub fn run_export<F>(request: &ExportRequest, mut on_progress: F) -> Result<RunSummary>
where
    F: FnMut(ExportProgress),
{
    let span = info_span!("export", input = %request.contacts_csv.display());
    let _guard = span.enter();
    let batch_size = request.batch_size.max(1);

    let output_dir = request.output_dir.clone().unwrap_or_else(|| {
        request
            .contacts_csv
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    });

    let ingest_start = Instant::now();
    let mut table = read_contacts_csv(&request.contacts_csv).context("read contacts")?;
    let records_read = table.records.len();
    info!(
        record_count = records_read,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let options = ProcessingOptions {
        label_policy: request.label_policy,
    };
    normalize_table(&mut table, options);

    if request.dry_run {
        let skipped = table
            .records
            .iter()
            .filter(|record| record.is_nameless())
            .count();
        info!("dry run, no outputs written");
        return Ok(RunSummary {
            input_path: request.contacts_csv.clone(),
            output_dir,
            records_read,
            emitted: records_read - skipped,
            skipped,
            unit_count: records_read.div_ceil(batch_size),
            normalized_csv: None,
            archive: None,
            dry_run: true,
        });
    }

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;

    let normalized_csv = output_dir.join(normalized_csv_name(&request.contacts_csv));
    write_contacts_csv(&normalized_csv, &table).context("write normalized contacts")?;
    info!(path = %normalized_csv.display(), "normalized table written");

    let fetcher = if request.skip_photos {
        None
    } else {
        Some(HttpPhotoFetcher::new().context("build photo client")?)
    };
    let fetcher_ref = fetcher
        .as_ref()
        .map(|fetcher| fetcher as &dyn PhotoFetcher);
    let export_options = ExportOptions {
        output_dir: &output_dir,
        batch_size,
        fetcher: fetcher_ref,
    };
    let serialize_start = Instant::now();
    let summary =
        write_vcard_batches(&table, &export_options, &mut on_progress).context("write batches")?;
    info!(
        unit_count = summary.unit_paths.len(),
        emitted = summary.emitted,
        skipped = summary.skipped,
        duration_ms = serialize_start.elapsed().as_millis(),
        "serialization complete"
    );

    let archive = output_dir.join(ARCHIVE_FILE_NAME);
    bundle_units(&archive, &summary.unit_paths).context("bundle batches")?;

    Ok(RunSummary {
        input_path: request.contacts_csv.clone(),
        output_dir,
        records_read,
        emitted: summary.emitted,
        skipped: summary.skipped,
        unit_count: summary.unit_paths.len(),
        normalized_csv: Some(normalized_csv),
        archive: Some(archive),
        dry_run: false,
    })
}

/// Name of the persisted normalized table, derived from the input stem.
fn normalized_csv_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("contacts");
    format!("{stem}_normalized.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_name_uses_input_stem() {
        assert_eq!(
            normalized_csv_name(Path::new("/tmp/contacts.csv")),
            "contacts_normalized.csv"
        );
        assert_eq!(
            normalized_csv_name(Path::new("export-2024.csv")),
            "export-2024_normalized.csv"
        );
    }
}
