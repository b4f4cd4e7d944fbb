//! Batched vCard unit writing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use vcf_card::{PhotoFetcher, render_vcard};
use vcf_model::ContactTable;

/// Rows per output unit unless overridden.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Progress snapshot reported after each batch is written.
#[derive(Debug, Clone, Copy)]
pub struct ExportProgress {
    /// 1-based batch number just completed.
    pub batch: usize,
    /// Total number of batches in this run.
    pub total_batches: usize,
    /// Records emitted so far, across all batches.
    pub emitted: usize,
    /// Records skipped so far for lacking both name fields.
    pub skipped: usize,
}

/// Outcome of the batch-writing stage.
#[derive(Debug)]
pub struct ExportSummary {
    /// Paths of the written units, in batch order.
    pub unit_paths: Vec<PathBuf>,
    pub emitted: usize,
    pub skipped: usize,
}

/// Configuration for one export run.
pub struct ExportOptions<'a> {
    pub output_dir: &'a Path,
    pub batch_size: usize,
    /// `None` disables photo fetching entirely.
    pub fetcher: Option<&'a dyn PhotoFetcher>,
}

/// Serialize the table into fixed-size vCard units.
///
/// Batches keep the original row order. Every batch produces a unit file,
/// even when all of its rows are skipped; each emitted record is followed
/// by a newline. `on_progress` fires once per written batch.
pub fn write_vcard_batches<F>(
    table: &ContactTable,
    options: &ExportOptions<'_>,
    mut on_progress: F,
) -> Result<ExportSummary>
where
    F: FnMut(ExportProgress),
{
    let batch_size = options.batch_size.max(1);
    let total_batches = table.records.len().div_ceil(batch_size);
    let mut unit_paths = Vec::with_capacity(total_batches);
    let mut emitted = 0usize;
    let mut skipped = 0usize;

    for (index, chunk) in table.records.chunks(batch_size).enumerate() {
        let batch = index + 1;
        let unit_path = options.output_dir.join(unit_file_name(batch));
        let mut unit = String::new();
        for record in chunk {
            match render_vcard(record, options.fetcher) {
                Some(card) => {
                    unit.push_str(&card);
                    unit.push('\n');
                    emitted += 1;
                }
                None => skipped += 1,
            }
        }
        fs::write(&unit_path, &unit)
            .with_context(|| format!("write batch file: {}", unit_path.display()))?;
        debug!(
            batch,
            total_batches,
            row_count = chunk.len(),
            path = %unit_path.display(),
            "batch file written"
        );
        unit_paths.push(unit_path);
        on_progress(ExportProgress {
            batch,
            total_batches,
            emitted,
            skipped,
        });
    }

    Ok(ExportSummary {
        unit_paths,
        emitted,
        skipped,
    })
}

/// Sequential 1-indexed unit naming.
pub fn unit_file_name(batch: usize) -> String {
    format!("contacts_batch_{batch}.vcf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_names_are_one_indexed() {
        assert_eq!(unit_file_name(1), "contacts_batch_1.vcf");
        assert_eq!(unit_file_name(12), "contacts_batch_12.vcf");
    }
}
