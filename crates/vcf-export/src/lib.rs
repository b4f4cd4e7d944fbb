//! Batched vCard output.
//!
//! Partitions a normalized contact table into fixed-size batches, writes
//! one `.vcf` unit per batch, and bundles the units into a single ZIP
//! archive, removing the standalone files afterwards.

#![deny(unsafe_code)]

mod archive;
mod batch;

pub use archive::{ARCHIVE_FILE_NAME, bundle_units};
pub use batch::{
    DEFAULT_BATCH_SIZE, ExportOptions, ExportProgress, ExportSummary, unit_file_name,
    write_vcard_batches,
};
