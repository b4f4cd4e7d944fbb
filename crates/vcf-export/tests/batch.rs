//! Integration tests for batching and archive packaging.

use std::fs::{self, File};
use std::io::Read as _;

use tempfile::tempdir;

use vcf_export::{
    ARCHIVE_FILE_NAME, ExportOptions, ExportProgress, bundle_units, write_vcard_batches,
};
use vcf_model::{ColumnSet, ContactRecord, ContactTable};

fn table_of(count: usize) -> ContactTable {
    let columns = ColumnSet::from_headers(["First Name", "Last Name"]);
    let mut table = ContactTable::new(columns);
    for n in 0..count {
        table.push_record(ContactRecord {
            first_name: format!("Contact{n}"),
            last_name: "Perera".to_string(),
            ..ContactRecord::default()
        });
    }
    table
}

fn count_cards(content: &str) -> usize {
    content.matches("BEGIN:VCARD").count()
}

#[test]
fn fixed_size_batches_in_row_order() {
    let dir = tempdir().expect("tempdir");
    let table = table_of(250);
    let options = ExportOptions {
        output_dir: dir.path(),
        batch_size: 100,
        fetcher: None,
    };

    let summary = write_vcard_batches(&table, &options, |_| {}).expect("write batches");

    assert_eq!(summary.unit_paths.len(), 3);
    assert_eq!(summary.emitted, 250);
    assert_eq!(summary.skipped, 0);
    let sizes: Vec<usize> = summary
        .unit_paths
        .iter()
        .map(|path| count_cards(&fs::read_to_string(path).expect("read unit")))
        .collect();
    assert_eq!(sizes, [100, 100, 50]);

    let first_unit = fs::read_to_string(&summary.unit_paths[0]).expect("read unit");
    assert!(first_unit.starts_with("BEGIN:VCARD"));
    assert!(first_unit.contains("FN:Contact0 Perera"));
    assert!(first_unit.ends_with("END:VCARD\n"));
}

#[test]
fn archive_holds_every_unit_and_loose_files_are_removed() {
    let dir = tempdir().expect("tempdir");
    let table = table_of(250);
    let options = ExportOptions {
        output_dir: dir.path(),
        batch_size: 100,
        fetcher: None,
    };
    let summary = write_vcard_batches(&table, &options, |_| {}).expect("write batches");

    let archive_path = dir.path().join(ARCHIVE_FILE_NAME);
    bundle_units(&archive_path, &summary.unit_paths).expect("bundle units");

    let mut archive =
        zip::ZipArchive::new(File::open(&archive_path).expect("open archive")).expect("archive");
    assert_eq!(archive.len(), 3);
    let mut entry = archive
        .by_name("contacts_batch_3.vcf")
        .expect("third entry");
    let mut content = String::new();
    entry.read_to_string(&mut content).expect("read entry");
    assert_eq!(count_cards(&content), 50);
    drop(entry);

    for path in &summary.unit_paths {
        assert!(!path.exists(), "loose unit left behind: {}", path.display());
    }
    assert!(archive_path.exists());
}

#[test]
fn nameless_rows_are_skipped_but_units_still_written() {
    let dir = tempdir().expect("tempdir");
    let columns = ColumnSet::from_headers(["First Name", "Last Name"]);
    let mut table = ContactTable::new(columns);
    for _ in 0..5 {
        table.push_record(ContactRecord::default());
    }
    let options = ExportOptions {
        output_dir: dir.path(),
        batch_size: 100,
        fetcher: None,
    };

    let summary = write_vcard_batches(&table, &options, |_| {}).expect("write batches");

    assert_eq!(summary.unit_paths.len(), 1);
    assert_eq!(summary.emitted, 0);
    assert_eq!(summary.skipped, 5);
    let content = fs::read_to_string(&summary.unit_paths[0]).expect("read unit");
    assert!(content.is_empty());
}

#[test]
fn progress_fires_once_per_batch() {
    let dir = tempdir().expect("tempdir");
    let table = table_of(250);
    let options = ExportOptions {
        output_dir: dir.path(),
        batch_size: 100,
        fetcher: None,
    };
    let mut seen: Vec<ExportProgress> = Vec::new();

    write_vcard_batches(&table, &options, |progress| seen.push(progress))
        .expect("write batches");

    let batches: Vec<usize> = seen.iter().map(|progress| progress.batch).collect();
    assert_eq!(batches, [1, 2, 3]);
    assert!(seen.iter().all(|progress| progress.total_batches == 3));
    assert_eq!(seen.last().map(|progress| progress.emitted), Some(250));
}

#[test]
fn empty_table_produces_no_units() {
    let dir = tempdir().expect("tempdir");
    let table = table_of(0);
    let options = ExportOptions {
        output_dir: dir.path(),
        batch_size: 100,
        fetcher: None,
    };

    let summary = write_vcard_batches(&table, &options, |_| {}).expect("write batches");

    assert!(summary.unit_paths.is_empty());
    assert_eq!(summary.emitted, 0);
}
