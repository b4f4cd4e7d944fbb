use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use vcf_model::{ColumnSet, ContactRecord, ContactTable};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a contact-export CSV into a [`ContactTable`].
///
/// The first row is the header; its column set is fixed for the run. Short
/// rows are padded with empty cells, and cells are trimmed on the way in.
pub fn read_contacts_csv(path: &Path) -> Result<ContactTable> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    let columns = ColumnSet::from_headers(&headers);
    let mut table = ContactTable::new(columns);
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let mut contact = ContactRecord::default();
        for (idx, column) in table.columns.columns().iter().enumerate() {
            let value = record.get(idx).map(normalize_cell).unwrap_or_default();
            if !value.is_empty() {
                contact.set_cell(column, value);
            }
        }
        table.push_record(contact);
    }
    debug!(
        path = %path.display(),
        column_count = table.columns.columns().len(),
        record_count = table.records.len(),
        "contacts csv loaded"
    );
    Ok(table)
}

/// Persist a [`ContactTable`] as CSV with the same column schema it was
/// read with.
pub fn write_contacts_csv(path: &Path, table: &ContactTable) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(table.columns.header_names())
        .context("write headers")?;
    for record in &table.records {
        let row: Vec<&str> = table
            .columns
            .columns()
            .iter()
            .map(|column| record.cell(column))
            .collect();
        writer
            .write_record(&row)
            .with_context(|| format!("write record: {}", path.display()))?;
    }
    writer.flush().context("flush csv")?;
    debug!(
        path = %path.display(),
        record_count = table.records.len(),
        "contacts csv written"
    );
    Ok(())
}
