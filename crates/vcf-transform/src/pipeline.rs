//! The normalization pipeline with explicit stages.
//!
//! The table is mutated through a fixed ordered sequence of in-place
//! passes:
//! 1. **Clean**: phone value cleanup, column-wise
//! 2. **Capitalize**: first-letter capitalization of every cell
//! 3. **Redistribute**: split `:::`-joined phone values across empty slots
//! 4. **Clear**: erase labels of empty-valued slots
//! 5. **Assign**: positional default labels, column-wise
//!
//! The order matters: capitalization runs before redistribution (so
//! redistributed `Mobile` labels are never re-capitalized), and positional
//! assignment runs last so the configured label policy decides whether it
//! overwrites redistribution labels.

use std::time::Instant;

use tracing::{info, info_span};

use vcf_model::{ContactTable, ProcessingOptions};

use crate::capitalize::capitalize_table;
use crate::labels::{assign_positional_labels, clear_table_phone_labels};
use crate::phone::clean_phone_numbers;
use crate::redistribute::distribute_table_phone_values;

/// Normalize the table in place through all five stages.
pub fn normalize_table(table: &mut ContactTable, options: ProcessingOptions) {
    let span = info_span!("normalize", record_count = table.records.len());
    let _guard = span.enter();
    let start = Instant::now();

    let stage_start = Instant::now();
    clean_phone_numbers(table);
    info!(
        duration_ms = stage_start.elapsed().as_millis(),
        "phone numbers cleaned"
    );

    let stage_start = Instant::now();
    capitalize_table(table);
    info!(
        duration_ms = stage_start.elapsed().as_millis(),
        "strings capitalized"
    );

    let stage_start = Instant::now();
    distribute_table_phone_values(table);
    info!(
        duration_ms = stage_start.elapsed().as_millis(),
        "phone values distributed"
    );

    let stage_start = Instant::now();
    clear_table_phone_labels(table);
    info!(
        duration_ms = stage_start.elapsed().as_millis(),
        "empty phone labels cleared"
    );

    let stage_start = Instant::now();
    assign_positional_labels(table, options.label_policy);
    info!(
        duration_ms = stage_start.elapsed().as_millis(),
        "phone labels assigned"
    );

    info!(
        record_count = table.records.len(),
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );
}
