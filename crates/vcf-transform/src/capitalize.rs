//! Cosmetic first-letter capitalization, applied to every cell.

use vcf_model::ContactTable;

/// Uppercase the first character of a value when it is a lowercase letter.
///
/// Blank or whitespace-only input degrades to an empty string; anything
/// whose first character is not a lowercase letter passes through
/// unchanged, which makes the operation idempotent. Digit strings (already
/// cleaned phone values) are untouched.
pub fn capitalize_value(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut out = String::with_capacity(raw.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => raw.to_string(),
    }
}

/// Capitalize every cell of every record, named fields and slot values and
/// labels and extras alike.
pub fn capitalize_table(table: &mut ContactTable) {
    for record in &mut table.records {
        record.map_cells(capitalize_value);
    }
}
