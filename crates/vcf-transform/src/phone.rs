//! Phone value cleanup.
//!
//! Values arrive in every shape the export produces: embedded spaces,
//! parenthesized area codes, international `+94`/`94` prefixes, and the
//! occasional `nan` artifact from upstream tooling. Cleanup reduces all of
//! them to a bare local digit string.

use vcf_model::{ContactTable, MAX_PHONE_SLOTS};

/// Clean a single phone value.
///
/// Trims, treats a case-insensitive `nan` literal as missing, strips all
/// whitespace and parentheses, rewrites a leading `+94` or `94` country
/// prefix to a local `0`, and left-pads a 9-character value with `0`.
/// Never fails; unusable input degrades to an empty string.
pub fn clean_phone_value(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        return String::new();
    }
    let mut value: String = trimmed
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '(' && *ch != ')')
        .collect();
    // Ordered substitutions: the "+94" rewrite shadows the bare "94" one.
    if let Some(rest) = value.strip_prefix("+94") {
        value = format!("0{rest}");
    } else if let Some(rest) = value.strip_prefix("94") {
        value = format!("0{rest}");
    }
    if value.chars().count() == 9 {
        value.insert(0, '0');
    }
    value
}

/// Clean every phone value column present in the table, in place. Labels
/// are untouched at this stage.
pub fn clean_phone_numbers(table: &mut ContactTable) {
    for index in 0..MAX_PHONE_SLOTS {
        if !table.columns.has_phone_value(index) {
            continue;
        }
        for record in &mut table.records {
            record.phones[index].value = clean_phone_value(&record.phones[index].value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcf_model::{ColumnSet, ContactRecord};

    #[test]
    fn strips_whitespace_and_parentheses() {
        assert_eq!(clean_phone_value("071 123 4567"), "0711234567");
        assert_eq!(clean_phone_value("(071) 1234567"), "0711234567");
        assert_eq!(clean_phone_value("  0711234567  "), "0711234567");
    }

    #[test]
    fn rewrites_country_prefix() {
        assert_eq!(clean_phone_value("+94712345678"), "0712345678");
        assert_eq!(clean_phone_value("94712345678"), "0712345678");
        assert_eq!(clean_phone_value("+94 71 234 5678"), "0712345678");
    }

    #[test]
    fn pads_nine_character_values() {
        assert_eq!(clean_phone_value("712345678"), "0712345678");
        // Already ten characters, left alone.
        assert_eq!(clean_phone_value("0712345678"), "0712345678");
    }

    #[test]
    fn nan_literal_becomes_empty() {
        assert_eq!(clean_phone_value("nan"), "");
        assert_eq!(clean_phone_value("NaN"), "");
        assert_eq!(clean_phone_value(" nan "), "");
        assert_eq!(clean_phone_value(""), "");
    }

    #[test]
    fn table_pass_skips_absent_columns() {
        let columns = ColumnSet::from_headers(["Phone 1 - Value", "Phone 1 - Label"]);
        let mut table = vcf_model::ContactTable::new(columns);
        let mut record = ContactRecord::default();
        record.phones[0].value = "+94 71 234 5678".to_string();
        // Slot 2 has no column in this run; the pass must not touch it.
        record.phones[1].value = "nan".to_string();
        table.push_record(record);
        clean_phone_numbers(&mut table);
        assert_eq!(table.records[0].phones[0].value, "0712345678");
        assert_eq!(table.records[0].phones[1].value, "nan");
    }
}
