//! Redistribution of delimiter-joined phone values.
//!
//! Some exports collapse several numbers into one cell, joined by `:::`.
//! The first number keeps its slot; the rest spill into the next empty
//! slots of the same row, each tagged `Mobile`. Pieces with no empty slot
//! left are dropped.

use tracing::debug;

use vcf_model::{ColumnSet, ContactRecord, ContactTable, MAX_PHONE_SLOTS, PhoneLabel};

/// Token joining multiple phone numbers inside one value cell.
pub const PHONE_VALUE_DELIMITER: &str = ":::";

/// Split `:::`-joined phone values of one row across its empty slots.
///
/// Single left-to-right pass: each slot whose value column exists in the
/// run's column set is scanned once, and pieces only move to higher slot
/// indices, so a slot populated here is never split again in the same pass.
pub fn distribute_phone_values(record: &mut ContactRecord, columns: &ColumnSet) {
    for index in 0..MAX_PHONE_SLOTS {
        if !columns.has_phone_value(index)
            || !record.phones[index].value.contains(PHONE_VALUE_DELIMITER)
        {
            continue;
        }
        let mut pieces = record.phones[index]
            .value
            .split(PHONE_VALUE_DELIMITER)
            .map(String::from)
            .collect::<Vec<_>>()
            .into_iter();
        record.phones[index].value = pieces.next().unwrap_or_default();
        for piece in pieces {
            let target = (index + 1..MAX_PHONE_SLOTS)
                .find(|next| columns.has_phone_value(*next) && record.phones[*next].is_empty());
            match target {
                Some(next) => {
                    record.phones[next].value = piece.trim().to_string();
                    record.phones[next].label = PhoneLabel::Mobile.as_str().to_string();
                }
                None => {
                    debug!(slot = index + 1, "no empty slot left, dropping phone value");
                }
            }
        }
    }
}

/// Run [`distribute_phone_values`] over every record of the table.
pub fn distribute_table_phone_values(table: &mut ContactTable) {
    let columns = table.columns.clone();
    for record in &mut table.records {
        distribute_phone_values(record, &columns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_phone_columns() -> ColumnSet {
        let mut headers = Vec::new();
        for slot in 1..=MAX_PHONE_SLOTS {
            headers.push(format!("Phone {slot} - Value"));
            headers.push(format!("Phone {slot} - Label"));
        }
        ColumnSet::from_headers(headers)
    }

    #[test]
    fn splits_into_next_empty_slot() {
        let columns = full_phone_columns();
        let mut record = ContactRecord::default();
        record.phones[0].value = "0711111111:::0722222222".to_string();
        distribute_phone_values(&mut record, &columns);
        assert_eq!(record.phones[0].value, "0711111111");
        assert_eq!(record.phones[1].value, "0722222222");
        assert_eq!(record.phones[1].label, "Mobile");
    }

    #[test]
    fn skips_occupied_slots() {
        let columns = full_phone_columns();
        let mut record = ContactRecord::default();
        record.phones[0].value = "0711111111:::0722222222".to_string();
        record.phones[1].value = "0733333333".to_string();
        distribute_phone_values(&mut record, &columns);
        assert_eq!(record.phones[1].value, "0733333333");
        assert_eq!(record.phones[2].value, "0722222222");
        assert_eq!(record.phones[2].label, "Mobile");
    }

    #[test]
    fn overflow_pieces_are_dropped() {
        let columns = full_phone_columns();
        let mut record = ContactRecord::default();
        for slot in &mut record.phones {
            slot.value = "0700000000".to_string();
        }
        record.phones[5].value = "0711111111:::0722222222".to_string();
        distribute_phone_values(&mut record, &columns);
        assert_eq!(record.phones[5].value, "0711111111");
        // No slot above index 5 exists; the second piece is gone.
        for slot in &record.phones[..5] {
            assert_eq!(slot.value, "0700000000");
        }
    }

    #[test]
    fn distributed_values_are_not_resplit() {
        let columns = full_phone_columns();
        let mut record = ContactRecord::default();
        record.phones[0].value = "0711111111:::0722222222:::0733333333".to_string();
        distribute_phone_values(&mut record, &columns);
        assert_eq!(record.phones[0].value, "0711111111");
        assert_eq!(record.phones[1].value, "0722222222");
        assert_eq!(record.phones[2].value, "0733333333");
        assert_eq!(record.phones[3].value, "");
    }

    #[test]
    fn honors_missing_target_columns() {
        // Only slots 1 and 3 exist in this run; slot 2 cannot receive.
        let columns = ColumnSet::from_headers([
            "Phone 1 - Value",
            "Phone 1 - Label",
            "Phone 3 - Value",
            "Phone 3 - Label",
        ]);
        let mut record = ContactRecord::default();
        record.phones[0].value = "0711111111:::0722222222".to_string();
        distribute_phone_values(&mut record, &columns);
        assert_eq!(record.phones[1].value, "");
        assert_eq!(record.phones[2].value, "0722222222");
        assert_eq!(record.phones[2].label, "Mobile");
    }
}
