//! Integration tests for the full normalization pipeline.

use vcf_model::{
    ColumnSet, ContactRecord, ContactTable, LabelPolicy, MAX_PHONE_SLOTS, ProcessingOptions,
};
use vcf_transform::normalize_table;

fn contact_headers() -> Vec<String> {
    let mut headers = vec!["First Name".to_string(), "Last Name".to_string()];
    for slot in 1..=MAX_PHONE_SLOTS {
        headers.push(format!("Phone {slot} - Value"));
        headers.push(format!("Phone {slot} - Label"));
    }
    headers.push("Labels".to_string());
    headers
}

fn table_with(records: Vec<ContactRecord>) -> ContactTable {
    let mut table = ContactTable::new(ColumnSet::from_headers(contact_headers()));
    for record in records {
        table.push_record(record);
    }
    table
}

#[test]
fn cleaning_and_positional_labels() {
    let mut record = ContactRecord::default();
    record.first_name = "amal".to_string();
    record.phones[0].value = "+94 71 234 5678".to_string();
    record.phones[1].value = "(011) 2 345 678".to_string();
    record.phones[1].label = "home".to_string();
    let mut table = table_with(vec![record]);

    normalize_table(&mut table, ProcessingOptions::default());

    let record = &table.records[0];
    assert_eq!(record.first_name, "Amal");
    assert_eq!(record.phones[0].value, "0712345678");
    assert_eq!(record.phones[0].label, "Mobile");
    assert_eq!(record.phones[1].value, "0112345678");
    assert_eq!(record.phones[1].label, "Home");
}

#[test]
fn redistribution_labels_lose_to_positional_defaults() {
    let mut record = ContactRecord::default();
    record.phones[0].value = "0711111111:::0722222222".to_string();
    let mut table = table_with(vec![record]);

    normalize_table(&mut table, ProcessingOptions::legacy());

    let record = &table.records[0];
    assert_eq!(record.phones[0].value, "0711111111");
    assert_eq!(record.phones[0].label, "Mobile");
    assert_eq!(record.phones[1].value, "0722222222");
    // The Mobile label assigned during redistribution is overwritten by
    // the slot-2 positional default.
    assert_eq!(record.phones[1].label, "Home");
}

#[test]
fn redistribution_labels_survive_under_keep_policy() {
    let mut record = ContactRecord::default();
    record.phones[0].value = "0711111111:::0722222222".to_string();
    let mut table = table_with(vec![record]);

    let options = ProcessingOptions {
        label_policy: LabelPolicy::KeepRedistributed,
    };
    normalize_table(&mut table, options);

    assert_eq!(table.records[0].phones[1].label, "Mobile");
}

#[test]
fn value_and_label_are_empty_together() {
    let mut first = ContactRecord::default();
    first.phones[0].value = "0711111111:::0722222222:::0733333333".to_string();
    first.phones[3].label = "Fax".to_string();
    let mut second = ContactRecord::default();
    second.phones[0].value = "nan".to_string();
    second.phones[0].label = "mobile".to_string();
    let mut table = table_with(vec![first, second]);

    normalize_table(&mut table, ProcessingOptions::default());

    for record in &table.records {
        for slot in &record.phones {
            assert_eq!(
                slot.value.is_empty(),
                slot.label.is_empty(),
                "slot invariant violated: value={:?} label={:?}",
                slot.value,
                slot.label
            );
        }
    }
}

#[test]
fn nan_values_degrade_to_empty() {
    let mut record = ContactRecord::default();
    record.phones[0].value = "NaN".to_string();
    record.phones[0].label = "Work".to_string();
    let mut table = table_with(vec![record]);

    normalize_table(&mut table, ProcessingOptions::default());

    assert_eq!(table.records[0].phones[0].value, "");
    assert_eq!(table.records[0].phones[0].label, "");
}

#[test]
fn normalization_preserves_record_count_and_order() {
    let records: Vec<ContactRecord> = (0..5)
        .map(|n| ContactRecord {
            first_name: format!("contact{n}"),
            ..ContactRecord::default()
        })
        .collect();
    let mut table = table_with(records);

    normalize_table(&mut table, ProcessingOptions::default());

    assert_eq!(table.records.len(), 5);
    for (n, record) in table.records.iter().enumerate() {
        assert_eq!(record.first_name, format!("Contact{n}"));
    }
}
