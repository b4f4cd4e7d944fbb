//! Phone label maintenance: clearing stray labels and assigning positional
//! defaults.

use vcf_model::{
    ContactRecord, ContactTable, LabelPolicy, MAX_PHONE_SLOTS, PHONE_LABEL_PRECEDENCE,
};

/// Erase the label of every empty-valued phone slot.
///
/// Runs after capitalization so that artifacts like a capitalized label on
/// a slot with no value are removed, restoring the invariant that value
/// and label are empty together.
pub fn clear_empty_phone_labels(record: &mut ContactRecord) {
    for slot in &mut record.phones {
        if slot.is_empty() {
            slot.label.clear();
        }
    }
}

/// Run [`clear_empty_phone_labels`] over every record of the table.
pub fn clear_table_phone_labels(table: &mut ContactTable) {
    for record in &mut table.records {
        clear_empty_phone_labels(record);
    }
}

/// Assign positional default labels to populated slots, column-wise.
///
/// Slot i takes `PHONE_LABEL_PRECEDENCE[i]`, but only when the run's
/// column set provides both the value and label column for that slot.
/// Under [`LabelPolicy::PositionalWins`] the positional default replaces
/// whatever label the slot carries, including the `Mobile` set during
/// redistribution; under [`LabelPolicy::KeepRedistributed`] only empty
/// labels are filled.
pub fn assign_positional_labels(table: &mut ContactTable, policy: LabelPolicy) {
    for index in 0..MAX_PHONE_SLOTS {
        if !table.columns.has_phone_value(index) || !table.columns.has_phone_label(index) {
            continue;
        }
        let label = PHONE_LABEL_PRECEDENCE[index];
        for record in &mut table.records {
            let slot = &mut record.phones[index];
            if slot.is_empty() {
                continue;
            }
            match policy {
                LabelPolicy::PositionalWins => slot.label = label.as_str().to_string(),
                LabelPolicy::KeepRedistributed => {
                    if slot.label.is_empty() {
                        slot.label = label.as_str().to_string();
                    }
                }
            }
        }
    }
}
