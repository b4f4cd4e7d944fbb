use std::collections::BTreeMap;

/// Maximum number of positional phone slots per contact.
pub const MAX_PHONE_SLOTS: usize = 6;
/// Maximum number of positional email slots per contact.
pub const MAX_EMAIL_SLOTS: usize = 2;

/// One positional (value, label) pair. An empty string means "no value";
/// absence and empty string are treated as equivalent throughout.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PhoneSlot {
    pub value: String,
    pub label: String,
}

impl PhoneSlot {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmailSlot {
    pub value: String,
    pub label: String,
}

impl EmailSlot {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// One contact row. Named fields cover the fixed export columns; slots are
/// indexed numerically; anything else from the input lands in `extras`
/// keyed by its original header so it survives the round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactRecord {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub nickname: String,
    pub organization: String,
    pub birthday: String,
    pub notes: String,
    pub street: String,
    pub city: String,
    pub country: String,
    /// Raw category string, `" ::: "`-separated.
    pub labels: String,
    pub photo_url: String,
    pub phones: [PhoneSlot; MAX_PHONE_SLOTS],
    pub emails: [EmailSlot; MAX_EMAIL_SLOTS],
    pub extras: BTreeMap<String, String>,
}

impl ContactRecord {
    /// True when neither first nor last name is present. Such records are
    /// skipped during serialization.
    pub fn is_nameless(&self) -> bool {
        self.first_name.is_empty() && self.last_name.is_empty()
    }

    /// Apply `f` to every cell of the record, named fields and slots and
    /// extras alike.
    pub fn map_cells(&mut self, f: impl Fn(&str) -> String) {
        for field in [
            &mut self.first_name,
            &mut self.middle_name,
            &mut self.last_name,
            &mut self.nickname,
            &mut self.organization,
            &mut self.birthday,
            &mut self.notes,
            &mut self.street,
            &mut self.city,
            &mut self.country,
            &mut self.labels,
            &mut self.photo_url,
        ] {
            *field = f(field);
        }
        for slot in &mut self.phones {
            slot.value = f(&slot.value);
            slot.label = f(&slot.label);
        }
        for slot in &mut self.emails {
            slot.value = f(&slot.value);
            slot.label = f(&slot.label);
        }
        for value in self.extras.values_mut() {
            *value = f(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nameless_requires_both_names_empty() {
        let mut record = ContactRecord::default();
        assert!(record.is_nameless());
        record.last_name = "Perera".to_string();
        assert!(!record.is_nameless());
        record.last_name.clear();
        record.first_name = "Amal".to_string();
        assert!(!record.is_nameless());
    }

    #[test]
    fn map_cells_touches_slots_and_extras() {
        let mut record = ContactRecord {
            first_name: "amal".to_string(),
            ..ContactRecord::default()
        };
        record.phones[0].label = "mobile".to_string();
        record
            .extras
            .insert("Custom Field".to_string(), "hello".to_string());
        record.map_cells(str::to_uppercase);
        assert_eq!(record.first_name, "AMAL");
        assert_eq!(record.phones[0].label, "MOBILE");
        assert_eq!(record.extras["Custom Field"], "HELLO");
    }
}
