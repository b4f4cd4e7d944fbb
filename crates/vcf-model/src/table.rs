use crate::record::{ContactRecord, MAX_EMAIL_SLOTS, MAX_PHONE_SLOTS};

/// A typed input column. Slot indices are zero-based in code and rendered
/// one-based in header names (`Phone 1 - Value` is `PhoneValue(0)`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Column {
    FirstName,
    MiddleName,
    LastName,
    Nickname,
    Organization,
    Birthday,
    Notes,
    Street,
    City,
    Country,
    Labels,
    Photo,
    PhoneValue(usize),
    PhoneLabel(usize),
    EmailValue(usize),
    EmailLabel(usize),
    /// Any input column outside the fixed convention, keyed by header.
    Extra(String),
}

impl Column {
    pub fn parse(header: &str) -> Column {
        match header {
            "First Name" => Column::FirstName,
            "Middle Name" => Column::MiddleName,
            "Last Name" => Column::LastName,
            "Nickname" => Column::Nickname,
            "Organization Name" => Column::Organization,
            "Birthday" => Column::Birthday,
            "Notes" => Column::Notes,
            "Address 1 - Street" => Column::Street,
            "Address 1 - City" => Column::City,
            "Address 1 - Country" => Column::Country,
            "Labels" => Column::Labels,
            "Photo" => Column::Photo,
            _ => parse_slot_column(header)
                .unwrap_or_else(|| Column::Extra(header.to_string())),
        }
    }

    /// The header name this column carries in the tabular format.
    pub fn header_name(&self) -> String {
        match self {
            Column::FirstName => "First Name".to_string(),
            Column::MiddleName => "Middle Name".to_string(),
            Column::LastName => "Last Name".to_string(),
            Column::Nickname => "Nickname".to_string(),
            Column::Organization => "Organization Name".to_string(),
            Column::Birthday => "Birthday".to_string(),
            Column::Notes => "Notes".to_string(),
            Column::Street => "Address 1 - Street".to_string(),
            Column::City => "Address 1 - City".to_string(),
            Column::Country => "Address 1 - Country".to_string(),
            Column::Labels => "Labels".to_string(),
            Column::Photo => "Photo".to_string(),
            Column::PhoneValue(index) => format!("Phone {} - Value", index + 1),
            Column::PhoneLabel(index) => format!("Phone {} - Label", index + 1),
            Column::EmailValue(index) => format!("E-mail {} - Value", index + 1),
            Column::EmailLabel(index) => format!("E-mail {} - Label", index + 1),
            Column::Extra(name) => name.clone(),
        }
    }
}

fn parse_slot_column(header: &str) -> Option<Column> {
    let (family, max) = if header.starts_with("Phone ") {
        ("Phone ", MAX_PHONE_SLOTS)
    } else if header.starts_with("E-mail ") {
        ("E-mail ", MAX_EMAIL_SLOTS)
    } else {
        return None;
    };
    let rest = &header[family.len()..];
    let (number, kind) = rest.split_once(" - ")?;
    let number: usize = number.parse().ok()?;
    if number == 0 || number > max {
        return None;
    }
    let index = number - 1;
    match (family, kind) {
        ("Phone ", "Value") => Some(Column::PhoneValue(index)),
        ("Phone ", "Label") => Some(Column::PhoneLabel(index)),
        ("E-mail ", "Value") => Some(Column::EmailValue(index)),
        ("E-mail ", "Label") => Some(Column::EmailLabel(index)),
        _ => None,
    }
}

impl ContactRecord {
    pub fn cell(&self, column: &Column) -> &str {
        match column {
            Column::FirstName => &self.first_name,
            Column::MiddleName => &self.middle_name,
            Column::LastName => &self.last_name,
            Column::Nickname => &self.nickname,
            Column::Organization => &self.organization,
            Column::Birthday => &self.birthday,
            Column::Notes => &self.notes,
            Column::Street => &self.street,
            Column::City => &self.city,
            Column::Country => &self.country,
            Column::Labels => &self.labels,
            Column::Photo => &self.photo_url,
            Column::PhoneValue(index) => &self.phones[*index].value,
            Column::PhoneLabel(index) => &self.phones[*index].label,
            Column::EmailValue(index) => &self.emails[*index].value,
            Column::EmailLabel(index) => &self.emails[*index].label,
            Column::Extra(name) => self.extras.get(name).map_or("", String::as_str),
        }
    }

    pub fn set_cell(&mut self, column: &Column, value: String) {
        match column {
            Column::FirstName => self.first_name = value,
            Column::MiddleName => self.middle_name = value,
            Column::LastName => self.last_name = value,
            Column::Nickname => self.nickname = value,
            Column::Organization => self.organization = value,
            Column::Birthday => self.birthday = value,
            Column::Notes => self.notes = value,
            Column::Street => self.street = value,
            Column::City => self.city = value,
            Column::Country => self.country = value,
            Column::Labels => self.labels = value,
            Column::Photo => self.photo_url = value,
            Column::PhoneValue(index) => self.phones[*index].value = value,
            Column::PhoneLabel(index) => self.phones[*index].label = value,
            Column::EmailValue(index) => self.emails[*index].value = value,
            Column::EmailLabel(index) => self.emails[*index].label = value,
            Column::Extra(name) => {
                self.extras.insert(name.clone(), value);
            }
        }
    }
}

/// The ordered set of columns present in one input file. Fixed per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: headers
                .into_iter()
                .map(|header| Column::parse(header.as_ref()))
                .collect(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn contains(&self, column: &Column) -> bool {
        self.columns.contains(column)
    }

    pub fn has_phone_value(&self, index: usize) -> bool {
        self.contains(&Column::PhoneValue(index))
    }

    pub fn has_phone_label(&self, index: usize) -> bool {
        self.contains(&Column::PhoneLabel(index))
    }

    pub fn header_names(&self) -> Vec<String> {
        self.columns.iter().map(Column::header_name).collect()
    }
}

/// An ordered sequence of contact records sharing one column schema.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContactTable {
    pub columns: ColumnSet,
    pub records: Vec<ContactRecord>,
}

impl ContactTable {
    pub fn new(columns: ColumnSet) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    pub fn push_record(&mut self, record: ContactRecord) {
        self.records.push(record);
    }
}
