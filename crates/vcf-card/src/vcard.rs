//! vCard 3.0 record serialization.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::warn;

use vcf_model::ContactRecord;

use crate::photo::PhotoFetcher;

/// Separator between categories in the raw `Labels` field. Distinct from
/// the phone value delimiter: this one carries surrounding spaces.
const CATEGORY_DELIMITER: &str = " ::: ";

/// Category emitted when the raw field yields nothing usable.
pub const DEFAULT_CATEGORY: &str = "myContacts";

/// Turn the raw `Labels` field into a comma-joined category list.
///
/// Splits on `" ::: "`, trims each piece, drops empties. An empty field,
/// a literal `nan`, or an all-empty split falls back to `myContacts`.
pub fn extract_categories(raw: &str) -> String {
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return DEFAULT_CATEGORY.to_string();
    }
    let categories: Vec<&str> = raw
        .split(CATEGORY_DELIMITER)
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .collect();
    if categories.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        categories.join(",")
    }
}

/// Serialize one normalized record as a vCard 3.0 text block.
///
/// Returns `None` when the record has neither a first nor a last name;
/// such rows produce no output at all. A failed photo fetch is logged and
/// the PHOTO line omitted; the record is still emitted.
pub fn render_vcard(record: &ContactRecord, fetcher: Option<&dyn PhotoFetcher>) -> Option<String> {
    if record.is_nameless() {
        return None;
    }

    let mut lines = vec!["BEGIN:VCARD".to_string(), "VERSION:3.0".to_string()];

    lines.push(format!(
        "N:{};{};{};;",
        record.last_name, record.first_name, record.middle_name
    ));
    let full_name: Vec<&str> = [
        record.first_name.as_str(),
        record.middle_name.as_str(),
        record.last_name.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();
    lines.push(format!("FN:{}", full_name.join(" ")));

    if !record.nickname.is_empty() {
        lines.push(format!("NICKNAME:{}", record.nickname));
    }
    if !record.organization.is_empty() {
        lines.push(format!("ORG:{}", record.organization));
    }
    if !record.birthday.is_empty() {
        lines.push(format!("BDAY:{}", record.birthday));
    }
    if !record.notes.is_empty() {
        lines.push(format!("NOTE:{}", record.notes));
    }

    for slot in &record.phones {
        if slot.value.is_empty() {
            continue;
        }
        let label = if slot.label.is_empty() {
            "Mobile"
        } else {
            slot.label.as_str()
        };
        lines.push(format!("TEL;TYPE={label}:{}", slot.value));
    }

    for slot in &record.emails {
        if slot.value.is_empty() {
            continue;
        }
        let label = if slot.label.is_empty() {
            "Other"
        } else {
            slot.label.as_str()
        };
        lines.push(format!("EMAIL;TYPE={label}:{}", slot.value.to_lowercase()));
    }

    let address = format!("{}{}{}", record.street, record.city, record.country);
    if !address.is_empty() {
        lines.push(format!("ADR:;;{address};;"));
    }

    lines.push(format!("CATEGORIES:{}", extract_categories(&record.labels)));

    if !record.photo_url.is_empty()
        && let Some(fetcher) = fetcher
    {
        match fetcher.fetch(&record.photo_url) {
            Ok(bytes) => lines.push(format!(
                "PHOTO;ENCODING=b;TYPE=JPEG:{}",
                BASE64.encode(&bytes)
            )),
            Err(error) => warn!(
                url = %record.photo_url,
                %error,
                "photo fetch failed, emitting record without photo"
            ),
        }
    }

    lines.push("END:VCARD".to_string());
    Some(lines.join("\n"))
}
