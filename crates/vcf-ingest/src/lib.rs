//! Contact table ingestion.
//!
//! Reads a contact-export CSV into the typed [`vcf_model::ContactTable`]
//! and writes the normalized table back out in the same tabular format.

#![deny(unsafe_code)]

mod csv_table;

pub use csv_table::{read_contacts_csv, write_contacts_csv};
