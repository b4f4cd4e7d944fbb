#![deny(unsafe_code)]

pub mod label;
pub mod options;
pub mod record;
pub mod table;

pub use label::{PHONE_LABEL_PRECEDENCE, PhoneLabel};
pub use options::{LabelPolicy, ProcessingOptions};
pub use record::{ContactRecord, EmailSlot, MAX_EMAIL_SLOTS, MAX_PHONE_SLOTS, PhoneSlot};
pub use table::{Column, ColumnSet, ContactTable};
