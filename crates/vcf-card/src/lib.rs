//! vCard 3.0 serialization for normalized contact records.
//!
//! A record turns into one line-oriented text block (`BEGIN:VCARD` through
//! `END:VCARD`) or nothing at all when the record carries no name. Photo
//! bytes come through the [`PhotoFetcher`] seam so the HTTP dependency
//! stays at the edge.

#![deny(unsafe_code)]

mod photo;
mod vcard;

pub use photo::{FetchError, HttpPhotoFetcher, PHOTO_FETCH_TIMEOUT, PhotoFetcher};
pub use vcard::{DEFAULT_CATEGORY, extract_categories, render_vcard};
