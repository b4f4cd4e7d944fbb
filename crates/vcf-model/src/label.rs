use std::fmt;

use crate::record::MAX_PHONE_SLOTS;

/// Recognized phone labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PhoneLabel {
    Mobile,
    Home,
    Work,
    Fax,
    Other,
    Main,
}

/// Default label for each phone slot, by position.
pub const PHONE_LABEL_PRECEDENCE: [PhoneLabel; MAX_PHONE_SLOTS] = [
    PhoneLabel::Mobile,
    PhoneLabel::Home,
    PhoneLabel::Work,
    PhoneLabel::Fax,
    PhoneLabel::Other,
    PhoneLabel::Main,
];

impl PhoneLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            PhoneLabel::Mobile => "Mobile",
            PhoneLabel::Home => "Home",
            PhoneLabel::Work => "Work",
            PhoneLabel::Fax => "Fax",
            PhoneLabel::Other => "Other",
            PhoneLabel::Main => "Main",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            v if v.eq_ignore_ascii_case("mobile") => Some(PhoneLabel::Mobile),
            v if v.eq_ignore_ascii_case("home") => Some(PhoneLabel::Home),
            v if v.eq_ignore_ascii_case("work") => Some(PhoneLabel::Work),
            v if v.eq_ignore_ascii_case("fax") => Some(PhoneLabel::Fax),
            v if v.eq_ignore_ascii_case("other") => Some(PhoneLabel::Other),
            v if v.eq_ignore_ascii_case("main") => Some(PhoneLabel::Main),
            _ => None,
        }
    }
}

impl fmt::Display for PhoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_covers_every_slot() {
        assert_eq!(PHONE_LABEL_PRECEDENCE.len(), MAX_PHONE_SLOTS);
        assert_eq!(PHONE_LABEL_PRECEDENCE[0], PhoneLabel::Mobile);
        assert_eq!(PHONE_LABEL_PRECEDENCE[1], PhoneLabel::Home);
        assert_eq!(PHONE_LABEL_PRECEDENCE[5], PhoneLabel::Main);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(PhoneLabel::parse("mobile"), Some(PhoneLabel::Mobile));
        assert_eq!(PhoneLabel::parse(" WORK "), Some(PhoneLabel::Work));
        assert_eq!(PhoneLabel::parse("pager"), None);
        assert_eq!(PhoneLabel::parse(""), None);
    }
}
