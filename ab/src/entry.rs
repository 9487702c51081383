//! A single contact record

use serde::{Deserialize, Serialize};

use crate::MAX_FIELD_LEN;

/// A name and email pair
///
/// Fields are bounded to [`MAX_FIELD_LEN`] characters. Anything longer is
/// truncated on the way in rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEntry {
    name: String,
    email: String,
}

impl AddressEntry {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: bounded(name.into()),
            email: bounded(email.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = bounded(name.into());
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = bounded(email.into());
    }
}

impl std::fmt::Display for AddressEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Cut a field down to `MAX_FIELD_LEN` characters
fn bounded(mut value: String) -> String {
    if let Some((idx, _)) = value.char_indices().nth(MAX_FIELD_LEN) {
        value.truncate(idx);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let entry = AddressEntry::default();
        assert_eq!(entry.name(), "");
        assert_eq!(entry.email(), "");
    }

    #[test]
    fn test_setters_replace_fields() {
        let mut entry = AddressEntry::new("Alice", "alice@x.com");
        entry.set_name("Alicia");
        entry.set_email("alicia@x.com");

        assert_eq!(entry.name(), "Alicia");
        assert_eq!(entry.email(), "alicia@x.com");
    }

    #[test]
    fn test_long_fields_are_truncated() {
        let long = "a".repeat(MAX_FIELD_LEN + 25);
        let entry = AddressEntry::new(long.clone(), long);

        assert_eq!(entry.name().chars().count(), MAX_FIELD_LEN);
        assert_eq!(entry.email().chars().count(), MAX_FIELD_LEN);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let long = "é".repeat(MAX_FIELD_LEN + 1);
        let mut entry = AddressEntry::default();
        entry.set_name(long);

        assert_eq!(entry.name().chars().count(), MAX_FIELD_LEN);
        assert!(entry.name().chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_field_at_limit_is_kept() {
        let exact = "b".repeat(MAX_FIELD_LEN);
        let entry = AddressEntry::new(exact.clone(), "b@x.com");
        assert_eq!(entry.name(), exact);
    }

    #[test]
    fn test_display() {
        let entry = AddressEntry::new("Bob", "bob@y.com");
        assert_eq!(entry.to_string(), "Bob <bob@y.com>");
    }
}
