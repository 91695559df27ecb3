use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub static EMAIL_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Email address as submitted through one of the forms.
///
/// Parsing applies the site's rules (100 character limit, `local@domain.tld`
/// shape) before handing the address to lettre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAddress(pub lettre::Address);

/// Email address paired with a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailAddressError {
    #[error("Email is required")]
    Required,
    #[error("Email cannot exceed 100 characters")]
    TooLong,
    #[error("Please enter a valid email address")]
    Invalid,
}

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn with_name(self, name: String) -> EmailAddressWithName {
        EmailAddressWithName(lettre::message::Mailbox {
            name: Some(name),
            email: self.0,
        })
    }
}

impl From<EmailAddress> for EmailAddressWithName {
    fn from(value: EmailAddress) -> Self {
        Self(lettre::message::Mailbox {
            name: None,
            email: value.0,
        })
    }
}

impl FromStr for EmailAddress {
    type Err = EmailAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmailAddressError::Required);
        }
        if s.chars().count() > 100 {
            return Err(EmailAddressError::TooLong);
        }
        if !EMAIL_ADDRESS_REGEX.is_match(s) {
            return Err(EmailAddressError::Invalid);
        }
        s.parse()
            .map(Self)
            .map_err(|_: lettre::address::AddressError| EmailAddressError::Invalid)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl EmailAddressWithName {
    pub fn as_str(&self) -> &str {
        self.0.email.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        for (input, expected) in [
            ("jane@x.com", Ok(())),
            ("max.mustermann@example.de", Ok(())),
            ("with+tag@sub.domain.org", Ok(())),
            ("", Err(EmailAddressError::Required)),
            ("   ", Err(EmailAddressError::Required)),
            ("not-an-email", Err(EmailAddressError::Invalid)),
            ("@missing-local.com", Err(EmailAddressError::Invalid)),
            ("no-tld@domain", Err(EmailAddressError::Invalid)),
            ("spaces in@local.com", Err(EmailAddressError::Invalid)),
        ] {
            let result = input.parse::<EmailAddress>().map(|_| ());
            assert_eq!(result, expected, "input: {input:?}");
        }
    }

    #[test]
    fn parse_too_long() {
        let input = format!("{}@example.com", "a".repeat(100));
        assert_eq!(
            input.parse::<EmailAddress>(),
            Err(EmailAddressError::TooLong)
        );
    }

    #[test]
    fn with_name() {
        let address = "jane@x.com".parse::<EmailAddress>().unwrap();
        let mailbox = address.with_name("Jane Doe".into());
        assert_eq!(mailbox.0.name.as_deref(), Some("Jane Doe"));
        assert_eq!(mailbox.as_str(), "jane@x.com");
    }
}
