use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use thiserror::Error;

pub mod booking;
pub mod contact;
pub mod email_address;

pub static PERSON_NAME_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").unwrap());

pub static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").unwrap());

pub(crate) static WHITESPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Full name of a submitter or their partner.
#[nutype(
    validate(with = validate_person_name, error = PersonNameError),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct PersonName(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonNameError {
    #[error("Name must be at least 2 characters")]
    TooShort,
    #[error("Name cannot exceed 50 characters")]
    TooLong,
    #[error("Name can only contain letters, spaces, hyphens, and apostrophes")]
    Charset,
    #[error("Name cannot start or end with spaces")]
    OuterWhitespace,
    #[error("Name cannot contain multiple consecutive spaces")]
    WhitespaceRun,
}

fn validate_person_name(value: &str) -> Result<(), PersonNameError> {
    if value != value.trim() {
        return Err(PersonNameError::OuterWhitespace);
    }
    let chars = value.chars().count();
    if chars < 2 {
        return Err(PersonNameError::TooShort);
    }
    if chars > 50 {
        return Err(PersonNameError::TooLong);
    }
    if !PERSON_NAME_CHARSET_REGEX.is_match(value) {
        return Err(PersonNameError::Charset);
    }
    if WHITESPACE_RUN_REGEX.is_match(value) {
        return Err(PersonNameError::WhitespaceRun);
    }
    Ok(())
}

/// Primary phone number: optional leading `+`, digits only, 10 to 15 digits.
#[nutype(
    sanitize(trim),
    validate(with = validate_phone_number, error = PhoneNumberError),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct PhoneNumber(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
    #[error("Phone number is required")]
    Required,
    #[error("Please enter a valid phone number (digits only, optional + at start)")]
    Invalid,
    #[error("Phone number must contain at least 10 digits")]
    NotEnoughDigits,
    #[error("Phone number cannot exceed 15 digits")]
    TooManyDigits,
}

fn validate_phone_number(value: &str) -> Result<(), PhoneNumberError> {
    if value.is_empty() {
        return Err(PhoneNumberError::Required);
    }
    if !PHONE_NUMBER_REGEX.is_match(value) {
        return Err(PhoneNumberError::Invalid);
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits < 10 {
        return Err(PhoneNumberError::NotEnoughDigits);
    }
    if digits > 15 {
        return Err(PhoneNumberError::TooManyDigits);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_name() {
        for (input, expected) in [
            ("Jane Doe", Ok(())),
            ("Jean-Luc O'Neill", Ok(())),
            ("J", Err(PersonNameError::TooShort)),
            ("", Err(PersonNameError::TooShort)),
            (
                "This name is way too long to be accepted by the form at all",
                Err(PersonNameError::TooLong),
            ),
            ("Jane42", Err(PersonNameError::Charset)),
            ("Jane_Doe", Err(PersonNameError::Charset)),
            (" Jane", Err(PersonNameError::OuterWhitespace)),
            ("Jane ", Err(PersonNameError::OuterWhitespace)),
            ("   ", Err(PersonNameError::OuterWhitespace)),
            ("Jane  Doe", Err(PersonNameError::WhitespaceRun)),
        ] {
            let result = PersonName::try_new(input).map(|_| ());
            assert_eq!(result, expected, "input: {input:?}");
        }
    }

    #[test]
    fn person_name_rejection_names_the_field() {
        let err = PersonName::try_new("J").unwrap_err();
        assert!(err.to_string().starts_with("Name"));
    }

    #[test]
    fn phone_number() {
        for (input, expected) in [
            ("9876543210", Ok(())),
            ("+4915212345678", Ok(())),
            ("  9876543210  ", Ok(())),
            ("", Err(PhoneNumberError::Required)),
            ("0123456789", Err(PhoneNumberError::Invalid)),
            ("98765 43210", Err(PhoneNumberError::Invalid)),
            ("phone", Err(PhoneNumberError::Invalid)),
            ("12345", Err(PhoneNumberError::NotEnoughDigits)),
            ("+123456789", Err(PhoneNumberError::NotEnoughDigits)),
            ("1234567890123456", Err(PhoneNumberError::TooManyDigits)),
        ] {
            let result = PhoneNumber::try_new(input).map(|_| ());
            assert_eq!(result, expected, "input: {input:?}");
        }
    }

    #[test]
    fn phone_number_too_short_message() {
        let err = PhoneNumber::try_new("12345").unwrap_err();
        assert_eq!(err.to_string(), "Phone number must contain at least 10 digits");
    }

    #[test]
    fn validation_is_idempotent() {
        for input in ["Jane Doe", "J", " Jane", "Jane  Doe"] {
            assert_eq!(
                PersonName::try_new(input),
                PersonName::try_new(input),
                "input: {input:?}"
            );
        }
    }
}
