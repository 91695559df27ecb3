use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use thiserror::Error;

use crate::{email_address::EmailAddress, PersonName, PhoneNumber};

/// A submission of the website contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub message: InquiryMessage,
}

static SPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{3,}").unwrap());

/// Free-text message of a contact inquiry.
#[nutype(
    validate(with = validate_inquiry_message, error = InquiryMessageError),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct InquiryMessage(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryMessageError {
    #[error("Message cannot be empty or just spaces")]
    Empty,
    #[error("Message cannot start or end with spaces")]
    OuterWhitespace,
    #[error("Message must be at least 10 characters")]
    TooShort,
    #[error("Message cannot exceed 1000 characters")]
    TooLong,
    #[error("Message cannot contain more than 2 consecutive spaces")]
    WhitespaceRun,
    #[error("Message must contain at least 3 words")]
    TooFewWords,
}

fn validate_inquiry_message(value: &str) -> Result<(), InquiryMessageError> {
    if value.trim().is_empty() {
        return Err(InquiryMessageError::Empty);
    }
    if value != value.trim() {
        return Err(InquiryMessageError::OuterWhitespace);
    }
    let chars = value.chars().count();
    if chars < 10 {
        return Err(InquiryMessageError::TooShort);
    }
    if chars > 1000 {
        return Err(InquiryMessageError::TooLong);
    }
    if SPACE_RUN_REGEX.is_match(value) {
        return Err(InquiryMessageError::WhitespaceRun);
    }
    if value.split_whitespace().count() < 3 {
        return Err(InquiryMessageError::TooFewWords);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inquiry_message() {
        for (input, expected) in [
            ("Hello, I would like a reading.", Ok(())),
            ("", Err(InquiryMessageError::Empty)),
            ("         ", Err(InquiryMessageError::Empty)),
            (" padded message here", Err(InquiryMessageError::OuterWhitespace)),
            ("padded message here ", Err(InquiryMessageError::OuterWhitespace)),
            ("too short", Err(InquiryMessageError::TooShort)),
            ("spaced   out message", Err(InquiryMessageError::WhitespaceRun)),
            ("two  spaces are fine", Ok(())),
            ("onewordonly", Err(InquiryMessageError::TooFewWords)),
            ("two wordsonlyhere", Err(InquiryMessageError::TooFewWords)),
        ] {
            let result = InquiryMessage::try_new(input).map(|_| ());
            assert_eq!(result, expected, "input: {input:?}");
        }
    }

    #[test]
    fn inquiry_message_too_long() {
        let result = InquiryMessage::try_new("word ".repeat(250));
        assert_eq!(result.unwrap_err(), InquiryMessageError::OuterWhitespace);

        let result = InquiryMessage::try_new(format!("a b {}", "c".repeat(1000)));
        assert_eq!(result.unwrap_err(), InquiryMessageError::TooLong);
    }
}
