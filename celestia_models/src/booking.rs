use std::sync::LazyLock;

use chrono::{Months, NaiveDate, Utc};
use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{email_address::EmailAddress, PersonName, PhoneNumber, WHITESPACE_RUN_REGEX};

/// A booking request as accepted by the submission handler.
///
/// Values of this type uphold the partner invariant: partner details exist
/// exactly for synastry readings, by construction of [`ServiceSelection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub client: ClientDetails,
    pub service: ServiceSelection,
}

/// Birth data and contact details of the person requesting the reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDetails {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub secondary_phone: Option<SecondaryPhoneNumber>,
    pub dob: BirthDate,
    pub birth_time: BirthTime,
    pub birth_place: BirthPlace,
}

/// Birth data of the partner in a synastry reading. No contact details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerDetails {
    pub name: PersonName,
    pub dob: BirthDate,
    pub birth_time: BirthTime,
    pub birth_place: BirthPlace,
}

/// The fixed catalog of offered services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    NatalChartReading,
    SynastryReading,
    VastuShastra,
    NumerologyReading,
    CareerVocation,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::NatalChartReading,
        ServiceKind::SynastryReading,
        ServiceKind::VastuShastra,
        ServiceKind::NumerologyReading,
        ServiceKind::CareerVocation,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ServiceKind::NatalChartReading => "natal-chart-reading",
            ServiceKind::SynastryReading => "synastry-reading",
            ServiceKind::VastuShastra => "vastu-shastra",
            ServiceKind::NumerologyReading => "numerology-reading",
            ServiceKind::CareerVocation => "career-vocation",
        }
    }

    /// Display label shown to the client and the astrologer.
    pub fn title(self) -> &'static str {
        match self {
            ServiceKind::NatalChartReading => "Natal Chart Reading",
            ServiceKind::SynastryReading => "Synastry (Couples) Reading",
            ServiceKind::VastuShastra => "Vastu Shastra",
            ServiceKind::NumerologyReading => "Numerology Reading",
            ServiceKind::CareerVocation => "Career & Vocation",
        }
    }
}

/// The selected service, carrying the partner's details exactly when the
/// service is a synastry reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceSelection {
    NatalChartReading,
    SynastryReading { partner: PartnerDetails },
    VastuShastra,
    NumerologyReading,
    CareerVocation,
}

impl ServiceSelection {
    /// Combines a service id with optionally submitted partner details,
    /// rejecting combinations the catalog does not allow.
    pub fn resolve(
        kind: ServiceKind,
        partner: Option<PartnerDetails>,
    ) -> Result<Self, ServiceSelectionError> {
        match kind {
            ServiceKind::SynastryReading => partner
                .map(|partner| Self::SynastryReading { partner })
                .ok_or(ServiceSelectionError::PartnerMissing),
            _ if partner.is_some() => Err(ServiceSelectionError::PartnerNotAllowed),
            ServiceKind::NatalChartReading => Ok(Self::NatalChartReading),
            ServiceKind::VastuShastra => Ok(Self::VastuShastra),
            ServiceKind::NumerologyReading => Ok(Self::NumerologyReading),
            ServiceKind::CareerVocation => Ok(Self::CareerVocation),
        }
    }

    pub fn kind(&self) -> ServiceKind {
        match self {
            Self::NatalChartReading => ServiceKind::NatalChartReading,
            Self::SynastryReading { .. } => ServiceKind::SynastryReading,
            Self::VastuShastra => ServiceKind::VastuShastra,
            Self::NumerologyReading => ServiceKind::NumerologyReading,
            Self::CareerVocation => ServiceKind::CareerVocation,
        }
    }

    pub fn partner(&self) -> Option<&PartnerDetails> {
        match self {
            Self::SynastryReading { partner } => Some(partner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceSelectionError {
    #[error("A synastry reading requires the partner's details")]
    PartnerMissing,
    #[error("Partner details are only accepted for a synastry reading")]
    PartnerNotAllowed,
}

pub static SECONDARY_PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{9,14}$").unwrap());

/// Optional second phone number. The empty string counts as "not provided".
#[nutype(
    sanitize(trim),
    validate(with = validate_secondary_phone_number, error = SecondaryPhoneNumberError),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SecondaryPhoneNumber(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecondaryPhoneNumberError {
    #[error("Please enter a valid secondary phone number")]
    Invalid,
}

fn validate_secondary_phone_number(value: &str) -> Result<(), SecondaryPhoneNumberError> {
    if value.is_empty() || SECONDARY_PHONE_NUMBER_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(SecondaryPhoneNumberError::Invalid)
    }
}

static BIRTH_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// ISO date of birth, at most 120 years in the past and never in the future.
#[nutype(
    sanitize(trim),
    validate(with = validate_birth_date, error = BirthDateError),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct BirthDate(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthDateError {
    #[error("Date of birth is required")]
    Required,
    #[error("Please select a valid date")]
    Format,
    #[error("Please enter a valid birth date (not in future, not more than 120 years ago)")]
    OutOfRange,
}

fn validate_birth_date(value: &str) -> Result<(), BirthDateError> {
    if value.is_empty() {
        return Err(BirthDateError::Required);
    }
    if !BIRTH_DATE_REGEX.is_match(value) {
        return Err(BirthDateError::Format);
    }
    let date =
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| BirthDateError::Format)?;
    let today = Utc::now().date_naive();
    let min = today
        .checked_sub_months(Months::new(120 * 12))
        .unwrap_or(NaiveDate::MIN);
    if date < min || date > today {
        return Err(BirthDateError::OutOfRange);
    }
    Ok(())
}

static BIRTH_TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap());

/// Time of birth in 24-hour `HH:MM` notation.
#[nutype(
    sanitize(trim),
    validate(with = validate_birth_time, error = BirthTimeError),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct BirthTime(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthTimeError {
    #[error("Time of birth is required")]
    Required,
    #[error("Please enter a valid time in HH:MM format")]
    Format,
}

fn validate_birth_time(value: &str) -> Result<(), BirthTimeError> {
    if value.is_empty() {
        return Err(BirthTimeError::Required);
    }
    if !BIRTH_TIME_REGEX.is_match(value) {
        return Err(BirthTimeError::Format);
    }
    Ok(())
}

pub static BIRTH_PLACE_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s,.-]+$").unwrap());

/// Place of birth, free text restricted to letters and basic punctuation.
#[nutype(
    validate(with = validate_birth_place, error = BirthPlaceError),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct BirthPlace(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthPlaceError {
    #[error("Place of birth must be at least 2 characters")]
    TooShort,
    #[error("Place of birth cannot exceed 100 characters")]
    TooLong,
    #[error("Place of birth can only contain letters, spaces, commas, periods, and hyphens")]
    Charset,
    #[error("Place of birth cannot start or end with spaces")]
    OuterWhitespace,
    #[error("Place of birth cannot contain multiple consecutive spaces")]
    WhitespaceRun,
}

fn validate_birth_place(value: &str) -> Result<(), BirthPlaceError> {
    if value != value.trim() {
        return Err(BirthPlaceError::OuterWhitespace);
    }
    let chars = value.chars().count();
    if chars < 2 {
        return Err(BirthPlaceError::TooShort);
    }
    if chars > 100 {
        return Err(BirthPlaceError::TooLong);
    }
    if !BIRTH_PLACE_CHARSET_REGEX.is_match(value) {
        return Err(BirthPlaceError::Charset);
    }
    if WHITESPACE_RUN_REGEX.is_match(value) {
        return Err(BirthPlaceError::WhitespaceRun);
    }
    Ok(())
}
