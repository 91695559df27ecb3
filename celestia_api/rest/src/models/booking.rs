use celestia_models::{
    booking::{
        BirthDate, BirthPlace, BirthTime, BookingRequest, ClientDetails, PartnerDetails,
        SecondaryPhoneNumber, ServiceKind, ServiceSelection, ServiceSelectionError,
    },
    email_address::EmailAddress,
    PersonName, PhoneNumber,
};
use serde::Deserialize;

/// Booking form payload. `person2` must be present exactly when `serviceId`
/// is the synastry reading; the conversion below enforces this.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBookingRequest {
    pub person1: ApiClientDetails,
    #[serde(default)]
    pub person2: Option<ApiPartnerDetails>,
    pub service_id: ServiceKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiClientDetails {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    #[serde(default)]
    pub secondary_phone: Option<SecondaryPhoneNumber>,
    pub dob: BirthDate,
    pub birth_time: BirthTime,
    pub birth_place: BirthPlace,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPartnerDetails {
    pub name: PersonName,
    pub dob: BirthDate,
    pub birth_time: BirthTime,
    pub birth_place: BirthPlace,
}

impl TryFrom<ApiBookingRequest> for BookingRequest {
    type Error = ServiceSelectionError;

    fn try_from(value: ApiBookingRequest) -> Result<Self, Self::Error> {
        let service =
            ServiceSelection::resolve(value.service_id, value.person2.map(Into::into))?;
        Ok(Self {
            client: value.person1.into(),
            service,
        })
    }
}

impl From<ApiClientDetails> for ClientDetails {
    fn from(value: ApiClientDetails) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            secondary_phone: value.secondary_phone,
            dob: value.dob,
            birth_time: value.birth_time,
            birth_place: value.birth_place,
        }
    }
}

impl From<ApiPartnerDetails> for PartnerDetails {
    fn from(value: ApiPartnerDetails) -> Self {
        Self {
            name: value.name,
            dob: value.dob,
            birth_time: value.birth_time,
            birth_place: value.birth_place,
        }
    }
}
