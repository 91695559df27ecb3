use celestia_models::{
    contact::{ContactInquiry, InquiryMessage},
    email_address::EmailAddress,
    PersonName, PhoneNumber,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactInquiry {
    /// Full name of the submitter
    pub name: PersonName,
    /// Email address of the submitter
    pub email: EmailAddress,
    /// Phone number of the submitter
    pub phone: PhoneNumber,
    /// The inquiry itself
    pub message: InquiryMessage,
}

impl From<ApiContactInquiry> for ContactInquiry {
    fn from(value: ApiContactInquiry) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            message: value.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize() {
        let inquiry = serde_json::from_value::<ApiContactInquiry>(serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": "9876543210",
            "message": "Hello, I would like a reading.",
        }))
        .unwrap();

        assert_eq!(*inquiry.name, "Jane Doe");
        assert_eq!(inquiry.email.as_str(), "jane@x.com");
    }

    #[test]
    fn deserialize_rejects_invalid_fields() {
        for (field, value) in [
            ("name", "J"),
            ("email", "not-an-email"),
            ("phone", "12345"),
            ("message", "too short"),
        ] {
            let mut body = serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "9876543210",
                "message": "Hello, I would like a reading.",
            });
            body[field] = value.into();

            let result = serde_json::from_value::<ApiContactInquiry>(body);
            assert!(result.is_err(), "field: {field}");
        }
    }
}
