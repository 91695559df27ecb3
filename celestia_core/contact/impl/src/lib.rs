use std::sync::Arc;

use celestia_core_contact_contracts::{ContactFeatureService, ContactSubmitInquiryError};
use celestia_email_contracts::template::TemplateEmailService;
use celestia_models::{contact::ContactInquiry, email_address::EmailAddressWithName};
use celestia_templates_contracts::{ContactConfirmationTemplate, ContactNotificationTemplate};

#[derive(Debug, Clone)]
pub struct ContactFeatureImpl<TemplateEmail> {
    template_email: TemplateEmail,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub astrologer_email: Arc<EmailAddressWithName>,
}

impl<TemplateEmail> ContactFeatureImpl<TemplateEmail> {
    pub fn new(template_email: TemplateEmail, config: ContactFeatureConfig) -> Self {
        Self {
            template_email,
            config,
        }
    }
}

impl<TemplateEmail> ContactFeatureService for ContactFeatureImpl<TemplateEmail>
where
    TemplateEmail: TemplateEmailService,
{
    #[tracing::instrument(skip(self))]
    async fn submit_inquiry(
        &self,
        inquiry: ContactInquiry,
    ) -> Result<(), ContactSubmitInquiryError> {
        let submitter = inquiry
            .email
            .clone()
            .with_name(inquiry.name.clone().into_inner());

        let confirmation = ContactConfirmationTemplate {
            name: inquiry.name.clone().into_inner(),
            message: inquiry.message.clone().into_inner(),
        };
        if !self
            .template_email
            .send_contact_confirmation_email(submitter.clone(), &confirmation)
            .await?
        {
            return Err(ContactSubmitInquiryError::Confirmation);
        }

        let notification = ContactNotificationTemplate {
            name: inquiry.name.into_inner(),
            email: inquiry.email.as_str().into(),
            phone: inquiry.phone.into_inner(),
            message: inquiry.message.into_inner(),
        };
        if !self
            .template_email
            .send_contact_notification_email(
                (*self.config.astrologer_email).clone(),
                &notification,
                Some(submitter),
            )
            .await?
        {
            return Err(ContactSubmitInquiryError::Notification);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use celestia_email_contracts::template::MockTemplateEmailService;
    use celestia_utils::assert_matches;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let template_email = MockTemplateEmailService::new()
            .with_send_contact_confirmation_email(submitter(), confirmation(), true)
            .with_send_contact_notification_email(
                astrologer(),
                notification(),
                Some(submitter()),
                true,
            );

        let sut = ContactFeatureImpl {
            template_email,
            config: config(),
        };

        // Act
        let result = sut.submit_inquiry(inquiry()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn confirmation_failed() {
        // Arrange
        let template_email = MockTemplateEmailService::new()
            .with_send_contact_confirmation_email(submitter(), confirmation(), false);

        let sut = ContactFeatureImpl {
            template_email,
            config: config(),
        };

        // Act
        let result = sut.submit_inquiry(inquiry()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitInquiryError::Confirmation));
    }

    #[tokio::test]
    async fn notification_failed() {
        // Arrange
        let template_email = MockTemplateEmailService::new()
            .with_send_contact_confirmation_email(submitter(), confirmation(), true)
            .with_send_contact_notification_email(
                astrologer(),
                notification(),
                Some(submitter()),
                false,
            );

        let sut = ContactFeatureImpl {
            template_email,
            config: config(),
        };

        // Act
        let result = sut.submit_inquiry(inquiry()).await;

        // Assert
        let err = result.unwrap_err();
        assert_matches!(err, ContactSubmitInquiryError::Notification);
        assert!(err.to_string().contains("astrologer"));
    }

    fn inquiry() -> ContactInquiry {
        ContactInquiry {
            name: "Jane Doe".try_into().unwrap(),
            email: "jane@x.com".try_into().unwrap(),
            phone: "9876543210".try_into().unwrap(),
            message: "Hello, I would like a reading.".try_into().unwrap(),
        }
    }

    fn submitter() -> EmailAddressWithName {
        "\"Jane Doe\" <jane@x.com>".parse().unwrap()
    }

    fn astrologer() -> EmailAddressWithName {
        "astrologer@celestia-astrology.com".parse().unwrap()
    }

    fn config() -> ContactFeatureConfig {
        ContactFeatureConfig {
            astrologer_email: Arc::new(astrologer()),
        }
    }

    fn confirmation() -> ContactConfirmationTemplate {
        ContactConfirmationTemplate {
            name: "Jane Doe".into(),
            message: "Hello, I would like a reading.".into(),
        }
    }

    fn notification() -> ContactNotificationTemplate {
        ContactNotificationTemplate {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "9876543210".into(),
            message: "Hello, I would like a reading.".into(),
        }
    }
}
