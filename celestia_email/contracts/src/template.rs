use std::future::Future;

use celestia_models::email_address::EmailAddressWithName;
use celestia_templates_contracts::{
    BookingConfirmationTemplate, BookingNotificationTemplate, ContactConfirmationTemplate,
    ContactNotificationTemplate,
};

/// Renders one of the notification templates and sends it with the subject
/// line fixed per template kind.
///
/// Notification emails to the astrologer carry a `reply_to` pointing at the
/// submitter so a reply lands in the right inbox.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateEmailService: Send + Sync + 'static {
    fn send_contact_confirmation_email(
        &self,
        recipient: EmailAddressWithName,
        data: &ContactConfirmationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn send_contact_notification_email(
        &self,
        recipient: EmailAddressWithName,
        data: &ContactNotificationTemplate,
        reply_to: Option<EmailAddressWithName>,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn send_booking_confirmation_email(
        &self,
        recipient: EmailAddressWithName,
        data: &BookingConfirmationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn send_booking_notification_email(
        &self,
        recipient: EmailAddressWithName,
        data: &BookingNotificationTemplate,
        reply_to: Option<EmailAddressWithName>,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl MockTemplateEmailService {
    pub fn with_send_contact_confirmation_email(
        mut self,
        recipient: EmailAddressWithName,
        data: ContactConfirmationTemplate,
        result: bool,
    ) -> Self {
        self.expect_send_contact_confirmation_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_contact_notification_email(
        mut self,
        recipient: EmailAddressWithName,
        data: ContactNotificationTemplate,
        reply_to: Option<EmailAddressWithName>,
        result: bool,
    ) -> Self {
        self.expect_send_contact_notification_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
                mockall::predicate::eq(reply_to),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_booking_confirmation_email(
        mut self,
        recipient: EmailAddressWithName,
        data: BookingConfirmationTemplate,
        result: bool,
    ) -> Self {
        self.expect_send_booking_confirmation_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_booking_notification_email(
        mut self,
        recipient: EmailAddressWithName,
        data: BookingNotificationTemplate,
        reply_to: Option<EmailAddressWithName>,
        result: bool,
    ) -> Self {
        self.expect_send_booking_notification_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
                mockall::predicate::eq(reply_to),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
