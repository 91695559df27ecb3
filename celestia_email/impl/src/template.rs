use celestia_email_contracts::{template::TemplateEmailService, Email, EmailService};
use celestia_models::email_address::EmailAddressWithName;
use celestia_templates_contracts::{
    BookingConfirmationTemplate, BookingNotificationTemplate, ContactConfirmationTemplate,
    ContactNotificationTemplate, Template, TemplateService,
};

#[derive(Debug, Clone)]
pub struct TemplateEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS> {
    pub fn new(email: EmailS, template: TemplateS) -> Self {
        Self { email, template }
    }
}

impl<EmailS, TemplateS> TemplateEmailService for TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_contact_confirmation_email(
        &self,
        recipient: EmailAddressWithName,
        data: &ContactConfirmationTemplate,
    ) -> anyhow::Result<bool> {
        self.send_email(
            recipient,
            data,
            "Message Received - Celestia Astrology",
            None,
        )
        .await
    }

    async fn send_contact_notification_email(
        &self,
        recipient: EmailAddressWithName,
        data: &ContactNotificationTemplate,
        reply_to: Option<EmailAddressWithName>,
    ) -> anyhow::Result<bool> {
        self.send_email(
            recipient,
            data,
            format!("New Contact Form Inquiry from {}", data.name),
            reply_to,
        )
        .await
    }

    async fn send_booking_confirmation_email(
        &self,
        recipient: EmailAddressWithName,
        data: &BookingConfirmationTemplate,
    ) -> anyhow::Result<bool> {
        self.send_email(
            recipient,
            data,
            format!("Your \"{}\" Booking Request", data.service_title),
            None,
        )
        .await
    }

    async fn send_booking_notification_email(
        &self,
        recipient: EmailAddressWithName,
        data: &BookingNotificationTemplate,
        reply_to: Option<EmailAddressWithName>,
    ) -> anyhow::Result<bool> {
        self.send_email(
            recipient,
            data,
            format!(
                "New Booking Request: {} from {}",
                data.service_title, data.client.name
            ),
            reply_to,
        )
        .await
    }
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_email<T: Template + 'static>(
        &self,
        recipient: EmailAddressWithName,
        data: &T,
        subject: impl Into<String>,
        reply_to: Option<EmailAddressWithName>,
    ) -> anyhow::Result<bool> {
        self.email
            .send(Email {
                recipient,
                subject: subject.into(),
                body: self.template.render(data)?,
                reply_to,
            })
            .await
    }
}
