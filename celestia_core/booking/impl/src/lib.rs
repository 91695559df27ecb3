use std::sync::Arc;

use celestia_core_booking_contracts::{BookingFeatureService, BookingSubmitError};
use celestia_email_contracts::template::TemplateEmailService;
use celestia_models::{
    booking::{BookingRequest, ClientDetails, PartnerDetails},
    email_address::EmailAddressWithName,
};
use celestia_templates_contracts::{
    BookingClientBlock, BookingConfirmationTemplate, BookingNotificationTemplate,
    BookingPartnerBlock,
};

#[derive(Debug, Clone)]
pub struct BookingFeatureImpl<TemplateEmail> {
    template_email: TemplateEmail,
    config: BookingFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct BookingFeatureConfig {
    pub astrologer_email: Arc<EmailAddressWithName>,
}

impl<TemplateEmail> BookingFeatureImpl<TemplateEmail> {
    pub fn new(template_email: TemplateEmail, config: BookingFeatureConfig) -> Self {
        Self {
            template_email,
            config,
        }
    }
}

impl<TemplateEmail> BookingFeatureService for BookingFeatureImpl<TemplateEmail>
where
    TemplateEmail: TemplateEmailService,
{
    #[tracing::instrument(skip(self))]
    async fn submit_booking(&self, request: BookingRequest) -> Result<(), BookingSubmitError> {
        let service_title = request.service.kind().title().to_owned();
        let client = client_block(&request.client);
        let partner = request.service.partner().map(partner_block);

        let submitter = request
            .client
            .email
            .clone()
            .with_name(request.client.name.clone().into_inner());

        let confirmation = BookingConfirmationTemplate {
            service_title: service_title.clone(),
            client: client.clone(),
            partner: partner.clone(),
        };
        if !self
            .template_email
            .send_booking_confirmation_email(submitter.clone(), &confirmation)
            .await?
        {
            return Err(BookingSubmitError::Confirmation);
        }

        let notification = BookingNotificationTemplate {
            service_title,
            client,
            partner,
        };
        if !self
            .template_email
            .send_booking_notification_email(
                (*self.config.astrologer_email).clone(),
                &notification,
                Some(submitter),
            )
            .await?
        {
            return Err(BookingSubmitError::Notification);
        }

        Ok(())
    }
}

fn client_block(client: &ClientDetails) -> BookingClientBlock {
    BookingClientBlock {
        name: client.name.clone().into_inner(),
        email: client.email.as_str().into(),
        phone: client.phone.clone().into_inner(),
        secondary_phone: client
            .secondary_phone
            .as_ref()
            .filter(|phone| !phone.is_empty())
            .map(|phone| phone.clone().into_inner())
            .unwrap_or_else(|| "N/A".into()),
        dob: client.dob.clone().into_inner(),
        birth_time: client.birth_time.clone().into_inner(),
        birth_place: client.birth_place.clone().into_inner(),
    }
}

fn partner_block(partner: &PartnerDetails) -> BookingPartnerBlock {
    BookingPartnerBlock {
        name: partner.name.clone().into_inner(),
        dob: partner.dob.clone().into_inner(),
        birth_time: partner.birth_time.clone().into_inner(),
        birth_place: partner.birth_place.clone().into_inner(),
    }
}
