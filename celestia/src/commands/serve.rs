use std::sync::Arc;

use celestia_api_rest::RestServer;
use celestia_config::Config;
use celestia_core_booking_impl::{BookingFeatureConfig, BookingFeatureImpl};
use celestia_core_contact_impl::{ContactFeatureConfig, ContactFeatureImpl};
use celestia_email_contracts::EmailService;
use celestia_email_impl::template::TemplateEmailServiceImpl;
use celestia_models::email_address::EmailAddressWithName;
use celestia_templates_impl::TemplateServiceImpl;
use tracing::info;

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    email.ping().await?;

    let template_email = TemplateEmailServiceImpl::new(email, TemplateServiceImpl::new());

    let astrologer_email: Arc<EmailAddressWithName> =
        Arc::new(config.astrologer.email.clone().into());

    let contact = ContactFeatureImpl::new(
        template_email.clone(),
        ContactFeatureConfig {
            astrologer_email: Arc::clone(&astrologer_email),
        },
    );
    let booking = BookingFeatureImpl::new(
        template_email,
        BookingFeatureConfig { astrologer_email },
    );

    let server = RestServer::new(contact, booking);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
