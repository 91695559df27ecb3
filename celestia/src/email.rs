use anyhow::Context;
use celestia_config::EmailConfig;
use celestia_email_impl::EmailServiceImpl;

/// Connect to the SMTP server
pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    let from = config
        .sender_address
        .clone()
        .with_name(config.sender_name.clone());

    EmailServiceImpl::new(&config.smtp_url, from)
        .await
        .context("Failed to connect to SMTP server")
}
