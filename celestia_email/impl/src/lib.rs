use anyhow::anyhow;
use celestia_email_contracts::{Email, EmailService};
use celestia_models::email_address::EmailAddressWithName;
use celestia_utils::Apply;
use lettre::{
    message::MultiPart, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

pub mod template;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub async fn new(url: &str, from: EmailAddressWithName) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .apply_map(email.reply_to, |builder, reply_to| {
                builder.reply_to(reply_to.0)
            })
            .subject(email.subject)
            .multipart(MultiPart::alternative_plain_html(
                email.body.clone(),
                html_body(&email.body),
            ))?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn html_body(text: &str) -> String {
    text.replace('\n', "<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_body_replaces_newlines() {
        assert_eq!(
            html_body("Hi Jane,\n\nSee you soon.\n"),
            "Hi Jane,<br/><br/>See you soon.<br/>"
        );
    }

    #[test]
    fn html_body_leaves_plain_text_alone() {
        assert_eq!(html_body("single line"), "single line");
    }
}
