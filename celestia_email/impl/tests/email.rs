//! Integration test against a local smtp4dev instance. Runs only when
//! `SMTP4DEV_URL` is set; CI without a mail sandbox skips it.

use std::time::{Duration, Instant};

use celestia_email_contracts::{Email, EmailService};
use celestia_email_impl::EmailServiceImpl;
use celestia_models::email_address::EmailAddressWithName;
use serde::Deserialize;
use url::Url;

#[tokio::test]
async fn send_email() {
    let Some(client) = setup().await else {
        eprintln!("SMTP4DEV_URL is not set, skipping");
        return;
    };

    let result = client
        .email
        .send(Email {
            recipient: "test@example.com".parse().unwrap(),
            subject: "The Subject".into(),
            body: "Line one\nLine two".into(),
            reply_to: Some("replyto@example.com".parse().unwrap()),
        })
        .await
        .unwrap();

    assert!(result);

    let mail = client.wait_for_mail().await;
    assert_eq!(mail.from, client.from.as_str());
    assert_eq!(mail.to, "test@example.com");
    assert_eq!(mail.subject, "The Subject");

    let source = client.fetch_email_source(&mail.id).await;
    assert!(source.contains("Line one\nLine two") || source.contains("Line one\r\nLine two"));
    assert!(source.contains("Line one<br/>Line two"));

    let reply_to = client
        .fetch_email_details(&mail.id)
        .await
        .headers
        .into_iter()
        .find(|h| h.name == "Reply-To")
        .unwrap();
    assert_eq!(reply_to.value, "replyto@example.com");
}

struct TestClient {
    email: EmailServiceImpl,
    from: EmailAddressWithName,
    smtp4dev_url: Url,
}

impl TestClient {
    async fn reset(&self) {
        reqwest::Client::new()
            .delete(self.smtp4dev_url.join("api/Messages/*").unwrap())
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();
    }

    async fn wait_for_mail(&self) -> EmailSummary {
        let now = Instant::now();
        while now.elapsed() < Duration::from_secs(2) {
            let mut mailbox = self.fetch_mailbox().await;
            if let Some(mail) = mailbox.pop() {
                return mail;
            }
        }
        panic!("No email received");
    }

    async fn fetch_mailbox(&self) -> Vec<EmailSummary> {
        reqwest::Client::new()
            .get(self.smtp4dev_url.join("api/Messages").unwrap())
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json::<PaginationResponse<_>>()
            .await
            .unwrap()
            .results
    }

    async fn fetch_email_details(&self, id: &str) -> EmailDetails {
        reqwest::Client::new()
            .get(
                self.smtp4dev_url
                    .join(&format!("api/Messages/{id}"))
                    .unwrap(),
            )
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    async fn fetch_email_source(&self, id: &str) -> String {
        reqwest::Client::new()
            .get(
                self.smtp4dev_url
                    .join(&format!("api/Messages/{id}/source"))
                    .unwrap(),
            )
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .text()
            .await
            .unwrap()
    }
}

async fn setup() -> Option<TestClient> {
    let smtp4dev_url = std::env::var("SMTP4DEV_URL").ok()?.parse().unwrap();

    let config =
        celestia_config::load(&[celestia_config::DEFAULT_CONFIG_PATH]).unwrap();

    let from = config
        .email
        .sender_address
        .clone()
        .with_name(config.email.sender_name.clone());

    let email = EmailServiceImpl::new(&config.email.smtp_url, from.clone())
        .await
        .unwrap();

    let client = TestClient {
        email,
        from,
        smtp4dev_url,
    };

    client.reset().await;

    Some(client)
}

#[derive(Debug, Deserialize)]
struct PaginationResponse<T> {
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct EmailSummary {
    id: String,
    from: String,
    to: String,
    subject: String,
}

#[derive(Debug, Deserialize)]
struct EmailDetails {
    headers: Vec<EmailHeader>,
}

#[derive(Debug, Deserialize)]
struct EmailHeader {
    name: String,
    value: String,
}
