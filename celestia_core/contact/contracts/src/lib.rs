use std::future::Future;

use celestia_models::contact::ContactInquiry;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Acknowledge the inquiry to the submitter, then notify the astrologer.
    ///
    /// The astrologer is only notified after the submitter's acknowledgement
    /// has been accepted by the transport.
    fn submit_inquiry(
        &self,
        inquiry: ContactInquiry,
    ) -> impl Future<Output = Result<(), ContactSubmitInquiryError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitInquiryError {
    #[error("Failed to send the confirmation email to the submitter.")]
    Confirmation,
    #[error("Failed to send the notification email to the astrologer.")]
    Notification,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
