use std::future::Future;

use celestia_models::booking::BookingRequest;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BookingFeatureService: Send + Sync + 'static {
    /// Confirm the booking request to the client, then notify the astrologer.
    ///
    /// The astrologer is only notified after the client's confirmation has
    /// been accepted by the transport.
    fn submit_booking(
        &self,
        request: BookingRequest,
    ) -> impl Future<Output = Result<(), BookingSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum BookingSubmitError {
    #[error("Failed to send the confirmation email to the client.")]
    Confirmation,
    #[error("Failed to send the notification email to the astrologer.")]
    Notification,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
