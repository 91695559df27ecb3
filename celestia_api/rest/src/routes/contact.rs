use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use celestia_core_contact_contracts::{ContactFeatureService, ContactSubmitInquiryError};

use super::{error, internal_server_error};
use crate::models::contact::ApiContactInquiry;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit_inquiry))
        .with_state(service)
}

async fn submit_inquiry(
    service: State<Arc<impl ContactFeatureService>>,
    Json(inquiry): Json<ApiContactInquiry>,
) -> Response {
    match service.submit_inquiry(inquiry.into()).await {
        Ok(()) => Json(true).into_response(),
        Err(ContactSubmitInquiryError::Confirmation) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Could not send the confirmation email",
        ),
        Err(ContactSubmitInquiryError::Notification) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Could not notify the astrologer",
        ),
        Err(ContactSubmitInquiryError::Other(err)) => internal_server_error(err),
    }
}
