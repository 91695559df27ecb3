use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use celestia_core_booking_contracts::{BookingFeatureService, BookingSubmitError};
use celestia_models::booking::{BookingRequest, ServiceSelectionError};

use super::{error, internal_server_error};
use crate::models::booking::ApiBookingRequest;

pub fn router(service: Arc<impl BookingFeatureService>) -> Router<()> {
    Router::new()
        .route("/bookings", routing::post(submit_booking))
        .with_state(service)
}

async fn submit_booking(
    service: State<Arc<impl BookingFeatureService>>,
    Json(request): Json<ApiBookingRequest>,
) -> Response {
    let request = match BookingRequest::try_from(request) {
        Ok(request) => request,
        Err(ServiceSelectionError::PartnerMissing) => {
            return error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "A synastry reading requires the partner's details",
            )
        }
        Err(ServiceSelectionError::PartnerNotAllowed) => {
            return error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Partner details are only accepted for a synastry reading",
            )
        }
    };

    match service.submit_booking(request).await {
        Ok(()) => Json(true).into_response(),
        Err(BookingSubmitError::Confirmation) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Could not send the confirmation email",
        ),
        Err(BookingSubmitError::Notification) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Could not notify the astrologer",
        ),
        Err(BookingSubmitError::Other(err)) => internal_server_error(err),
    }
}
