use std::net::IpAddr;

use axum::Router;
use celestia_core_booking_contracts::BookingFeatureService;
use celestia_core_contact_contracts::ContactFeatureService;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact, Booking> {
    contact: Contact,
    booking: Booking,
}

impl<Contact, Booking> RestServer<Contact, Booking>
where
    Contact: ContactFeatureService,
    Booking: BookingFeatureService,
{
    pub fn new(contact: Contact, booking: Booking) -> Self {
        Self { contact, booking }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        Router::new()
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::booking::router(self.booking.into()))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }
}
