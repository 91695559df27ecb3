use serde::Serialize;

pub mod booking;
pub mod contact;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}
