//! HTTP surface of the stub service.

pub mod health;

use actix_web::{HttpResponse, get};

/// Plain-text banner confirming the service is up.
#[utoipa::path(
    get,
    path = "/",
    tags = ["status"],
    responses((status = 200, description = "Service banner"))
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Backend Server is running...")
}
