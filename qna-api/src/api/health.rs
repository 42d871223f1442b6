use actix_web::{HttpResponse, Result};
use shared_types::HealthResponse;

pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse::healthy()))
}
