use crate::database::Database;
use crate::errors::LedgerServiceError;
use crate::models::{BalanceResponse, DonateRequest};
use actix_web::{web, HttpResponse};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Health check endpoint
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "ledger-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Append a donation record
pub async fn donate(
    db: web::Data<Arc<Database>>,
    request: web::Json<DonateRequest>,
) -> Result<HttpResponse, LedgerServiceError> {
    let donation = db.insert_donation(&request.into_inner()).await?;

    info!(
        id = donation.id,
        value = donation.value,
        name = %donation.name,
        "Donation recorded"
    );

    Ok(HttpResponse::Ok().json(json!({"message": "Success"})))
}

/// Running total of all donations
pub async fn balance(
    db: web::Data<Arc<Database>>,
) -> Result<HttpResponse, LedgerServiceError> {
    let total = db.total_value().await?;

    Ok(HttpResponse::Ok().json(BalanceResponse { total }))
}

/// Configure routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/donate", web::post().to(donate))
        .route("/balance", web::get().to(balance));
}
