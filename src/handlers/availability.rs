use crate::models::{AvailabilityResponse, UpsertAvailabilityRequest};
use crate::services::PlayerService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/availability",
    tag = "availability",
    responses(
        (status = 200, description = "All availability flags", body = [AvailabilityResponse])
    )
)]
pub async fn get_availability(player_service: web::Data<PlayerService>) -> Result<HttpResponse> {
    match player_service.availability().await {
        Ok(availability) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": availability
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/availability",
    tag = "availability",
    request_body = UpsertAvailabilityRequest,
    responses(
        (status = 200, description = "Flag upserted for the (player, weekday) pair"),
        (status = 400, description = "dayOfWeek outside 0..6"),
        (status = 404, description = "Player not found")
    )
)]
pub async fn upsert_availability(
    player_service: web::Data<PlayerService>,
    request: web::Json<UpsertAvailabilityRequest>,
) -> Result<HttpResponse> {
    match player_service
        .upsert_availability(request.into_inner())
        .await
    {
        Ok(availability) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": availability
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn availability_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/availability")
            .route("", web::get().to(get_availability))
            .route("", web::post().to(upsert_availability)),
    );
}
