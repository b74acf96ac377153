use crate::models::{CreateSynergyRequest, SynergyResponse};
use crate::services::SynergyService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/synergies",
    tag = "synergies",
    responses(
        (status = 200, description = "All champion synergies", body = [SynergyResponse])
    )
)]
pub async fn get_synergies(synergy_service: web::Data<SynergyService>) -> Result<HttpResponse> {
    match synergy_service.synergies().await {
        Ok(synergies) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": synergies
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/synergies",
    tag = "synergies",
    request_body = CreateSynergyRequest,
    responses(
        (status = 200, description = "Synergy created"),
        (status = 400, description = "Rating out of range or invalid synergy type")
    )
)]
pub async fn create_synergy(
    synergy_service: web::Data<SynergyService>,
    request: web::Json<CreateSynergyRequest>,
) -> Result<HttpResponse> {
    match synergy_service.create_synergy(request.into_inner()).await {
        Ok(synergy) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": synergy
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/synergies/{id}",
    tag = "synergies",
    params(
        ("id" = String, Path, description = "Synergy id")
    ),
    responses(
        (status = 200, description = "Synergy deleted"),
        (status = 404, description = "Synergy not found")
    )
)]
pub async fn delete_synergy(
    synergy_service: web::Data<SynergyService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match synergy_service.delete_synergy(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn synergy_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/synergies")
            .route("", web::get().to(get_synergies))
            .route("", web::post().to(create_synergy))
            .route("/{id}", web::delete().to(delete_synergy)),
    );
}
