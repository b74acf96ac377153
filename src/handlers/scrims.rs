use crate::models::{CreateScrimRequest, ScrimResponse, ScrimStatistics, UpdateScrimRequest};
use crate::services::ScrimService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/scrims",
    tag = "scrims",
    responses(
        (status = 200, description = "All scrims, oldest first", body = [ScrimResponse])
    )
)]
pub async fn get_scrims(scrim_service: web::Data<ScrimService>) -> Result<HttpResponse> {
    match scrim_service.scrims().await {
        Ok(scrims) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": scrims
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/scrims/statistics",
    tag = "scrims",
    responses(
        (status = 200, description = "Aggregated scrim and draft statistics", body = ScrimStatistics)
    )
)]
pub async fn get_statistics(scrim_service: web::Data<ScrimService>) -> Result<HttpResponse> {
    match scrim_service.statistics().await {
        Ok(statistics) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": statistics
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/scrims",
    tag = "scrims",
    request_body = CreateScrimRequest,
    responses(
        (status = 200, description = "Scrim recorded"),
        (status = 400, description = "Missing opponent or score")
    )
)]
pub async fn create_scrim(
    scrim_service: web::Data<ScrimService>,
    request: web::Json<CreateScrimRequest>,
) -> Result<HttpResponse> {
    match scrim_service.create_scrim(request.into_inner()).await {
        Ok(scrim) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": scrim
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/api/scrims/{id}",
    tag = "scrims",
    request_body = UpdateScrimRequest,
    params(
        ("id" = String, Path, description = "Scrim id")
    ),
    responses(
        (status = 200, description = "Scrim updated"),
        (status = 404, description = "Scrim not found")
    )
)]
pub async fn update_scrim(
    scrim_service: web::Data<ScrimService>,
    path: web::Path<String>,
    request: web::Json<UpdateScrimRequest>,
) -> Result<HttpResponse> {
    let scrim_id = path.into_inner();

    match scrim_service
        .update_scrim(&scrim_id, request.into_inner())
        .await
    {
        Ok(scrim) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": scrim
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/scrims/{id}",
    tag = "scrims",
    params(
        ("id" = String, Path, description = "Scrim id")
    ),
    responses(
        (status = 200, description = "Scrim deleted"),
        (status = 404, description = "Scrim not found")
    )
)]
pub async fn delete_scrim(
    scrim_service: web::Data<ScrimService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match scrim_service.delete_scrim(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn scrim_config(cfg: &mut web::ServiceConfig) {
    // The literal /statistics route is registered ahead of the {id} matchers
    cfg.service(
        web::scope("/scrims")
            .route("/statistics", web::get().to(get_statistics))
            .route("", web::get().to(get_scrims))
            .route("", web::post().to(create_scrim))
            .route("/{id}", web::put().to(update_scrim))
            .route("/{id}", web::delete().to(delete_scrim)),
    );
}
