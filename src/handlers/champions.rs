use crate::models::{ChampionWithEvaluation, EvaluateChampionRequest, UpdateRolesRequest};
use crate::services::ChampionService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/champions",
    tag = "champions",
    responses(
        (status = 200, description = "Champion catalog with attached evaluations", body = [ChampionWithEvaluation])
    )
)]
pub async fn get_champions(champion_service: web::Data<ChampionService>) -> Result<HttpResponse> {
    match champion_service.champions_with_evaluations().await {
        Ok(champions) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": champions
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/api/champions/{id}/roles",
    tag = "champions",
    request_body = UpdateRolesRequest,
    params(
        ("id" = String, Path, description = "Champion id")
    ),
    responses(
        (status = 200, description = "Roles replaced"),
        (status = 400, description = "Invalid role token"),
        (status = 404, description = "Champion not found")
    )
)]
pub async fn update_roles(
    champion_service: web::Data<ChampionService>,
    path: web::Path<String>,
    request: web::Json<UpdateRolesRequest>,
) -> Result<HttpResponse> {
    let champion_id = path.into_inner();

    match champion_service
        .update_roles(&champion_id, request.into_inner())
        .await
    {
        Ok(champion) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": champion
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/champions/evaluate",
    tag = "champions",
    request_body = EvaluateChampionRequest,
    responses(
        (status = 200, description = "Merged evaluation"),
        (status = 400, description = "Rating out of range"),
        (status = 404, description = "Champion not found")
    )
)]
pub async fn evaluate_champion(
    champion_service: web::Data<ChampionService>,
    request: web::Json<EvaluateChampionRequest>,
) -> Result<HttpResponse> {
    match champion_service.evaluate(request.into_inner()).await {
        Ok(evaluation) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": evaluation
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn champion_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/champions")
            .route("", web::get().to(get_champions))
            .route("/evaluate", web::post().to(evaluate_champion))
            .route("/{id}/roles", web::put().to(update_roles)),
    );
}
