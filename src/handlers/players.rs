use crate::models::{CreatePlayerRequest, PlayerResponse};
use crate::services::PlayerService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/players",
    tag = "players",
    responses(
        (status = 200, description = "Team roster", body = [PlayerResponse])
    )
)]
pub async fn get_players(player_service: web::Data<PlayerService>) -> Result<HttpResponse> {
    match player_service.players().await {
        Ok(players) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": players
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/players",
    tag = "players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 200, description = "Player created"),
        (status = 400, description = "Missing name or role")
    )
)]
pub async fn create_player(
    player_service: web::Data<PlayerService>,
    request: web::Json<CreatePlayerRequest>,
) -> Result<HttpResponse> {
    match player_service.create_player(request.into_inner()).await {
        Ok(player) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": player
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = "players",
    params(
        ("id" = String, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Player and their availability deleted"),
        (status = 404, description = "Player not found")
    )
)]
pub async fn delete_player(
    player_service: web::Data<PlayerService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match player_service.delete_player(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn player_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/players")
            .route("", web::get().to(get_players))
            .route("", web::post().to(create_player))
            .route("/{id}", web::delete().to(delete_player)),
    );
}
