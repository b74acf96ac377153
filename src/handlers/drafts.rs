use crate::models::{
    CreateDraftRequest, CreateDraftVariantRequest, DraftWithDetails, UpdateDraftRequest,
};
use crate::services::DraftService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/drafts",
    tag = "drafts",
    responses(
        (status = 200, description = "Drafts with variants and resolved champions", body = [DraftWithDetails])
    )
)]
pub async fn get_drafts(draft_service: web::Data<DraftService>) -> Result<HttpResponse> {
    match draft_service.drafts_with_details().await {
        Ok(drafts) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": drafts
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/drafts",
    tag = "drafts",
    request_body = CreateDraftRequest,
    responses(
        (status = 200, description = "Draft created"),
        (status = 400, description = "Missing draft name")
    )
)]
pub async fn create_draft(
    draft_service: web::Data<DraftService>,
    request: web::Json<CreateDraftRequest>,
) -> Result<HttpResponse> {
    match draft_service.create_draft(request.into_inner()).await {
        Ok(draft) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": draft
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/api/drafts/{id}",
    tag = "drafts",
    request_body = UpdateDraftRequest,
    params(
        ("id" = String, Path, description = "Draft id")
    ),
    responses(
        (status = 200, description = "Draft updated"),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn update_draft(
    draft_service: web::Data<DraftService>,
    path: web::Path<String>,
    request: web::Json<UpdateDraftRequest>,
) -> Result<HttpResponse> {
    let draft_id = path.into_inner();

    match draft_service
        .update_draft(&draft_id, request.into_inner())
        .await
    {
        Ok(draft) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": draft
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/drafts/{id}",
    tag = "drafts",
    params(
        ("id" = String, Path, description = "Draft id")
    ),
    responses(
        (status = 200, description = "Draft and its variants deleted"),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn delete_draft(
    draft_service: web::Data<DraftService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match draft_service.delete_draft(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/drafts/{id}/variants",
    tag = "drafts",
    request_body = CreateDraftVariantRequest,
    params(
        ("id" = String, Path, description = "Draft id")
    ),
    responses(
        (status = 200, description = "Variant created"),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn create_variant(
    draft_service: web::Data<DraftService>,
    path: web::Path<String>,
    request: web::Json<CreateDraftVariantRequest>,
) -> Result<HttpResponse> {
    let draft_id = path.into_inner();

    match draft_service
        .create_variant(&draft_id, request.into_inner())
        .await
    {
        Ok(variant) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": variant
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/drafts/variants/{id}",
    tag = "drafts",
    params(
        ("id" = String, Path, description = "Variant id")
    ),
    responses(
        (status = 200, description = "Variant deleted"),
        (status = 404, description = "Variant not found")
    )
)]
pub async fn delete_variant(
    draft_service: web::Data<DraftService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match draft_service.delete_variant(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn draft_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/drafts")
            .route("", web::get().to(get_drafts))
            .route("", web::post().to(create_draft))
            .route("/variants/{id}", web::delete().to(delete_variant))
            .route("/{id}", web::put().to(update_draft))
            .route("/{id}", web::delete().to(delete_draft))
            .route("/{id}/variants", web::post().to(create_variant)),
    );
}
