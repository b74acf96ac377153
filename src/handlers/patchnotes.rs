use crate::models::{CreatePatchNoteRequest, PatchNoteResponse};
use crate::services::PatchNoteService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/patchnotes",
    tag = "patchnotes",
    responses(
        (status = 200, description = "Patch notes, newest first", body = [PatchNoteResponse])
    )
)]
pub async fn get_patch_notes(
    patch_note_service: web::Data<PatchNoteService>,
) -> Result<HttpResponse> {
    match patch_note_service.patch_notes().await {
        Ok(notes) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": notes
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/patchnotes",
    tag = "patchnotes",
    request_body = CreatePatchNoteRequest,
    responses(
        (status = 200, description = "Patch note created"),
        (status = 400, description = "Missing version or title, or invalid category")
    )
)]
pub async fn create_patch_note(
    patch_note_service: web::Data<PatchNoteService>,
    request: web::Json<CreatePatchNoteRequest>,
) -> Result<HttpResponse> {
    match patch_note_service
        .create_patch_note(request.into_inner())
        .await
    {
        Ok(note) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": note
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/patchnotes/{id}",
    tag = "patchnotes",
    params(
        ("id" = String, Path, description = "Patch note id")
    ),
    responses(
        (status = 200, description = "Patch note deleted"),
        (status = 404, description = "Patch note not found")
    )
)]
pub async fn delete_patch_note(
    patch_note_service: web::Data<PatchNoteService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match patch_note_service
        .delete_patch_note(&path.into_inner())
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn patchnote_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/patchnotes")
            .route("", web::get().to(get_patch_notes))
            .route("", web::post().to(create_patch_note))
            .route("/{id}", web::delete().to(delete_patch_note)),
    );
}
