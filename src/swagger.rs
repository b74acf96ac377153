use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::champions::get_champions,
        handlers::champions::update_roles,
        handlers::champions::evaluate_champion,
        handlers::drafts::get_drafts,
        handlers::drafts::create_draft,
        handlers::drafts::update_draft,
        handlers::drafts::delete_draft,
        handlers::drafts::create_variant,
        handlers::drafts::delete_variant,
        handlers::scrims::get_scrims,
        handlers::scrims::get_statistics,
        handlers::scrims::create_scrim,
        handlers::scrims::update_scrim,
        handlers::scrims::delete_scrim,
        handlers::players::get_players,
        handlers::players::create_player,
        handlers::players::delete_player,
        handlers::availability::get_availability,
        handlers::availability::upsert_availability,
        handlers::synergies::get_synergies,
        handlers::synergies::create_synergy,
        handlers::synergies::delete_synergy,
        handlers::patchnotes::get_patch_notes,
        handlers::patchnotes::create_patch_note,
        handlers::patchnotes::delete_patch_note,
    ),
    components(
        schemas(
            Role,
            ChampionResponse,
            ChampionWithEvaluation,
            EvaluationResponse,
            UpdateRolesRequest,
            EvaluateChampionRequest,
            DraftResponse,
            DraftVariantResponse,
            DraftWithDetails,
            CreateDraftRequest,
            UpdateDraftRequest,
            CreateDraftVariantRequest,
            Composition,
            GameDraftLink,
            ScrimResponse,
            CreateScrimRequest,
            UpdateScrimRequest,
            ScrimStatistics,
            DraftPerformance,
            ChampionUsage,
            DailyPerformance,
            PlayerResponse,
            CreatePlayerRequest,
            AvailabilityResponse,
            UpsertAvailabilityRequest,
            SynergyResponse,
            CreateSynergyRequest,
            PatchNoteResponse,
            CreatePatchNoteRequest,
        )
    ),
    tags(
        (name = "champions", description = "Champion catalog, roles and evaluations"),
        (name = "drafts", description = "Team drafts and variants"),
        (name = "scrims", description = "Practice matches and statistics"),
        (name = "players", description = "Team roster"),
        (name = "availability", description = "Per-weekday player availability"),
        (name = "synergies", description = "Champion synergy ratings"),
        (name = "patchnotes", description = "Patch notes")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
