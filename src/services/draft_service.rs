use crate::entities::{champions, draft_variants, drafts};
use crate::error::{AppError, AppResult};
use crate::models::{
    ChampionResponse, CreateDraftRequest, CreateDraftVariantRequest, DraftResponse,
    DraftVariantResponse, DraftWithDetails, StringList, UpdateDraftRequest,
};
use crate::utils::require_non_blank;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Clone)]
pub struct DraftService {
    pool: DatabaseConnection,
}

impl DraftService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Every draft with its variants and resolved role slots, newest first.
    pub async fn drafts_with_details(&self) -> AppResult<Vec<DraftWithDetails>> {
        let drafts = drafts::Entity::find()
            .order_by_desc(drafts::Column::CreatedAt)
            .all(&self.pool)
            .await?;
        let variants = draft_variants::Entity::find().all(&self.pool).await?;
        let champions = champions::Entity::find().all(&self.pool).await?;

        Ok(attach_details(drafts, variants, champions))
    }

    pub async fn create_draft(&self, request: CreateDraftRequest) -> AppResult<DraftResponse> {
        require_non_blank("name", &request.name)?;
        let (team_bans, enemy_bans) = request.bans();

        let draft = drafts::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(request.name),
            created_at: Set(Utc::now()),
            team_top_champion_id: Set(request.team_top_champion_id),
            team_jgl_champion_id: Set(request.team_jgl_champion_id),
            team_mid_champion_id: Set(request.team_mid_champion_id),
            team_adc_champion_id: Set(request.team_adc_champion_id),
            team_sup_champion_id: Set(request.team_sup_champion_id),
            enemy_top_champion_id: Set(request.enemy_top_champion_id),
            enemy_jgl_champion_id: Set(request.enemy_jgl_champion_id),
            enemy_mid_champion_id: Set(request.enemy_mid_champion_id),
            enemy_adc_champion_id: Set(request.enemy_adc_champion_id),
            enemy_sup_champion_id: Set(request.enemy_sup_champion_id),
            team_bans: Set(team_bans),
            enemy_bans: Set(enemy_bans),
        }
        .insert(&self.pool)
        .await?;

        Ok(draft.into())
    }

    /// Partial update; `created_at` is immutable.
    pub async fn update_draft(
        &self,
        id: &str,
        request: UpdateDraftRequest,
    ) -> AppResult<DraftResponse> {
        if let Some(name) = &request.name {
            require_non_blank("name", name)?;
        }

        let mut model = drafts::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Draft {id} not found")))?
            .into_active_model();

        if let Some(name) = request.name {
            model.name = Set(name);
        }
        if let Some(slot) = request.team_top_champion_id {
            model.team_top_champion_id = Set(slot);
        }
        if let Some(slot) = request.team_jgl_champion_id {
            model.team_jgl_champion_id = Set(slot);
        }
        if let Some(slot) = request.team_mid_champion_id {
            model.team_mid_champion_id = Set(slot);
        }
        if let Some(slot) = request.team_adc_champion_id {
            model.team_adc_champion_id = Set(slot);
        }
        if let Some(slot) = request.team_sup_champion_id {
            model.team_sup_champion_id = Set(slot);
        }
        if let Some(slot) = request.enemy_top_champion_id {
            model.enemy_top_champion_id = Set(slot);
        }
        if let Some(slot) = request.enemy_jgl_champion_id {
            model.enemy_jgl_champion_id = Set(slot);
        }
        if let Some(slot) = request.enemy_mid_champion_id {
            model.enemy_mid_champion_id = Set(slot);
        }
        if let Some(slot) = request.enemy_adc_champion_id {
            model.enemy_adc_champion_id = Set(slot);
        }
        if let Some(slot) = request.enemy_sup_champion_id {
            model.enemy_sup_champion_id = Set(slot);
        }
        if let Some(bans) = request.team_bans {
            model.team_bans = Set(StringList(bans));
        }
        if let Some(bans) = request.enemy_bans {
            model.enemy_bans = Set(StringList(bans));
        }

        let updated = model.update(&self.pool).await?;
        Ok(updated.into())
    }

    /// Variants go with the draft (ON DELETE CASCADE).
    pub async fn delete_draft(&self, id: &str) -> AppResult<()> {
        let result = drafts::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Draft {id} not found")));
        }
        Ok(())
    }

    pub async fn create_variant(
        &self,
        draft_id: &str,
        request: CreateDraftVariantRequest,
    ) -> AppResult<DraftVariantResponse> {
        require_non_blank("name", &request.name)?;

        let draft_exists = drafts::Entity::find_by_id(draft_id)
            .one(&self.pool)
            .await?
            .is_some();
        if !draft_exists {
            return Err(AppError::NotFound(format!("Draft {draft_id} not found")));
        }

        let variant = draft_variants::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            draft_id: Set(draft_id.to_string()),
            name: Set(request.name),
            top_champion_id: Set(request.top_champion_id),
            jgl_champion_id: Set(request.jgl_champion_id),
            mid_champion_id: Set(request.mid_champion_id),
            adc_champion_id: Set(request.adc_champion_id),
            sup_champion_id: Set(request.sup_champion_id),
        }
        .insert(&self.pool)
        .await?;

        Ok(variant.into())
    }

    pub async fn delete_variant(&self, id: &str) -> AppResult<()> {
        let result = draft_variants::Entity::delete_by_id(id)
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Draft variant {id} not found")));
        }
        Ok(())
    }
}

/// Application-side join: variants grouped by draft, role slots resolved
/// against the champion catalog. A stale champion id leaves just that slot
/// unresolved.
fn attach_details(
    drafts: Vec<drafts::Model>,
    variants: Vec<draft_variants::Model>,
    champions: Vec<champions::Model>,
) -> Vec<DraftWithDetails> {
    let champions_by_id: HashMap<String, ChampionResponse> = champions
        .into_iter()
        .map(|champion| (champion.id.clone(), ChampionResponse::from(champion)))
        .collect();

    let mut variants_by_draft: HashMap<String, Vec<DraftVariantResponse>> = HashMap::new();
    for variant in variants {
        variants_by_draft
            .entry(variant.draft_id.clone())
            .or_default()
            .push(DraftVariantResponse::from(variant));
    }

    let resolve = |slot: &Option<String>| -> Option<ChampionResponse> {
        slot.as_ref()
            .and_then(|id| champions_by_id.get(id))
            .cloned()
    };

    drafts
        .into_iter()
        .map(|draft| {
            let team_top_champion = resolve(&draft.team_top_champion_id);
            let team_jgl_champion = resolve(&draft.team_jgl_champion_id);
            let team_mid_champion = resolve(&draft.team_mid_champion_id);
            let team_adc_champion = resolve(&draft.team_adc_champion_id);
            let team_sup_champion = resolve(&draft.team_sup_champion_id);
            let enemy_top_champion = resolve(&draft.enemy_top_champion_id);
            let enemy_jgl_champion = resolve(&draft.enemy_jgl_champion_id);
            let enemy_mid_champion = resolve(&draft.enemy_mid_champion_id);
            let enemy_adc_champion = resolve(&draft.enemy_adc_champion_id);
            let enemy_sup_champion = resolve(&draft.enemy_sup_champion_id);
            let variants = variants_by_draft.remove(&draft.id).unwrap_or_default();

            DraftWithDetails {
                id: draft.id,
                name: draft.name,
                created_at: draft.created_at,
                team_top_champion_id: draft.team_top_champion_id,
                team_jgl_champion_id: draft.team_jgl_champion_id,
                team_mid_champion_id: draft.team_mid_champion_id,
                team_adc_champion_id: draft.team_adc_champion_id,
                team_sup_champion_id: draft.team_sup_champion_id,
                enemy_top_champion_id: draft.enemy_top_champion_id,
                enemy_jgl_champion_id: draft.enemy_jgl_champion_id,
                enemy_mid_champion_id: draft.enemy_mid_champion_id,
                enemy_adc_champion_id: draft.enemy_adc_champion_id,
                enemy_sup_champion_id: draft.enemy_sup_champion_id,
                team_bans: draft.team_bans.0,
                enemy_bans: draft.enemy_bans.0,
                variants,
                team_top_champion,
                team_jgl_champion,
                team_mid_champion,
                team_adc_champion,
                team_sup_champion,
                enemy_top_champion,
                enemy_jgl_champion,
                enemy_mid_champion,
                enemy_adc_champion,
                enemy_sup_champion,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoleList;
    use chrono::TimeZone;

    fn champion(id: &str) -> champions::Model {
        champions::Model {
            id: id.to_string(),
            name: id.to_string(),
            image_url: format!("https://cdn.example/{id}.png"),
            key: "1".to_string(),
            roles: RoleList::default(),
        }
    }

    fn draft(id: &str, team_top: Option<&str>, enemy_mid: Option<&str>) -> drafts::Model {
        drafts::Model {
            id: id.to_string(),
            name: format!("draft {id}"),
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
            team_top_champion_id: team_top.map(str::to_string),
            team_jgl_champion_id: None,
            team_mid_champion_id: None,
            team_adc_champion_id: None,
            team_sup_champion_id: None,
            enemy_top_champion_id: None,
            enemy_jgl_champion_id: None,
            enemy_mid_champion_id: enemy_mid.map(str::to_string),
            enemy_adc_champion_id: None,
            enemy_sup_champion_id: None,
            team_bans: StringList::default(),
            enemy_bans: StringList::default(),
        }
    }

    fn variant(id: &str, draft_id: &str) -> draft_variants::Model {
        draft_variants::Model {
            id: id.to_string(),
            draft_id: draft_id.to_string(),
            name: format!("variant {id}"),
            top_champion_id: None,
            jgl_champion_id: None,
            mid_champion_id: None,
            adc_champion_id: None,
            sup_champion_id: None,
        }
    }

    #[test]
    fn test_attach_details_resolves_both_sides() {
        let result = attach_details(
            vec![draft("d1", Some("Ahri"), Some("Zed"))],
            vec![],
            vec![champion("Ahri"), champion("Zed")],
        );

        assert_eq!(result[0].team_top_champion.as_ref().unwrap().id, "Ahri");
        assert_eq!(result[0].enemy_mid_champion.as_ref().unwrap().id, "Zed");
        assert!(result[0].team_jgl_champion.is_none());
    }

    #[test]
    fn test_stale_champion_id_degrades_to_absent_slot() {
        let result = attach_details(
            vec![draft("d1", Some("Removed"), Some("Zed"))],
            vec![],
            vec![champion("Zed")],
        );

        // The dangling id stays on the draft but resolves to nothing
        assert_eq!(result[0].team_top_champion_id.as_deref(), Some("Removed"));
        assert!(result[0].team_top_champion.is_none());
        assert_eq!(result[0].enemy_mid_champion.as_ref().unwrap().id, "Zed");
    }

    #[test]
    fn test_attach_details_groups_variants_by_draft() {
        let result = attach_details(
            vec![draft("d1", None, None), draft("d2", None, None)],
            vec![variant("v1", "d1"), variant("v2", "d2"), variant("v3", "d1")],
            vec![],
        );

        let d1 = result.iter().find(|d| d.id == "d1").unwrap();
        let d2 = result.iter().find(|d| d.id == "d2").unwrap();
        assert_eq!(d1.variants.len(), 2);
        assert_eq!(d2.variants.len(), 1);
        assert_eq!(d2.variants[0].id, "v2");
    }
}
