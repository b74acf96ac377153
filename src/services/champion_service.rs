use crate::entities::{champion_evaluations, champions};
use crate::error::{AppError, AppResult};
use crate::models::{
    ChampionResponse, ChampionWithEvaluation, EvaluateChampionRequest, EvaluationResponse,
    RoleList, UpdateRolesRequest,
};
use crate::utils::{parse_roles, require_non_blank, validate_rating};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Clone)]
pub struct ChampionService {
    pool: DatabaseConnection,
}

impl ChampionService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Every champion with its evaluation attached when one exists.
    pub async fn champions_with_evaluations(&self) -> AppResult<Vec<ChampionWithEvaluation>> {
        let champions = champions::Entity::find()
            .order_by_asc(champions::Column::Name)
            .all(&self.pool)
            .await?;
        let evaluations = champion_evaluations::Entity::find().all(&self.pool).await?;

        Ok(attach_evaluations(champions, evaluations))
    }

    /// Replaces a champion's role set with the submitted one. Tokens are
    /// validated before the store is touched.
    pub async fn update_roles(
        &self,
        champion_id: &str,
        request: UpdateRolesRequest,
    ) -> AppResult<ChampionResponse> {
        let roles = parse_roles(&request.roles)?;

        let mut model = champions::Entity::find_by_id(champion_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Champion {champion_id} not found")))?
            .into_active_model();
        model.roles = Set(RoleList(roles));
        let updated = model.update(&self.pool).await?;

        Ok(updated.into())
    }

    /// Merge-upsert of a partial evaluation: creates the row with zeros for
    /// omitted fields, or overwrites only the submitted fields of an existing
    /// row. The read-merge-write runs in a transaction holding a row lock so
    /// two concurrent partial updates cannot drop each other's fields.
    pub async fn evaluate(&self, request: EvaluateChampionRequest) -> AppResult<EvaluationResponse> {
        require_non_blank("championId", &request.champion_id)?;
        for (field, value) in request.submitted_ratings() {
            validate_rating(field, value)?;
        }

        let champion_exists = champions::Entity::find_by_id(request.champion_id.as_str())
            .one(&self.pool)
            .await?
            .is_some();
        if !champion_exists {
            return Err(AppError::NotFound(format!(
                "Champion {} not found",
                request.champion_id
            )));
        }

        let txn = self.pool.begin().await?;

        let existing = champion_evaluations::Entity::find()
            .filter(champion_evaluations::Column::ChampionId.eq(request.champion_id.as_str()))
            .lock_exclusive()
            .one(&txn)
            .await?;

        let saved = match existing {
            Some(row) => {
                let mut merged = row.clone();
                request.apply_to(&mut merged);

                let mut model = row.into_active_model();
                model.prio_lane = Set(merged.prio_lane);
                model.strongside = Set(merged.strongside);
                model.weakside = Set(merged.weakside);
                model.engage = Set(merged.engage);
                model.peeling = Set(merged.peeling);
                model.split = Set(merged.split);
                model.hypercarry = Set(merged.hypercarry);
                model.controle = Set(merged.controle);
                model.update(&txn).await?
            }
            None => {
                let mut merged = blank_evaluation(&request.champion_id);
                request.apply_to(&mut merged);

                champion_evaluations::ActiveModel {
                    id: Set(merged.id),
                    champion_id: Set(merged.champion_id),
                    prio_lane: Set(merged.prio_lane),
                    strongside: Set(merged.strongside),
                    weakside: Set(merged.weakside),
                    engage: Set(merged.engage),
                    peeling: Set(merged.peeling),
                    split: Set(merged.split),
                    hypercarry: Set(merged.hypercarry),
                    controle: Set(merged.controle),
                }
                .insert(&txn)
                .await?
            }
        };

        txn.commit().await?;

        Ok(saved.into())
    }
}

fn blank_evaluation(champion_id: &str) -> champion_evaluations::Model {
    champion_evaluations::Model {
        id: Uuid::new_v4().to_string(),
        champion_id: champion_id.to_string(),
        prio_lane: 0,
        strongside: 0,
        weakside: 0,
        engage: 0,
        peeling: 0,
        split: 0,
        hypercarry: 0,
        controle: 0,
    }
}

/// Application-side join over the two full snapshots, indexed by champion id.
fn attach_evaluations(
    champions: Vec<champions::Model>,
    evaluations: Vec<champion_evaluations::Model>,
) -> Vec<ChampionWithEvaluation> {
    let mut by_champion: HashMap<String, champion_evaluations::Model> = evaluations
        .into_iter()
        .map(|evaluation| (evaluation.champion_id.clone(), evaluation))
        .collect();

    champions
        .into_iter()
        .map(|champion| {
            let evaluation = by_champion.remove(&champion.id);
            ChampionWithEvaluation::new(champion, evaluation)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoleList;

    fn champion(id: &str) -> champions::Model {
        champions::Model {
            id: id.to_string(),
            name: id.to_string(),
            image_url: format!("https://cdn.example/{id}.png"),
            key: "1".to_string(),
            roles: RoleList::default(),
        }
    }

    #[test]
    fn test_attach_evaluations_pairs_by_champion_id() {
        let mut rated = blank_evaluation("Ahri");
        rated.engage = 2;

        let result = attach_evaluations(vec![champion("Ahri"), champion("Zed")], vec![rated]);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].evaluation.as_ref().unwrap().engage, 2);
        // No evaluation means the association is absent, not zero-filled
        assert!(result[1].evaluation.is_none());
    }

    #[test]
    fn test_merge_creates_with_zeros_for_omitted_fields() {
        let request = EvaluateChampionRequest {
            champion_id: "Ahri".to_string(),
            engage: Some(2),
            ..Default::default()
        };

        let mut row = blank_evaluation("Ahri");
        request.apply_to(&mut row);

        assert_eq!(row.engage, 2);
        assert_eq!(row.prio_lane, 0);
        assert_eq!(row.split, 0);
    }

    #[test]
    fn test_sequential_partial_updates_keep_earlier_fields() {
        let mut row = blank_evaluation("Ahri");

        let first = EvaluateChampionRequest {
            champion_id: "Ahri".to_string(),
            engage: Some(2),
            ..Default::default()
        };
        first.apply_to(&mut row);

        let second = EvaluateChampionRequest {
            champion_id: "Ahri".to_string(),
            split: Some(3),
            ..Default::default()
        };
        second.apply_to(&mut row);

        assert_eq!(row.engage, 2);
        assert_eq!(row.split, 3);
        assert_eq!(row.hypercarry, 0);
    }

    #[test]
    fn test_submitted_ratings_only_lists_present_fields() {
        let request = EvaluateChampionRequest {
            champion_id: "Ahri".to_string(),
            prio_lane: Some(1),
            controle: Some(3),
            ..Default::default()
        };

        let submitted = request.submitted_ratings();
        assert_eq!(submitted, vec![("prioLane", 1), ("controle", 3)]);
    }

    #[test]
    fn test_out_of_range_rating_is_rejected() {
        let request = EvaluateChampionRequest {
            champion_id: "Ahri".to_string(),
            weakside: Some(4),
            ..Default::default()
        };

        let checked = request
            .submitted_ratings()
            .into_iter()
            .try_for_each(|(field, value)| validate_rating(field, value));
        assert!(checked.is_err());
    }
}
