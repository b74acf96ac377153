use crate::entities::{drafts, scrims};
use crate::error::{AppError, AppResult};
use crate::models::{
    ChampionUsage, CompositionList, CreateScrimRequest, DailyPerformance, DraftPerformance,
    GameDraftList, ScrimResponse, ScrimStatistics, UpdateScrimRequest,
};
use crate::utils::require_non_blank;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Clone)]
pub struct ScrimService {
    pool: DatabaseConnection,
}

impl ScrimService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn scrims(&self) -> AppResult<Vec<ScrimResponse>> {
        let scrims = scrims::Entity::find()
            .order_by_asc(scrims::Column::Date)
            .all(&self.pool)
            .await?;
        Ok(scrims.into_iter().map(ScrimResponse::from).collect())
    }

    pub async fn create_scrim(&self, request: CreateScrimRequest) -> AppResult<ScrimResponse> {
        require_non_blank("opponent", &request.opponent)?;
        require_non_blank("score", &request.score)?;

        let scrim = scrims::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            date: Set(Utc::now()),
            opponent: Set(request.opponent),
            is_win: Set(request.is_win),
            score: Set(request.score),
            comments: Set(request.comments.unwrap_or_default()),
            number_of_games: Set(request.number_of_games),
            compositions: Set(request.compositions.map(CompositionList)),
            game_drafts: Set(request.game_drafts.map(GameDraftList)),
        }
        .insert(&self.pool)
        .await?;

        Ok(scrim.into())
    }

    /// Partial update; `date` is server-assigned and immutable.
    pub async fn update_scrim(
        &self,
        id: &str,
        request: UpdateScrimRequest,
    ) -> AppResult<ScrimResponse> {
        if let Some(opponent) = &request.opponent {
            require_non_blank("opponent", opponent)?;
        }
        if let Some(score) = &request.score {
            require_non_blank("score", score)?;
        }

        let mut model = scrims::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Scrim {id} not found")))?
            .into_active_model();

        if let Some(opponent) = request.opponent {
            model.opponent = Set(opponent);
        }
        if let Some(is_win) = request.is_win {
            model.is_win = Set(is_win);
        }
        if let Some(score) = request.score {
            model.score = Set(score);
        }
        if let Some(comments) = request.comments {
            model.comments = Set(comments);
        }
        if let Some(number_of_games) = request.number_of_games {
            model.number_of_games = Set(number_of_games);
        }
        if let Some(compositions) = request.compositions {
            model.compositions = Set(compositions.map(CompositionList));
        }
        if let Some(game_drafts) = request.game_drafts {
            model.game_drafts = Set(game_drafts.map(GameDraftList));
        }

        let updated = model.update(&self.pool).await?;
        Ok(updated.into())
    }

    pub async fn delete_scrim(&self, id: &str) -> AppResult<()> {
        let result = scrims::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Scrim {id} not found")));
        }
        Ok(())
    }

    /// Full recomputation over the current scrim and draft snapshots; nothing
    /// is cached or maintained incrementally.
    pub async fn statistics(&self) -> AppResult<ScrimStatistics> {
        let scrims = scrims::Entity::find().all(&self.pool).await?;
        let drafts = drafts::Entity::find().all(&self.pool).await?;
        Ok(compute_statistics(&scrims, &drafts))
    }
}

fn percentage(part: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as i64
}

/// Aggregates the scrim/draft snapshots into the statistics report.
///
/// Draft tallies count one game per game-draft link, win or loss taken from
/// the scrim's overall result; links to draft ids that no longer exist still
/// count, referential integrity is deliberately not enforced here.
pub fn compute_statistics(scrims: &[scrims::Model], drafts: &[drafts::Model]) -> ScrimStatistics {
    let total_scrims = scrims.len() as i64;
    let wins = scrims.iter().filter(|s| s.is_win).count() as i64;
    let losses = total_scrims - wins;
    let winrate = percentage(wins, total_scrims);

    struct DraftTally {
        wins: i64,
        losses: i64,
        total: i64,
    }

    let mut draft_usage: BTreeMap<String, DraftTally> = BTreeMap::new();
    for scrim in scrims {
        let Some(links) = &scrim.game_drafts else {
            continue;
        };
        for link in &links.0 {
            if link.draft_id.is_empty() {
                continue;
            }
            let tally = draft_usage
                .entry(link.draft_id.clone())
                .or_insert(DraftTally {
                    wins: 0,
                    losses: 0,
                    total: 0,
                });
            tally.total += 1;
            if scrim.is_win {
                tally.wins += 1;
            } else {
                tally.losses += 1;
            }
        }
    }

    let mut draft_performance: Vec<DraftPerformance> = draft_usage
        .into_iter()
        .map(|(draft_id, tally)| DraftPerformance {
            draft_id,
            wins: tally.wins,
            losses: tally.losses,
            winrate: percentage(tally.wins, tally.total),
            total: tally.total,
        })
        .collect();
    draft_performance.sort_by(|a, b| b.total.cmp(&a.total));

    let mut champion_usage: BTreeMap<String, i64> = BTreeMap::new();
    for draft in drafts {
        for slot in draft.champion_slot_ids().into_iter().flatten() {
            if slot.is_empty() {
                continue;
            }
            *champion_usage.entry(slot.clone()).or_insert(0) += 1;
        }
    }

    let mut top_champions: Vec<ChampionUsage> = champion_usage
        .into_iter()
        .map(|(champion_id, count)| ChampionUsage { champion_id, count })
        .collect();
    top_champions.sort_by(|a, b| b.count.cmp(&a.count));
    top_champions.truncate(10);

    let mut by_date: BTreeMap<String, (i64, i64)> = BTreeMap::new();
    for scrim in scrims {
        let date_key = scrim.date.format("%Y-%m-%d").to_string();
        let (victories, defeats) = by_date.entry(date_key).or_insert((0, 0));
        if scrim.is_win {
            *victories += 1;
        } else {
            *defeats += 1;
        }
    }

    // BTreeMap keys come out sorted; lexicographic order on YYYY-MM-DD is
    // chronological
    let performance_over_time: Vec<DailyPerformance> = by_date
        .into_iter()
        .map(|(date, (victories, defeats))| DailyPerformance {
            date,
            victories,
            defeats,
            total: victories + defeats,
        })
        .collect();

    ScrimStatistics {
        total_scrims,
        wins,
        losses,
        winrate,
        draft_performance,
        top_champions,
        performance_over_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameDraftLink, StringList};
    use chrono::{TimeZone, Utc};

    fn scrim(is_win: bool) -> scrims::Model {
        scrims::Model {
            id: Uuid::new_v4().to_string(),
            date: Utc.with_ymd_and_hms(2026, 8, 1, 18, 0, 0).unwrap(),
            opponent: "Team Rival".to_string(),
            is_win,
            score: "2-1".to_string(),
            comments: String::new(),
            number_of_games: None,
            compositions: None,
            game_drafts: None,
        }
    }

    fn scrim_with_links(is_win: bool, draft_ids: &[&str]) -> scrims::Model {
        let links = draft_ids
            .iter()
            .enumerate()
            .map(|(i, id)| GameDraftLink {
                game_number: i as i32 + 1,
                draft_id: id.to_string(),
            })
            .collect();
        scrims::Model {
            game_drafts: Some(GameDraftList(links)),
            ..scrim(is_win)
        }
    }

    fn draft_with_slots(id: &str, team: [Option<&str>; 5], enemy: [Option<&str>; 5]) -> drafts::Model {
        drafts::Model {
            id: id.to_string(),
            name: format!("draft {id}"),
            created_at: Utc.with_ymd_and_hms(2026, 7, 30, 10, 0, 0).unwrap(),
            team_top_champion_id: team[0].map(str::to_string),
            team_jgl_champion_id: team[1].map(str::to_string),
            team_mid_champion_id: team[2].map(str::to_string),
            team_adc_champion_id: team[3].map(str::to_string),
            team_sup_champion_id: team[4].map(str::to_string),
            enemy_top_champion_id: enemy[0].map(str::to_string),
            enemy_jgl_champion_id: enemy[1].map(str::to_string),
            enemy_mid_champion_id: enemy[2].map(str::to_string),
            enemy_adc_champion_id: enemy[3].map(str::to_string),
            enemy_sup_champion_id: enemy[4].map(str::to_string),
            team_bans: StringList::default(),
            enemy_bans: StringList::default(),
        }
    }

    #[test]
    fn test_winrate_rollup() {
        let mut scrims = vec![];
        for _ in 0..7 {
            scrims.push(scrim(true));
        }
        for _ in 0..3 {
            scrims.push(scrim(false));
        }

        let stats = compute_statistics(&scrims, &[]);
        assert_eq!(stats.total_scrims, 10);
        assert_eq!(stats.wins, 7);
        assert_eq!(stats.losses, 3);
        assert_eq!(stats.wins + stats.losses, stats.total_scrims);
        assert_eq!(stats.winrate, 70);
    }

    #[test]
    fn test_zero_scrims_has_zero_winrate() {
        let stats = compute_statistics(&[], &[]);
        assert_eq!(stats.total_scrims, 0);
        assert_eq!(stats.winrate, 0);
        assert!(stats.draft_performance.is_empty());
        assert!(stats.performance_over_time.is_empty());
    }

    #[test]
    fn test_winrate_rounds_to_nearest() {
        let scrims = vec![scrim(true), scrim(true), scrim(false)];
        // 2/3 = 66.67 rounds to 67
        assert_eq!(compute_statistics(&scrims, &[]).winrate, 67);
    }

    #[test]
    fn test_draft_performance_accumulates_across_scrims() {
        let scrims = vec![
            scrim_with_links(true, &["D1"]),
            scrim_with_links(false, &["D1"]),
        ];

        let stats = compute_statistics(&scrims, &[]);
        assert_eq!(stats.draft_performance.len(), 1);
        let d1 = &stats.draft_performance[0];
        assert_eq!(d1.draft_id, "D1");
        assert_eq!(d1.wins, 1);
        assert_eq!(d1.losses, 1);
        assert_eq!(d1.total, 2);
        assert_eq!(d1.winrate, 50);
    }

    #[test]
    fn test_draft_performance_counts_each_game_link() {
        // Three game links in one winning scrim count three wins for D1
        let scrims = vec![scrim_with_links(true, &["D1", "D1", "D1"])];

        let stats = compute_statistics(&scrims, &[]);
        assert_eq!(stats.draft_performance[0].wins, 3);
        assert_eq!(stats.draft_performance[0].total, 3);
    }

    #[test]
    fn test_draft_performance_keeps_unknown_draft_ids() {
        // No draft record for "ghost" exists; its games still count
        let scrims = vec![scrim_with_links(true, &["ghost"])];

        let stats = compute_statistics(&scrims, &[]);
        assert_eq!(stats.draft_performance.len(), 1);
        assert_eq!(stats.draft_performance[0].draft_id, "ghost");
        assert_eq!(stats.draft_performance[0].total, 1);
    }

    #[test]
    fn test_draft_performance_sorted_by_total_desc() {
        let scrims = vec![
            scrim_with_links(true, &["rare"]),
            scrim_with_links(true, &["common", "common"]),
            scrim_with_links(false, &["common"]),
        ];

        let stats = compute_statistics(&scrims, &[]);
        assert_eq!(stats.draft_performance[0].draft_id, "common");
        assert_eq!(stats.draft_performance[0].total, 3);
        assert_eq!(stats.draft_performance[1].draft_id, "rare");
    }

    #[test]
    fn test_top_champions_counts_both_sides() {
        let drafts = vec![
            draft_with_slots(
                "d1",
                [Some("Ahri"), None, None, None, None],
                [Some("Zed"), None, None, None, None],
            ),
            draft_with_slots("d2", [Some("Ahri"), None, None, None, None], [None; 5]),
        ];

        let stats = compute_statistics(&[], &drafts);
        let ahri = stats
            .top_champions
            .iter()
            .find(|c| c.champion_id == "Ahri")
            .unwrap();
        let zed = stats
            .top_champions
            .iter()
            .find(|c| c.champion_id == "Zed")
            .unwrap();
        assert_eq!(ahri.count, 2);
        assert_eq!(zed.count, 1);

        // Twice-used champion ranks at or above a once-used one
        let ahri_pos = stats
            .top_champions
            .iter()
            .position(|c| c.champion_id == "Ahri")
            .unwrap();
        let zed_pos = stats
            .top_champions
            .iter()
            .position(|c| c.champion_id == "Zed")
            .unwrap();
        assert!(ahri_pos < zed_pos);
    }

    #[test]
    fn test_top_champions_truncates_to_ten() {
        let names: Vec<String> = (0..12).map(|i| format!("champ{i:02}")).collect();
        let drafts: Vec<drafts::Model> = names
            .iter()
            .map(|name| {
                draft_with_slots(name, [Some(name.as_str()), None, None, None, None], [None; 5])
            })
            .collect();

        let stats = compute_statistics(&[], &drafts);
        assert_eq!(stats.top_champions.len(), 10);
    }

    #[test]
    fn test_performance_over_time_buckets_by_utc_day() {
        let mut morning = scrim(true);
        morning.date = Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap();
        let mut evening = scrim(false);
        evening.date = Utc.with_ymd_and_hms(2026, 8, 1, 22, 30, 0).unwrap();
        let mut next_day = scrim(true);
        next_day.date = Utc.with_ymd_and_hms(2026, 8, 2, 11, 0, 0).unwrap();

        // Out of order on purpose; output must be ascending by date
        let stats = compute_statistics(&[next_day, morning, evening], &[]);

        assert_eq!(stats.performance_over_time.len(), 2);
        let first = &stats.performance_over_time[0];
        assert_eq!(first.date, "2026-08-01");
        assert_eq!(first.victories, 1);
        assert_eq!(first.defeats, 1);
        assert_eq!(first.total, 2);
        let second = &stats.performance_over_time[1];
        assert_eq!(second.date, "2026-08-02");
        assert_eq!(second.total, 1);
    }

    #[test]
    fn test_statistics_are_deterministic() {
        let scrims = vec![
            scrim_with_links(true, &["D1", "D2"]),
            scrim_with_links(false, &["D2"]),
            scrim(true),
        ];
        let drafts = vec![draft_with_slots(
            "D1",
            [Some("Ahri"), Some("LeeSin"), None, None, None],
            [Some("Zed"), None, None, None, None],
        )];

        let first = compute_statistics(&scrims, &drafts);
        let second = compute_statistics(&scrims, &drafts);
        assert_eq!(first, second);
    }
}
