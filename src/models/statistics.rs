use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Win/loss tally for one draft across every game it was linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftPerformance {
    pub draft_id: String,
    pub wins: i64,
    pub losses: i64,
    pub total: i64,
    pub winrate: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChampionUsage {
    pub champion_id: String,
    pub count: i64,
}

/// One calendar day (UTC) of scrim results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyPerformance {
    pub date: String,
    pub victories: i64,
    pub defeats: i64,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScrimStatistics {
    pub total_scrims: i64,
    pub wins: i64,
    pub losses: i64,
    pub winrate: i64,
    pub draft_performance: Vec<DraftPerformance>,
    pub top_champions: Vec<ChampionUsage>,
    pub performance_over_time: Vec<DailyPerformance>,
}
