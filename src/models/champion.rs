use crate::entities::{champion_evaluations, champions};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The five draft positions a champion can be flagged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Top,
    Jgl,
    Mid,
    Adc,
    Sup,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jgl, Role::Mid, Role::Adc, Role::Sup];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jgl => "JGL",
            Role::Mid => "MID",
            Role::Adc => "ADC",
            Role::Sup => "SUP",
        }
    }

    pub fn parse(token: &str) -> Option<Role> {
        match token {
            "TOP" => Some(Role::Top),
            "JGL" => Some(Role::Jgl),
            "MID" => Some(Role::Mid),
            "ADC" => Some(Role::Adc),
            "SUP" => Some(Role::Sup),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Champion roles JSON column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct RoleList(pub Vec<Role>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChampionResponse {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub key: String,
    pub roles: Vec<Role>,
}

impl From<champions::Model> for ChampionResponse {
    fn from(model: champions::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image_url: model.image_url,
            key: model.key,
            roles: model.roles.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    pub id: String,
    pub champion_id: String,
    pub prio_lane: i32,
    pub strongside: i32,
    pub weakside: i32,
    pub engage: i32,
    pub peeling: i32,
    pub split: i32,
    pub hypercarry: i32,
    pub controle: i32,
}

impl From<champion_evaluations::Model> for EvaluationResponse {
    fn from(model: champion_evaluations::Model) -> Self {
        Self {
            id: model.id,
            champion_id: model.champion_id,
            prio_lane: model.prio_lane,
            strongside: model.strongside,
            weakside: model.weakside,
            engage: model.engage,
            peeling: model.peeling,
            split: model.split,
            hypercarry: model.hypercarry,
            controle: model.controle,
        }
    }
}

/// Champion with its evaluation attached when one exists. The `evaluation`
/// key is omitted entirely for unrated champions so consumers can tell
/// "never rated" apart from "rated all zeros".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChampionWithEvaluation {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub key: String,
    pub roles: Vec<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationResponse>,
}

impl ChampionWithEvaluation {
    pub fn new(
        champion: champions::Model,
        evaluation: Option<champion_evaluations::Model>,
    ) -> Self {
        Self {
            id: champion.id,
            name: champion.name,
            image_url: champion.image_url,
            key: champion.key,
            roles: champion.roles.0,
            evaluation: evaluation.map(EvaluationResponse::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRolesRequest {
    pub roles: Vec<String>,
}

/// Partial evaluation submission. The eight rating fields are an explicit
/// whitelist; unknown keys are rejected at deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EvaluateChampionRequest {
    pub champion_id: String,
    pub prio_lane: Option<i32>,
    pub strongside: Option<i32>,
    pub weakside: Option<i32>,
    pub engage: Option<i32>,
    pub peeling: Option<i32>,
    pub split: Option<i32>,
    pub hypercarry: Option<i32>,
    pub controle: Option<i32>,
}

impl EvaluateChampionRequest {
    /// Wire-name/value pairs for the ratings present in the payload.
    pub fn submitted_ratings(&self) -> Vec<(&'static str, i32)> {
        [
            ("prioLane", self.prio_lane),
            ("strongside", self.strongside),
            ("weakside", self.weakside),
            ("engage", self.engage),
            ("peeling", self.peeling),
            ("split", self.split),
            ("hypercarry", self.hypercarry),
            ("controle", self.controle),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }

    /// Overwrite only the submitted fields; omitted fields keep their value.
    pub fn apply_to(&self, row: &mut champion_evaluations::Model) {
        if let Some(v) = self.prio_lane {
            row.prio_lane = v;
        }
        if let Some(v) = self.strongside {
            row.strongside = v;
        }
        if let Some(v) = self.weakside {
            row.weakside = v;
        }
        if let Some(v) = self.engage {
            row.engage = v;
        }
        if let Some(v) = self.peeling {
            row.peeling = v;
        }
        if let Some(v) = self.split {
            row.split = v;
        }
        if let Some(v) = self.hypercarry {
            row.hypercarry = v;
        }
        if let Some(v) = self.controle {
            row.controle = v;
        }
    }
}
