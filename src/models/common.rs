use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Deserializer, Serialize};

/// Plain string-array JSON column (ban lists).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

/// Deserializer for partial-update payloads that must distinguish "field
/// absent" (outer `None`, leave the column alone) from "field set to null"
/// (`Some(None)`, clear the column). Pair with `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
