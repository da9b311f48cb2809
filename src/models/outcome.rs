use mongodb::bson::Bson;
use serde::Serialize;
use serde_json::Value;

use crate::database::UpdateCounts;

/// Serialized shapes of the driver results, as echoed in `response`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    #[schema(value_type = String)]
    pub inserted_id: Value,
}

impl InsertOutcome {
    pub fn new(inserted_id: Bson) -> Self {
        let inserted_id = match inserted_id {
            Bson::ObjectId(oid) => Value::String(oid.to_hex()),
            other => other.into_relaxed_extjson(),
        };
        Self { acknowledged: true, inserted_id }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateCounts> for UpdateOutcome {
    fn from(counts: UpdateCounts) -> Self {
        Self {
            acknowledged: true,
            matched_count: counts.matched,
            modified_count: counts.modified,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteOutcome {
    pub fn new(deleted_count: u64) -> Self {
        Self { acknowledged: true, deleted_count }
    }
}
