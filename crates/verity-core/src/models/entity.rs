use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Granularity of a data entity in the schema hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Table,
    Column,
}

/// The descriptor fields of a data entity that assertions attach to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntityDescriptor {
    pub id: String,
    pub kind: EntityKind,
    /// Hierarchy path, e.g. `warehouse.sales.orders.amount`.
    pub path: String,
    /// Declared data type (columns only).
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Owning table for columns.
    #[serde(default)]
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
