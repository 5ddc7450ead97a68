use crate::regions::RegionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Brief reference to one incident, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRef {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub classifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_type: Option<String>,
}

/// Incidents sharing one raw body-part label, as counted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPartRecord {
    /// Raw label exactly as it appeared in the uploaded records.
    pub name: String,
    pub count: u64,
    /// Share of all located incidents, in percent (0-100).
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage: Decimal,
    #[serde(default)]
    pub incidents: Vec<IncidentRef>,
}

/// Everything the records of one canonical region add up to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionAggregate {
    pub region_id: RegionId,
    pub count: u64,
    /// Sum of the record percentages. Not re-normalized.
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage: Decimal,
    pub incidents: Vec<IncidentRef>,
}

impl RegionAggregate {
    pub fn empty(region_id: RegionId) -> Self {
        Self {
            region_id,
            count: 0,
            percentage: Decimal::ZERO,
            incidents: Vec::new(),
        }
    }
}

/// The backend's body-map response envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyMapData {
    pub parts: Vec<BodyPartRecord>,
}
