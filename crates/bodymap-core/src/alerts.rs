use crate::aggregate::RegionMap;
use crate::model::RegionAggregate;
use serde::{Deserialize, Serialize};

/// A region must exceed this many incidents before it is flagged.
pub const BODY_PART_ALERT_THRESHOLD: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub severity: AlertSeverity,
}

/// The region with the most incidents. Ties go to the earlier region.
pub fn most_affected(map: &RegionMap) -> Option<&RegionAggregate> {
    map.values()
        .filter(|agg| agg.count > 0)
        .fold(None, |best: Option<&RegionAggregate>, agg| match best {
            Some(b) if b.count >= agg.count => Some(b),
            _ => Some(agg),
        })
}

/// Warn about the most affected region once it passes [`BODY_PART_ALERT_THRESHOLD`].
pub fn body_part_alert(map: &RegionMap) -> Option<Alert> {
    let top = most_affected(map)?;
    if top.count <= BODY_PART_ALERT_THRESHOLD {
        return None;
    }
    Some(Alert {
        kind: "body_part".into(),
        message: format!(
            "Parte del cuerpo más afectada: {} con {} registros",
            top.region_id.label(),
            top.count
        ),
        severity: AlertSeverity::Warning,
    })
}
