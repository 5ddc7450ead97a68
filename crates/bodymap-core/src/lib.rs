pub mod aggregate;
pub mod alerts;
pub mod classify;
pub mod error;
pub mod grouping;
pub mod input;
pub mod model;
pub mod regions;
pub mod tier;
pub mod view;

use aggregate::{aggregate_with_report, Aggregation};
use alerts::{body_part_alert, Alert};
use model::BodyPartRecord;
use serde::Serialize;
use view::{region_views, RegionView};

pub use aggregate::aggregate;
pub use classify::classify;
pub use regions::RegionId;
pub use tier::{tier, SeverityTier};

/// Everything the body-map widget shows for one set of records.
#[derive(Debug, Clone, Serialize)]
pub struct BodyMapReport {
    pub aggregation: Aggregation,
    /// One entry per region in table order.
    pub views: Vec<RegionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,
}

/// Main API entry point: aggregate records and derive the map views and alert.
///
/// Recomputed from scratch on every call; callers discard the previous
/// report when their filters change.
pub fn build_body_map(records: &[BodyPartRecord]) -> BodyMapReport {
    let aggregation = aggregate_with_report(records);
    let views = region_views(&aggregation.regions);
    let alert = body_part_alert(&aggregation.regions);

    BodyMapReport {
        aggregation,
        views,
        alert,
    }
}
