use crate::aggregate::RegionMap;
use crate::model::IncidentRef;
use crate::regions::{RegionId, Shape, REGIONS};
use crate::tier::{tier, SeverityTier};
use rust_decimal::Decimal;
use serde::Serialize;

/// What a renderer needs to paint one region of the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionView {
    pub id: RegionId,
    pub label: &'static str,
    pub shape: Shape,
    pub count: u64,
    pub tier: SeverityTier,
}

/// One view per region in table order, including regions without incidents.
pub fn region_views(map: &RegionMap) -> Vec<RegionView> {
    REGIONS
        .iter()
        .map(|def| {
            let count = map.get(&def.region).map(|a| a.count).unwrap_or(0);
            RegionView {
                id: def.region,
                label: def.label,
                shape: def.shape,
                count,
                tier: tier(count),
            }
        })
        .collect()
}

/// Contents of the detail panel shown when a region is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionDetail {
    pub region_id: RegionId,
    pub label: &'static str,
    pub count: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage: Decimal,
    pub incidents: Vec<IncidentRef>,
}

/// Build the detail panel for `region`, or `None` if no record landed there.
pub fn region_detail(map: &RegionMap, region: RegionId) -> Option<RegionDetail> {
    let agg = map.get(&region)?;
    Some(RegionDetail {
        region_id: region,
        label: region.label(),
        count: agg.count,
        percentage: agg.percentage,
        incidents: agg.incidents.clone(),
    })
}
