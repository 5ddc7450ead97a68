use crate::classify::classify;
use crate::model::{BodyPartRecord, RegionAggregate};
use crate::regions::RegionId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-region totals, ordered by region table order.
pub type RegionMap = BTreeMap<RegionId, RegionAggregate>;

/// A raw label that did not resolve to any region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmappedLabel {
    pub name: String,
    pub count: u64,
}

/// Aggregation result plus what was dropped on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    pub regions: RegionMap,
    /// Labels with no region, in input order.
    pub unmapped: Vec<UnmappedLabel>,
    /// Sum of `count` over all input records.
    pub input_count: u64,
    /// Sum of `count` over the records that landed in a region.
    pub mapped_count: u64,
}

impl Aggregation {
    /// True when every input record landed in a region.
    pub fn is_complete(&self) -> bool {
        self.unmapped.is_empty()
    }
}

/// Fold body-part records into one aggregate per canonical region.
///
/// Records whose label matches no region are skipped. Incidents are
/// concatenated in record order, then in their order within each record.
/// Counts and percentages saturate at their maximum instead of overflowing.
pub fn aggregate(records: &[BodyPartRecord]) -> RegionMap {
    aggregate_with_report(records).regions
}

/// Like [`aggregate`], but also returns the dropped labels and count totals.
pub fn aggregate_with_report(records: &[BodyPartRecord]) -> Aggregation {
    let mut regions = RegionMap::new();
    let mut unmapped = Vec::new();
    let mut input_count: u64 = 0;
    let mut mapped_count: u64 = 0;

    for record in records {
        input_count = input_count.saturating_add(record.count);

        let Some(region) = classify(&record.name) else {
            tracing::debug!(
                label = %record.name,
                count = record.count,
                "body-part label matches no region, dropping"
            );
            unmapped.push(UnmappedLabel {
                name: record.name.clone(),
                count: record.count,
            });
            continue;
        };

        mapped_count = mapped_count.saturating_add(record.count);
        let entry = regions
            .entry(region)
            .or_insert_with(|| RegionAggregate::empty(region));
        entry.count = entry.count.saturating_add(record.count);
        entry.percentage = entry.percentage.saturating_add(record.percentage);
        entry.incidents.extend(record.incidents.iter().cloned());
    }

    Aggregation {
        regions,
        unmapped,
        input_count,
        mapped_count,
    }
}
