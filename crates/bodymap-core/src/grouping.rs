use crate::model::{BodyPartRecord, IncidentRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One incident as stored after upload, reduced to the fields the body map uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub incident_type: Option<String>,
    #[serde(default)]
    pub body_part: Option<String>,
}

impl IncidentRow {
    fn to_ref(&self) -> IncidentRef {
        IncidentRef {
            id: self.id,
            name: self.name.clone(),
            date: self.date.clone().unwrap_or_default(),
            classifier: self.classifier.clone().unwrap_or_default(),
            incident_type: self.incident_type.clone(),
        }
    }
}

/// Count incidents per exact body-part label, the way the dashboard backend does.
///
/// Rows without a body part are ignored. Each record's percentage is its
/// share of the rows that do have one, rounded to one decimal. Records are
/// ordered by count (highest first); equal counts keep first-appearance order.
pub fn group_by_label(rows: &[IncidentRow]) -> Vec<BodyPartRecord> {
    let mut records: Vec<BodyPartRecord> = Vec::new();
    // label -> position in `records`
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut total: u64 = 0;

    for row in rows {
        let Some(label) = row.body_part.as_deref() else {
            continue;
        };
        total += 1;

        match index.get(label) {
            Some(&idx) => {
                let record = &mut records[idx];
                record.count += 1;
                record.incidents.push(row.to_ref());
            }
            None => {
                index.insert(label, records.len());
                records.push(BodyPartRecord {
                    name: label.to_string(),
                    count: 1,
                    percentage: Decimal::ZERO,
                    incidents: vec![row.to_ref()],
                });
            }
        }
    }

    for record in &mut records {
        record.percentage = share_percent(record.count, total);
    }

    // Stable sort keeps first appearance among equal counts
    records.sort_by(|a, b| b.count.cmp(&a.count));
    records
}

fn share_percent(count: u64, total: u64) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(count) * Decimal::ONE_HUNDRED / Decimal::from(total)).round_dp(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(id: i64, body_part: Option<&str>) -> IncidentRow {
        IncidentRow {
            id,
            name: format!("Trabajador {id}"),
            date: Some("2024-05-10".into()),
            classifier: Some("CORTE".into()),
            incident_type: Some("ACCIDENTE".into()),
            body_part: body_part.map(String::from),
        }
    }

    #[test]
    fn test_groups_exact_labels_only() {
        let rows = vec![
            row(1, Some("MANO DERECHA")),
            row(2, Some("Mano derecha")),
            row(3, Some("MANO DERECHA")),
        ];
        let records = group_by_label(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "MANO DERECHA");
        assert_eq!(records[0].count, 2);
        let ids: Vec<i64> = records[0].incidents.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_percentages_rounded_to_one_decimal() {
        let rows = vec![
            row(1, Some("PIE")),
            row(2, Some("PIE")),
            row(3, Some("CABEZA")),
        ];
        let records = group_by_label(&rows);
        assert_eq!(records[0].percentage, dec!(66.7));
        assert_eq!(records[1].percentage, dec!(33.3));
    }

    #[test]
    fn test_rows_without_body_part_ignored() {
        let rows = vec![row(1, None), row(2, Some("RODILLA")), row(3, None)];
        let records = group_by_label(&rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].percentage, dec!(100));
    }

    #[test]
    fn test_ordered_by_count_then_first_appearance() {
        let rows = vec![
            row(1, Some("CUELLO")),
            row(2, Some("ESPALDA")),
            row(3, Some("PIE")),
            row(4, Some("PIE")),
            row(5, Some("ESPALDA")),
        ];
        let names: Vec<String> = group_by_label(&rows).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["ESPALDA", "PIE", "CUELLO"]);
    }

    #[test]
    fn test_missing_fields_become_empty_strings() {
        let mut r = row(9, Some("CADERA"));
        r.date = None;
        r.classifier = None;
        let records = group_by_label(&[r]);
        assert_eq!(records[0].incidents[0].date, "");
        assert_eq!(records[0].incidents[0].classifier, "");
    }

    #[test]
    fn test_interleaved_labels_keep_first_appearance() {
        let rows: Vec<IncidentRow> = (0..300)
            .map(|i| row(i, Some(["CUELLO", "PIE", "MANO"][i as usize % 3])))
            .collect();
        let records = group_by_label(&rows);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["CUELLO", "PIE", "MANO"]);
        assert!(records.iter().all(|r| r.count == 100));
        let ids: Vec<i64> = records[1].incidents.iter().take(3).map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 4, 7]);
    }

    #[test]
    fn test_no_rows() {
        assert!(group_by_label(&[]).is_empty());
    }
}
