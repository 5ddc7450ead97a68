use crate::error::BodyMapError;
use crate::grouping::IncidentRow;
use crate::model::{BodyMapData, BodyPartRecord};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Records are accepted either bare or wrapped in the backend's `{"parts": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsInput {
    Envelope(BodyMapData),
    Bare(Vec<BodyPartRecord>),
}

/// Load body-part records from a JSON file.
pub fn load_records(path: &Path) -> Result<Vec<BodyPartRecord>, BodyMapError> {
    let content = std::fs::read_to_string(path).map_err(|e| BodyMapError::InputLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let input: RecordsInput =
        serde_json::from_str(&content).map_err(|e| BodyMapError::InputLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let records = into_records(input);
    validate_records(&records)?;
    Ok(records)
}

/// Parse body-part records from a JSON string (no file path context).
pub fn parse_records_str(json: &str) -> Result<Vec<BodyPartRecord>, BodyMapError> {
    let input: RecordsInput = serde_json::from_str(json)?;
    let records = into_records(input);
    validate_records(&records)?;
    Ok(records)
}

fn into_records(input: RecordsInput) -> Vec<BodyPartRecord> {
    match input {
        RecordsInput::Envelope(data) => data.parts,
        RecordsInput::Bare(parts) => parts,
    }
}

/// Check that every record is within the data model.
pub fn validate_records(records: &[BodyPartRecord]) -> Result<(), BodyMapError> {
    for record in records {
        if record.percentage < Decimal::ZERO || record.percentage > Decimal::ONE_HUNDRED {
            return Err(BodyMapError::InvalidRecord(format!(
                "'{}' has percentage {} (expected 0-100)",
                record.name, record.percentage
            )));
        }
    }
    Ok(())
}

/// Load raw incident rows from a JSON array.
pub fn load_incident_rows(path: &Path) -> Result<Vec<IncidentRow>, BodyMapError> {
    let content = std::fs::read_to_string(path).map_err(|e| BodyMapError::InputLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| BodyMapError::InputLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            { "name": "Hombro izq", "count": 2, "percentage": 10,
              "incidents": [ { "id": 1, "name": "Ana", "date": "2024-01-02", "classifier": "GOLPE" } ] }
        ]"#;
        let records = parse_records_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].percentage, dec!(10));
        assert_eq!(records[0].incidents[0].incident_type, None);
    }

    #[test]
    fn test_parse_envelope() {
        let json = r#"{ "parts": [
            { "name": "PIE", "count": 1, "percentage": 5.5, "incidents": [] },
            { "name": "MANO", "count": 3, "percentage": 16.5 }
        ] }"#;
        let records = parse_records_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].percentage, dec!(5.5));
        assert!(records[1].incidents.is_empty());
    }

    #[test]
    fn test_percentage_out_of_range_rejected() {
        let json = r#"[ { "name": "PIE", "count": 1, "percentage": 120 } ]"#;
        assert!(matches!(
            parse_records_str(json),
            Err(BodyMapError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_negative_count_rejected() {
        let json = r#"[ { "name": "PIE", "count": -1, "percentage": 1 } ]"#;
        assert!(parse_records_str(json).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_records(Path::new("/nonexistent/records.json")).unwrap_err();
        assert!(matches!(err, BodyMapError::InputLoad { .. }));
    }
}
