use bodymap_core::classify::{classify_detailed, Classification};
use bodymap_core::error::BodyMapError;
use serde::Serialize;

use crate::output;

#[derive(Serialize)]
pub struct LabelResult<'a> {
    pub label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
}

pub fn run(labels: &[String], output_format: &str) -> Result<(), BodyMapError> {
    let results: Vec<LabelResult> = labels
        .iter()
        .map(|label| LabelResult {
            label,
            classification: classify_detailed(label),
        })
        .collect();

    match output_format {
        "json" => output::json::print(&results)?,
        _ => output::table::print_classifications(&results),
    }

    Ok(())
}
