use bodymap_core::error::BodyMapError;
use bodymap_core::grouping::group_by_label;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), BodyMapError> {
    let rows = bodymap_core::input::load_incident_rows(&input_file)?;
    let records = group_by_label(&rows);
    tracing::info!(
        rows = rows.len(),
        labels = records.len(),
        "grouped incident rows by body-part label"
    );

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&records)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Grouped {} row(s) into {} label(s), written to {}",
                rows.len(),
                records.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&records)?,
            _ => output::table::print_records(&records),
        },
    }

    Ok(())
}
