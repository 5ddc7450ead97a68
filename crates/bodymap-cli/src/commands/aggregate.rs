use bodymap_core::error::BodyMapError;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    show_all: bool,
    verbose: bool,
) -> Result<(), BodyMapError> {
    let records = bodymap_core::input::load_records(&input_file)?;
    tracing::info!(
        records = records.len(),
        "loaded body-part records from {}",
        input_file.display()
    );

    let report = bodymap_core::build_body_map(&records);

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_report(&report, show_all, verbose),
    }

    Ok(())
}
