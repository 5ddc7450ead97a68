use bodymap_core::error::BodyMapError;
use bodymap_core::view::region_detail;
use bodymap_core::{aggregate, RegionId};
use std::path::PathBuf;

use crate::output;

pub fn run(input_file: PathBuf, region: &str, output_format: &str) -> Result<(), BodyMapError> {
    let region: RegionId = region.parse()?;
    let records = bodymap_core::input::load_records(&input_file)?;
    let map = aggregate(&records);

    match region_detail(&map, region) {
        Some(detail) => match output_format {
            "json" => output::json::print(&detail)?,
            _ => output::table::print_detail(&detail),
        },
        None => println!("No incidents recorded for {}", region.label()),
    }

    Ok(())
}
