use bodymap_core::error::BodyMapError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), BodyMapError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
