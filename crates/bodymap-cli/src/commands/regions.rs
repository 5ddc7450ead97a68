use bodymap_core::error::BodyMapError;
use bodymap_core::regions::aliases::ALIASES;
use bodymap_core::regions::REGIONS;

pub fn list(show_aliases: bool) -> Result<(), BodyMapError> {
    println!("Canonical body regions:\n");

    let max_id = REGIONS.iter().map(|r| r.id.len()).max().unwrap_or(20);

    for def in &REGIONS {
        let variants: Vec<&str> = ALIASES
            .iter()
            .filter(|(_, region)| *region == def.region)
            .map(|(key, _)| *key)
            .collect();

        println!(
            "  {:<width$}  {:<24} {} label variant(s)",
            def.id,
            def.label,
            variants.len(),
            width = max_id
        );
        if show_aliases {
            for key in &variants {
                println!("  {:<width$}    - {}", "", key, width = max_id);
            }
        }
    }

    println!();
    println!("Labels are matched after uppercasing and removing accents. Unqualified");
    println!("labels such as HOMBRO or RODILLA resolve to the right side; PECHO and");
    println!("TORAX resolve to the left. Labels with no exact match take the first");
    println!("dictionary variant that overlaps them as a substring.");

    Ok(())
}
