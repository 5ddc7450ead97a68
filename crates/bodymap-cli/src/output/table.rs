use bodymap_core::model::{BodyPartRecord, IncidentRef};
use bodymap_core::tier::Palette;
use bodymap_core::view::RegionDetail;
use bodymap_core::{BodyMapReport, SeverityTier};

use crate::commands::classify::LabelResult;

pub fn print_classifications(results: &[LabelResult]) {
    let max_label = results
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(10);

    for result in results {
        match &result.classification {
            Some(c) => println!(
                "  {:<width$}  -> {:<22} ({} match on '{}')",
                result.label,
                c.region.id(),
                c.method,
                c.matched_key,
                width = max_label
            ),
            None => println!(
                "  {:<width$}  -> (no region)",
                result.label,
                width = max_label
            ),
        }
    }
}

pub fn print_report(report: &BodyMapReport, show_all: bool, verbose: bool) {
    let agg = &report.aggregation;
    let palette = Palette::default();

    println!("=== Body map ===\n");

    let views: Vec<_> = report
        .views
        .iter()
        .filter(|v| show_all || v.count > 0)
        .collect();

    if views.is_empty() {
        println!("  No incidents mapped to any region.\n");
    } else {
        let max_label = views
            .iter()
            .map(|v| v.label.chars().count())
            .max()
            .unwrap_or(10);

        for view in &views {
            let percentage = agg
                .regions
                .get(&view.id)
                .map(|a| a.percentage.round_dp(1).to_string())
                .unwrap_or_else(|| "0".into());
            println!(
                "  {:<width$}  {:>4}  {:>6}%  {:<8}  {}",
                view.label,
                view.count,
                percentage,
                view.tier.to_string(),
                palette.style(view.tier).color,
                width = max_label
            );
            if verbose {
                if let Some(region) = agg.regions.get(&view.id) {
                    print_incidents(&region.incidents, "      ");
                }
            }
        }
        println!();
        print_legend(&palette);
    }

    println!(
        "  Mapped {} of {} incident(s) to a region.",
        agg.mapped_count, agg.input_count
    );
    if !agg.unmapped.is_empty() {
        println!("  Labels without a region:");
        for u in &agg.unmapped {
            println!("    {} ({})", u.name, u.count);
        }
    }
    println!();

    if let Some(ref alert) = report.alert {
        println!("  [{:?}] {}\n", alert.severity, alert.message);
    }
}

fn print_legend(palette: &Palette) {
    println!("  Legend (incidents: tier, color, opacity/hover):");
    for tier in SeverityTier::ALL {
        let style = palette.style(tier);
        println!(
            "    {:<3} {:<8}  {}  {:.1}/{:.1}",
            tier.legend(),
            tier.to_string(),
            style.color,
            style.opacity,
            style.hover_opacity()
        );
    }
    println!();
}

pub fn print_records(records: &[BodyPartRecord]) {
    if records.is_empty() {
        println!("  No incident rows with a body part.");
        return;
    }

    let max_name = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(10);

    for record in records {
        println!(
            "  {:<width$}  {:>4}  {:>6}%",
            record.name,
            record.count,
            record.percentage.to_string(),
            width = max_name
        );
    }
}

pub fn print_detail(detail: &RegionDetail) {
    println!("=== {} ===\n", detail.label);
    println!(
        "  {} incident(s), {}% of total\n",
        detail.count,
        detail.percentage.round_dp(1)
    );
    print_incidents(&detail.incidents, "  ");
    println!();
}

fn print_incidents(incidents: &[IncidentRef], indent: &str) {
    for inc in incidents {
        println!("{indent}#{:<6} {:<12} {:<30} {}", inc.id, inc.date, inc.name, inc.classifier);
    }
}
