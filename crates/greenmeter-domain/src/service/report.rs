//! Plain-text emissions dashboard

use greenmeter_types::{format_grouped, format_percent, format_total};

use crate::model::{ActivityInputs, AdjustmentParameters, Category, Evaluation, Lever};

const BAR_WIDTH: usize = 40;

/// Assumptions printed under every report and on the dashboard
pub const ASSUMPTIONS: [&str; 3] = [
    "EVs emit 70% less than gasoline cars.",
    "Plane load factor scales aircraft emissions linearly.",
    "All emission factors are per the reference table.",
];

pub fn generate_emissions_report(
    inputs: &ActivityInputs,
    params: &AdjustmentParameters,
    evaluation: &Evaluation,
) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                 Green Meter                      \n");
    report.push_str("       Carbon-Aware Logistics Dashboard           \n");
    report.push_str("==================================================\n\n");

    report.push_str("[Summary]\n");
    report.push_str(&format!(
        "  Baseline total (t CO2e):    {}\n",
        format_total(evaluation.baseline_total())
    ));
    report.push_str(&format!(
        "  Optimized total (t CO2e):   {}\n",
        format_total(evaluation.optimized_total())
    ));
    report.push_str(&format!("  Reduction:                  {}\n", evaluation.reduction()));
    report.push('\n');

    report.push_str("[Adjustments]\n");
    for lever in Lever::ALL {
        report.push_str(&format!("  {:<28}{:.0}\n", format!("{}:", lever.label()), params.get(lever)));
    }
    report.push('\n');

    report.push_str("[Emissions by Category (t CO2e)]\n");
    report.push_str("-".repeat(78).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<16} {:>20} {:>13} {:>13} {:>12}\n",
        "Category", "Activity", "Baseline", "Optimized", "Change"
    ));
    report.push_str("-".repeat(78).as_str());
    report.push('\n');
    for row in evaluation.comparisons() {
        let activity = format!(
            "{} {}",
            format_grouped(inputs.get(row.category), 0),
            row.category.unit().symbol()
        );
        report.push_str(&format!(
            "{:<16} {:>20} {:>13} {:>13} {:>12}\n",
            row.category.name(),
            activity,
            format_grouped(row.baseline, 2),
            format_grouped(row.optimized, 2),
            format_signed(row.change),
        ));
    }
    report.push_str("-".repeat(78).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<16} {:>20} {:>13} {:>13} {:>12}\n",
        "Total",
        "",
        format_grouped(evaluation.baseline_total(), 2),
        format_grouped(evaluation.optimized_total(), 2),
        format_signed(evaluation.optimized_total() - evaluation.baseline_total()),
    ));
    report.push('\n');

    report.push_str("[Emission Share by Category (Optimized)]\n");
    let shares = evaluation.optimized_shares();
    if shares.is_empty() {
        report.push_str("  No emissions to break down.\n");
    } else {
        for (category, share) in shares {
            report.push_str(&format!(
                "  {:<16}{:>7} |{}\n",
                category.name(),
                format_percent(share * 100.0),
                bar(share)
            ));
        }
    }
    report.push('\n');

    report.push_str("[Total Emissions (t CO2e): Baseline vs Optimized]\n");
    let scale = evaluation
        .baseline_total()
        .abs()
        .max(evaluation.optimized_total().abs());
    for (label, total) in [
        ("Baseline", evaluation.baseline_total()),
        ("Optimized", evaluation.optimized_total()),
    ] {
        let fraction = if scale > 0.0 { total / scale } else { 0.0 };
        report.push_str(&format!(
            "  {:<10}|{:<width$} {}\n",
            label,
            bar(fraction),
            format_total(total),
            width = BAR_WIDTH
        ));
    }
    report.push('\n');

    report.push_str("Assumptions:\n");
    for assumption in ASSUMPTIONS {
        report.push_str(&format!("- {}\n", assumption));
    }

    report
}

/// Emission factor table as text
pub fn generate_factor_table() -> String {
    let mut table = String::new();
    table.push_str(&format!("{:<16} {:>10}  {}\n", "Category", "Factor", "Per"));
    table.push_str("-".repeat(40).as_str());
    table.push('\n');
    for category in Category::ALL {
        match crate::model::STANDARD_FACTORS.get(category) {
            Some(factor) => table.push_str(&format!(
                "{:<16} {:>10}  {}\n",
                category.name(),
                factor.value,
                factor.unit.symbol()
            )),
            None => table.push_str(&format!(
                "{:<16} {:>10}  {}\n",
                category.name(),
                "-",
                "direct t CO2e"
            )),
        }
    }
    table
}

fn format_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_grouped(value, 2))
    } else {
        format_grouped(value, 2)
    }
}

/// Bar of `#` proportional to `fraction` (clamped to 0..=1)
fn bar(fraction: f64) -> String {
    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    "#".repeat((fraction * BAR_WIDTH as f64).round() as usize)
}
