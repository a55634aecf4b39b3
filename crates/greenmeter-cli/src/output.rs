//! Output formatting module

use greenmeter_app::app::ResolvedScenario;
use greenmeter_domain::model::{
    ActivityInputs, AdjustmentParameters, CategoryComparison, EmissionFactor, Evaluation, Lever,
    STANDARD_FACTORS,
};
use greenmeter_domain::service::{generate_emissions_report, generate_factor_table, SweepPoint};
use greenmeter_types::{format_total, OutputFormat, Result};
use serde::Serialize;

#[derive(Serialize)]
struct CalcOutput<'a> {
    inputs: &'a ActivityInputs,
    adjustments: &'a AdjustmentParameters,
    evaluation: &'a Evaluation,
    comparisons: Vec<CategoryComparison>,
}

#[derive(Serialize)]
struct SweepOutput<'a> {
    lever: Lever,
    points: &'a [SweepPoint],
}

pub fn output_evaluation(
    output_format: OutputFormat,
    resolved: &ResolvedScenario,
    evaluation: &Evaluation,
) -> Result<()> {
    print!("{}", render_evaluation(output_format, resolved, evaluation)?);
    Ok(())
}

pub fn output_sweep(output_format: OutputFormat, lever: Lever, points: &[SweepPoint]) -> Result<()> {
    print!("{}", render_sweep(output_format, lever, points)?);
    Ok(())
}

pub fn output_factors(output_format: OutputFormat) -> Result<()> {
    print!("{}", render_factors(output_format)?);
    Ok(())
}

fn render_evaluation(
    output_format: OutputFormat,
    resolved: &ResolvedScenario,
    evaluation: &Evaluation,
) -> Result<String> {
    if output_format == OutputFormat::Json {
        let output = CalcOutput {
            inputs: &resolved.inputs,
            adjustments: &resolved.adjustments,
            evaluation,
            comparisons: evaluation.comparisons(),
        };
        Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
    } else {
        Ok(generate_emissions_report(
            &resolved.inputs,
            &resolved.adjustments,
            evaluation,
        ))
    }
}

fn render_sweep(output_format: OutputFormat, lever: Lever, points: &[SweepPoint]) -> Result<String> {
    if output_format == OutputFormat::Json {
        let output = SweepOutput { lever, points };
        return Ok(format!("{}\n", serde_json::to_string_pretty(&output)?));
    }

    let mut out = String::new();
    out.push_str(&format!("\nSensitivity Sweep: {}\n", lever.label()));
    out.push_str("==================================================\n");
    out.push_str(&format!(
        "{:>8} {:>14} {:>14} {:>10}\n",
        "Value", "Baseline", "Optimized", "Reduction"
    ));
    out.push_str(&format!("{}\n", "-".repeat(50)));
    for point in points {
        out.push_str(&format!(
            "{:>7.1}% {:>14} {:>14} {:>10}\n",
            point.value,
            format_total(point.baseline_total),
            format_total(point.optimized_total),
            point.reduction.to_string()
        ));
    }
    Ok(out)
}

fn render_factors(output_format: OutputFormat) -> Result<String> {
    if output_format == OutputFormat::Json {
        let factors: Vec<&EmissionFactor> = STANDARD_FACTORS.iter().collect();
        return Ok(format!("{}\n", serde_json::to_string_pretty(&factors)?));
    }

    Ok(format!(
        "\nEmission Factors (kg CO2e per unit)\n========================================\n{}",
        generate_factor_table()
    ))
}
