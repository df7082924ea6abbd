//! Fixed-width text tables for console output.

use std::fmt::{self, Write};

use fuel_core::{target_conditions, target_label, InputVar, Specimen};
use fuel_corr::Correlation;
use fuel_prop::{BatchReport, RegimeSummary, UncertaintyBudget};

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

fn display_symbol(var: InputVar) -> &'static str {
    match var {
        InputVar::Temperature => "T",
        InputVar::Burnup => "BU",
        InputVar::Density => "ρ",
    }
}

fn cell(value: Option<f64>, width: usize, precision: usize) -> String {
    match value {
        Some(v) => format!("{v:>width$.precision$}"),
        None => format!("{:>width$}", "n/a"),
    }
}

fn uncertainty_line(budget: &UncertaintyBudget) -> String {
    let parts: Vec<String> = [
        (InputVar::Temperature, "ΔT"),
        (InputVar::Burnup, "ΔBU"),
        (InputVar::Density, "Δρ"),
    ]
    .iter()
    .map(|&(var, name)| match budget.get(var) {
        Ok(entry) => format!("{name} = ±{:.1} {}", entry.delta, var.unit()),
        Err(_) => format!("{name} = n/a"),
    })
    .collect();
    format!("Input uncertainties: {}", parts.join(", "))
}

/// FGR predictions, propagated uncertainties and model discrepancy for both
/// FGR forms, one row per specimen.
pub fn render_fgr_table(report: &BatchReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let width = 110;
    writeln!(out, "{}", rule('=', width))?;
    writeln!(
        out,
        "Table A1: FGR Predictions, Propagated Uncertainties, and Model Discrepancy"
    )?;
    writeln!(out, "{}", uncertainty_line(&report.budget))?;
    writeln!(out, "{}", rule('=', width))?;
    writeln!(
        out,
        "{:<12} {:>7} {:>7} {:>8} {:>9} {:>7} {:>9} {:>7} {:>7}",
        "Sample", "T(K)", "BU", "ρ(%TD)", "FGR_S(%)", "σ_S(%)", "FGR_R(%)", "σ_R(%)", "|Δ|(%)"
    )?;
    writeln!(out, "{}", rule('-', width))?;
    for entry in &report.specimens {
        let s = &entry.specimen;
        let storms = entry.propagation(Correlation::Storms);
        let rogozkin = entry.propagation(Correlation::Rogozkin);
        writeln!(
            out,
            "{:<12} {:7.1} {:7.2} {:8.2} {} {} {} {} {}",
            s.id,
            s.temperature_k,
            s.burnup_fima,
            s.density_td,
            cell(storms.map(|p| p.value), 9, 2),
            cell(storms.map(|p| p.sigma), 7, 2),
            cell(rogozkin.map(|p| p.value), 9, 2),
            cell(rogozkin.map(|p| p.sigma), 7, 2),
            cell(entry.discrepancy, 7, 2),
        )?;
    }
    Ok(out)
}

/// Mean variance contributions per temperature regime.
pub fn render_regime_summary(summaries: &[RegimeSummary]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", rule('=', 80))?;
    writeln!(out, "Variance Decomposition Summary (% of total variance)")?;
    writeln!(out, "{}", rule('=', 80))?;
    for summary in summaries {
        writeln!(
            out,
            "\n{} (n={} specimens):",
            summary.regime.label(),
            summary.specimens
        )?;
        for (correlation, means) in &summary.mean_contributions {
            let parts: Vec<String> = means
                .iter()
                .map(|(var, pct)| format!("{} = {pct:.1}%", display_symbol(*var)))
                .collect();
            writeln!(
                out,
                "  {:<10}{}",
                format!("{}:", correlation.label()),
                parts.join(", ")
            )?;
        }
        if let Some(discrepancy) = summary.mean_discrepancy {
            writeln!(out, "  Avg |Δ| = {discrepancy:.2}%")?;
        }
    }
    Ok(out)
}

/// Ross swelling predictions with propagated uncertainty.
pub fn render_swelling_table(report: &BatchReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let width = 80;
    writeln!(out, "{}", rule('=', width))?;
    writeln!(out, "Ross Swelling Predictions for ROADRUNNER Samples")?;
    writeln!(out, "{}", rule('=', width))?;
    writeln!(
        out,
        "{:<12} {:>8} {:>12} {:>10} {:>10} {:>8}",
        "Sample", "T (K)", "BU (%FIMA)", "TD (%TD)", "ΔV/V (%)", "σ (%)"
    )?;
    writeln!(out, "{}", rule('-', width))?;
    for entry in &report.specimens {
        let s = &entry.specimen;
        let ross = entry.propagation(Correlation::Ross);
        writeln!(
            out,
            "{:<12} {:>8.0} {:>12.3} {:>10.2} {} {}",
            s.id,
            s.temperature_k,
            s.burnup_fima,
            s.density_td,
            cell(ross.map(|p| p.value), 10, 2),
            cell(ross.map(|p| p.sigma), 8, 2),
        )?;
    }
    writeln!(out, "{}", rule('=', width))?;
    Ok(out)
}

/// Per-specimen irradiation conditions followed by per-target ranges.
pub fn render_conditions(specimens: &[Specimen]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", rule('=', 70))?;
    writeln!(out, "Irradiation Conditions and Material Properties")?;
    writeln!(out, "{}", rule('=', 70))?;
    writeln!(
        out,
        "{:<8} {:<12} {:>12} {:>10} {:>10}",
        "Target", "Sample", "BU (%FIMA)", "TAVA (K)", "ρ (%TD)"
    )?;
    writeln!(out, "{}", rule('-', 70))?;
    for s in specimens {
        writeln!(
            out,
            "{:<8} {:<12} {:>12.3} {:>10.0} {:>10.2}",
            target_label(s.target),
            s.id,
            s.burnup_fima,
            s.temperature_k,
            s.density_td
        )?;
    }
    writeln!(out, "{}", rule('-', 70))?;
    for t in target_conditions(specimens) {
        writeln!(
            out,
            "{:<8} n={}  BU {:.3}-{:.3}  T {:.0}-{:.0} K  ρ {:.2}-{:.2} %TD",
            t.label,
            t.specimens,
            t.burnup_fima.min,
            t.burnup_fima.max,
            t.temperature_k.min,
            t.temperature_k.max,
            t.density_td.min,
            t.density_td.max
        )?;
    }
    Ok(out)
}
