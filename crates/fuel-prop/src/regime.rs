use std::collections::BTreeMap;

use fuel_core::InputVar;
use fuel_corr::Correlation;
use serde::{Deserialize, Serialize};

use crate::batch::{BatchReport, SpecimenReport};

/// Irradiation temperature regime of a specimen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Below 1000 K, nominally ~873 K.
    Low,
    /// 1000 K up to 1350 K, nominally ~1,173 K.
    Intermediate,
    /// 1350 K and above, nominally ~1,473 K.
    High,
}

impl Regime {
    /// Regimes in ascending temperature order.
    pub const ALL: [Regime; 3] = [Regime::Low, Regime::Intermediate, Regime::High];

    /// Classifies a temperature in kelvin.
    pub fn classify(temperature_k: f64) -> Self {
        if temperature_k < 1000.0 {
            Regime::Low
        } else if temperature_k < 1350.0 {
            Regime::Intermediate
        } else {
            Regime::High
        }
    }

    /// Report label including the nominal temperature.
    pub fn label(self) -> &'static str {
        match self {
            Regime::Low => "Low (~873 K)",
            Regime::Intermediate => "Intermediate (~1,173 K)",
            Regime::High => "High (~1,473 K)",
        }
    }
}

/// Mean variance decomposition over the specimens of one regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeSummary {
    /// Regime summarised.
    pub regime: Regime,
    /// Number of specimens in the regime.
    pub specimens: usize,
    /// Mean contribution in percent per correlation and input, over the
    /// successful evaluations only.
    pub mean_contributions: BTreeMap<Correlation, BTreeMap<InputVar, f64>>,
    /// Mean |Storms − Rogozkin| over the specimens where both succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_discrepancy: Option<f64>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Summarises a batch report per temperature regime. Regimes without any
/// specimen are omitted.
pub fn summarize_regimes(report: &BatchReport) -> Vec<RegimeSummary> {
    let mut grouped: BTreeMap<Regime, Vec<&SpecimenReport>> = BTreeMap::new();
    for entry in &report.specimens {
        grouped
            .entry(Regime::classify(entry.specimen.temperature_k))
            .or_default()
            .push(entry);
    }

    grouped
        .into_iter()
        .map(|(regime, entries)| {
            let mut mean_contributions = BTreeMap::new();
            for &correlation in &report.opts.correlations {
                let per_input: BTreeMap<InputVar, f64> = correlation
                    .inputs()
                    .iter()
                    .filter_map(|&var| {
                        mean(
                            entries
                                .iter()
                                .filter_map(|e| e.propagation(correlation))
                                .filter_map(|p| p.contribution(var)),
                        )
                        .map(|m| (var, m))
                    })
                    .collect();
                if !per_input.is_empty() {
                    mean_contributions.insert(correlation, per_input);
                }
            }
            RegimeSummary {
                regime,
                specimens: entries.len(),
                mean_contributions,
                mean_discrepancy: mean(entries.iter().filter_map(|e| e.discrepancy)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_edges() {
        assert_eq!(Regime::classify(877.0), Regime::Low);
        assert_eq!(Regime::classify(1000.0), Regime::Intermediate);
        assert_eq!(Regime::classify(1349.9), Regime::Intermediate);
        assert_eq!(Regime::classify(1350.0), Regime::High);
    }

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(mean(std::iter::empty()), None);
        assert_eq!(mean([1.0, 3.0].into_iter()), Some(2.0));
    }
}
