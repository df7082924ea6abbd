//! Embedded ROADRUNNER UN MiniFuel specimen catalog.
//!
//! Six irradiation targets with six specimens each. Temperatures are the
//! time and volume averaged (TAVA) values in kelvin.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Specimen;

const SPECIMENS_PER_TARGET: usize = 6;

// (id, T [K], BU [%FIMA], density [%TD]) in catalog order.
const ROWS: [(&str, f64, f64, f64); 36] = [
    ("RRN01-6", 1190.0, 7.058, 92.89),
    ("RRN01-5", 1190.0, 7.470, 94.21),
    ("RRN01-4", 1181.0, 7.657, 93.43),
    ("RRN01-3", 1183.0, 7.839, 94.73),
    ("RRN01-2", 1163.0, 7.730, 95.21),
    ("RRN01-1", 1182.0, 7.576, 95.76),
    ("RRN02-6", 877.0, 7.338, 94.79),
    ("RRN02-5", 881.0, 7.726, 94.36),
    ("RRN02-4", 1183.0, 7.908, 93.19),
    ("RRN02-3", 1479.0, 8.081, 92.00),
    ("RRN02-2", 1487.0, 8.020, 95.01),
    ("RRN02-1", 1181.0, 7.716, 95.49),
    ("RRN03-6", 1184.0, 3.498, 89.09),
    ("RRN03-5", 1187.0, 3.681, 86.27),
    ("RRN03-4", 1181.0, 3.741, 89.02),
    ("RRN03-3", 1172.0, 3.852, 95.21),
    ("RRN03-2", 1187.0, 3.842, 95.91),
    ("RRN03-1", 1181.0, 3.740, 94.50),
    ("RRN04-6", 875.0, 5.936, 94.33),
    ("RRN04-5", 881.0, 6.229, 95.45),
    ("RRN04-4", 1172.0, 6.399, 95.59),
    ("RRN04-3", 1483.0, 6.517, 93.48),
    ("RRN04-2", 1490.0, 6.451, 96.05),
    ("RRN04-1", 1175.0, 6.237, 95.60),
    ("RRN05-6", 1191.0, 5.485, 87.30),
    ("RRN05-5", 1183.0, 5.751, 88.57),
    ("RRN05-4", 1183.0, 5.985, 88.19),
    ("RRN05-3", 1179.0, 5.990, 93.27),
    ("RRN05-2", 1182.0, 5.983, 94.07),
    ("RRN05-1", 1175.0, 5.863, 96.32),
    ("RRN06-6", 877.0, 3.757, 94.10),
    ("RRN06-5", 881.0, 4.027, 95.43),
    ("RRN06-4", 1183.0, 4.096, 95.63),
    ("RRN06-3", 1479.0, 4.217, 95.14),
    ("RRN06-2", 1487.0, 4.163, 96.14),
    ("RRN06-1", 1181.0, 3.958, 95.01),
];

/// Returns the full specimen catalog in its canonical order.
pub fn catalog() -> Vec<Specimen> {
    ROWS.iter()
        .enumerate()
        .map(|(idx, &(id, temperature_k, burnup_fima, density_td))| Specimen {
            id: id.to_string(),
            target: (idx / SPECIMENS_PER_TARGET + 1) as u8,
            temperature_k,
            burnup_fima,
            density_td,
        })
        .collect()
}

/// Closed range of observed values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Smallest observed value.
    pub min: f64,
    /// Largest observed value.
    pub max: f64,
}

impl Range {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        values.fold(None, |acc, value| match acc {
            None => Some(Range {
                min: value,
                max: value,
            }),
            Some(range) => Some(Range {
                min: range.min.min(value),
                max: range.max.max(value),
            }),
        })
    }
}

/// Irradiation conditions summarised over one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConditions {
    /// Target number.
    pub target: u8,
    /// Display label, e.g. `RRN01`.
    pub label: String,
    /// Number of specimens loaded in the target.
    pub specimens: usize,
    /// Temperature range in kelvin.
    pub temperature_k: Range,
    /// Burnup range in %FIMA.
    pub burnup_fima: Range,
    /// Density range in %TD.
    pub density_td: Range,
}

/// Display label for a target number.
pub fn target_label(target: u8) -> String {
    format!("RRN{target:02}")
}

/// Groups specimens by target, preserving catalog order inside each group.
pub fn targets(specimens: &[Specimen]) -> BTreeMap<u8, Vec<&Specimen>> {
    let mut grouped: BTreeMap<u8, Vec<&Specimen>> = BTreeMap::new();
    for specimen in specimens {
        grouped.entry(specimen.target).or_default().push(specimen);
    }
    grouped
}

/// Per-target ranges of temperature, burnup and density.
pub fn target_conditions(specimens: &[Specimen]) -> Vec<TargetConditions> {
    targets(specimens)
        .into_iter()
        .filter_map(|(target, group)| {
            Some(TargetConditions {
                target,
                label: target_label(target),
                specimens: group.len(),
                temperature_k: Range::of(group.iter().map(|s| s.temperature_k))?,
                burnup_fima: Range::of(group.iter().map(|s| s.burnup_fima))?,
                density_td: Range::of(group.iter().map(|s| s.density_td))?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_targets_of_six() {
        let specimens = catalog();
        assert_eq!(specimens.len(), 36);
        let grouped = targets(&specimens);
        assert_eq!(grouped.len(), 6);
        for (target, group) in grouped {
            assert_eq!(group.len(), 6);
            let prefix = target_label(target);
            assert!(group.iter().all(|s| s.id.starts_with(&prefix)));
        }
    }

    #[test]
    fn first_specimen_matches_table() {
        let first = &catalog()[0];
        assert_eq!(first.id, "RRN01-6");
        assert_eq!(first.target, 1);
        assert_eq!(first.temperature_k, 1190.0);
        assert_eq!(first.burnup_fima, 7.058);
        assert_eq!(first.density_td, 92.89);
    }

    #[test]
    fn ranges_cover_target_extremes() {
        let conditions = target_conditions(&catalog());
        let rrn02 = &conditions[1];
        assert_eq!(rrn02.label, "RRN02");
        assert_eq!(rrn02.temperature_k.min, 877.0);
        assert_eq!(rrn02.temperature_k.max, 1487.0);
        assert_eq!(rrn02.burnup_fima.max, 8.081);
        assert_eq!(rrn02.density_td.min, 92.00);
    }
}
