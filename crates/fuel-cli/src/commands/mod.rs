pub mod conditions;
pub mod fgr;
pub mod sensitivity;
pub mod swelling;
pub mod version;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use fuel_corr::Correlation;
use fuel_prop::{load_budget, BatchOpts, Scheduler, UncertaintyBudget};
use tracing::info;

/// Options shared by every command that propagates uncertainty.
#[derive(Args, Debug, Clone)]
pub struct PropagationArgs {
    /// YAML uncertainty budget; the built-in budget is used when omitted.
    #[arg(long)]
    pub budget: Option<PathBuf>,
    /// Worker threads used for the catalog batch.
    #[arg(long, default_value_t = 1)]
    pub parallelism: usize,
}

impl PropagationArgs {
    pub fn budget(&self) -> Result<UncertaintyBudget, Box<dyn Error>> {
        match &self.budget {
            Some(path) => {
                let budget = load_budget(path)?;
                info!(path = %path.display(), "loaded uncertainty budget");
                Ok(budget)
            }
            None => Ok(UncertaintyBudget::default()),
        }
    }

    /// Batch options for `correlations`, keeping the first occurrence of each.
    pub fn batch_opts(&self, correlations: &[Correlation]) -> BatchOpts {
        let mut unique: Vec<Correlation> = Vec::with_capacity(correlations.len());
        for &correlation in correlations {
            if !unique.contains(&correlation) {
                unique.push(correlation);
            }
        }
        BatchOpts {
            correlations: unique,
            scheduler: Scheduler {
                parallelism: self.parallelism,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_correlations_collapse_in_order() {
        let args = PropagationArgs {
            budget: None,
            parallelism: 1,
        };
        let opts = args.batch_opts(&[
            Correlation::Rogozkin,
            Correlation::Storms,
            Correlation::Rogozkin,
            Correlation::Storms,
        ]);
        assert_eq!(
            opts.correlations,
            vec![Correlation::Rogozkin, Correlation::Storms]
        );
    }
}
