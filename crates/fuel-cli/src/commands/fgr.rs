use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use fuel_core::catalog;
use fuel_corr::Correlation;
use fuel_prop::propagate_catalog;
use fuel_report::{render_fgr_table, write_results_csv_file};

use super::PropagationArgs;

#[derive(Args, Debug)]
pub struct FgrArgs {
    /// Optional CSV file receiving the FGR ± σ series.
    #[arg(long)]
    pub csv: Option<PathBuf>,
    #[command(flatten)]
    pub propagation: PropagationArgs,
}

pub fn run(args: &FgrArgs) -> Result<(), Box<dyn Error>> {
    let budget = args.propagation.budget()?;
    let opts = args.propagation.batch_opts(&Correlation::FGR);
    let batch = propagate_catalog(&catalog(), &budget, &opts)?;
    print!("{}", render_fgr_table(&batch)?);
    if let Some(path) = &args.csv {
        write_results_csv_file(path, &batch)?;
        println!("FGR series saved to {}", path.display());
    }
    Ok(())
}
