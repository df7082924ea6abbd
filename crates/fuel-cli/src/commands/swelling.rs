use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use fuel_core::catalog;
use fuel_corr::Correlation;
use fuel_prop::propagate_catalog;
use fuel_report::{render_swelling_table, write_results_csv_file};

use super::PropagationArgs;

#[derive(Args, Debug)]
pub struct SwellingArgs {
    /// Optional CSV file receiving the swelling series.
    #[arg(long)]
    pub csv: Option<PathBuf>,
    #[command(flatten)]
    pub propagation: PropagationArgs,
}

pub fn run(args: &SwellingArgs) -> Result<(), Box<dyn Error>> {
    let budget = args.propagation.budget()?;
    let opts = args.propagation.batch_opts(&[Correlation::Ross]);
    let batch = propagate_catalog(&catalog(), &budget, &opts)?;
    print!("{}", render_swelling_table(&batch)?);
    if let Some(path) = &args.csv {
        write_results_csv_file(path, &batch)?;
        println!("Swelling series saved to {}", path.display());
    }
    Ok(())
}
