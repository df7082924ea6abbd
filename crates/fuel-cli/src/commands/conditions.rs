use std::error::Error;

use clap::Args;
use fuel_core::serde::to_canonical_json_bytes;
use fuel_core::{catalog, target_conditions};
use fuel_report::render_conditions;

#[derive(Args, Debug)]
pub struct ConditionsArgs {
    /// Emit per-target ranges as JSON instead of the text table.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ConditionsArgs) -> Result<(), Box<dyn Error>> {
    let specimens = catalog();
    if args.json {
        let json = to_canonical_json_bytes(&target_conditions(&specimens))?;
        println!("{}", String::from_utf8(json)?);
    } else {
        print!("{}", render_conditions(&specimens)?);
    }
    Ok(())
}
