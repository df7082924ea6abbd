use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    conditions::{self, ConditionsArgs},
    fgr::{self, FgrArgs},
    sensitivity::{self, SensitivityArgs},
    swelling::{self, SwellingArgs},
    version::{self, VersionArgs},
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "minifuel",
    about = "Fission gas release and swelling correlations with propagated uncertainty"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full sensitivity study: FGR table, regime summary, CSV and JSON report.
    Sensitivity(SensitivityArgs),
    /// FGR predictions with propagated uncertainty for both FGR forms.
    Fgr(FgrArgs),
    /// Ross volumetric swelling predictions.
    Swelling(SwellingArgs),
    /// Irradiation conditions of the specimen catalog.
    Conditions(ConditionsArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn setup_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;
    match cli.command {
        Command::Sensitivity(args) => sensitivity::run(&args),
        Command::Fgr(args) => fgr::run(&args),
        Command::Swelling(args) => swelling::run(&args),
        Command::Conditions(args) => conditions::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
