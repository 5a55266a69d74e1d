//! Command-line interface for planning Farmer Feast shopping trips.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_PLAN_LISTINGS: &str = "listings";
pub(crate) const ARG_PLAN_MARKETS: &str = "markets";
pub(crate) const ARG_PLAN_MAX_STOPS: &str = "max-stops";
pub(crate) const ARG_PLAN_EVALUATION_BUDGET: &str = "evaluation-budget";
pub(crate) const ENV_PLAN_REQUEST: &str = "FEAST_CMDS_PLAN_REQUEST_PATH";

/// Run the `feast` CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, input
/// files cannot be read, planning fails, or the response cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "feast",
    about = "Plan farmers-market shopping trips for a recipe",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Choose the markets that cover the most of a recipe's ingredients.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
