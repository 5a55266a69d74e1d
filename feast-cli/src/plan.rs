//! Plan command implementation for the `feast` CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use feast_core::{
    ListingCatalog, Market, MarketCatalog, PlanResponse, ProductListing, TripPlanner, TripRequest,
};
use feast_fs::open_utf8_file;
use feast_planner::{ExhaustivePlanner, PlannerConfig};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{
    ARG_PLAN_EVALUATION_BUDGET, ARG_PLAN_LISTINGS, ARG_PLAN_MARKETS, ARG_PLAN_MAX_STOPS,
    ARG_PLAN_REQUEST, CliError, ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a shopping trip for a JSON-encoded TripRequest. Market \
                 availability comes either from raw product listings \
                 (market, product, farmer rows) or from precomputed markets \
                 with per-ingredient availability.",
    about = "Plan a shopping trip across farmers markets"
)]
#[ortho_config(prefix = "FEAST")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a TripRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON array of product listings.
    #[arg(long = ARG_PLAN_LISTINGS, value_name = "path")]
    #[serde(default)]
    pub(crate) listings: Option<Utf8PathBuf>,
    /// Path to a JSON array of markets with availability.
    #[arg(long = ARG_PLAN_MARKETS, value_name = "path")]
    #[serde(default)]
    pub(crate) markets: Option<Utf8PathBuf>,
    /// Override the request's stop bound.
    #[arg(long = ARG_PLAN_MAX_STOPS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_stops: Option<u8>,
    /// Stop searching longer trips after this many combinations.
    #[arg(long = ARG_PLAN_EVALUATION_BUDGET, value_name = "count")]
    #[serde(default)]
    pub(crate) evaluation_budget: Option<u64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Where market availability is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource {
    /// Raw `ProductListing` rows.
    Listings(Utf8PathBuf),
    /// Precomputed `Market` values.
    Markets(Utf8PathBuf),
}

impl CatalogSource {
    pub(crate) fn path(&self) -> &Utf8Path {
        match self {
            Self::Listings(path) | Self::Markets(path) => path.as_path(),
        }
    }

    pub(crate) const fn field(&self) -> &'static str {
        match self {
            Self::Listings(_) => ARG_PLAN_LISTINGS,
            Self::Markets(_) => ARG_PLAN_MARKETS,
        }
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Availability catalog.
    pub(crate) catalog: CatalogSource,
    /// Stop bound replacing the request's own.
    pub(crate) max_stops: Option<u8>,
    /// Planner tuning.
    pub(crate) planner: PlannerConfig,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        Self::require_existing(self.catalog.path(), self.catalog.field())?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match feast_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let catalog = match (args.listings, args.markets) {
            (Some(listings), None) => CatalogSource::Listings(listings),
            (None, Some(markets)) => CatalogSource::Markets(markets),
            (Some(_), Some(_)) => return Err(CliError::ConflictingCatalogs),
            (None, None) => return Err(CliError::MissingCatalog),
        };
        Ok(Self {
            request_path,
            catalog,
            max_stops: args.max_stops,
            planner: PlannerConfig {
                evaluation_budget: args.evaluation_budget,
            },
        })
    }
}

/// Builds a planner for the current plan invocation.
pub(super) trait PlannerBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn TripPlanner>, CliError>;
}

/// Loads the configured catalog from disk and plans exhaustively over it.
pub(super) struct DefaultPlannerBuilder;

impl PlannerBuilder for DefaultPlannerBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn TripPlanner>, CliError> {
        let planner: Box<dyn TripPlanner> = match &config.catalog {
            CatalogSource::Listings(path) => {
                let listings: Vec<ProductListing> = load_catalog(path, ARG_PLAN_LISTINGS)?;
                info!("loaded {} product listings from {path}", listings.len());
                Box::new(ExhaustivePlanner::with_config(
                    ListingCatalog::new(listings),
                    config.planner,
                ))
            }
            CatalogSource::Markets(path) => {
                let markets: Vec<Market> = load_catalog(path, ARG_PLAN_MARKETS)?;
                info!("loaded {} markets from {path}", markets.len());
                Box::new(ExhaustivePlanner::with_config(
                    MarketCatalog::new(markets),
                    config.planner,
                ))
            }
        };
        Ok(planner)
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultPlannerBuilder;
    run_plan_with(args, &builder, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_plan(args, builder)?;
    write_plan_response(writer, &response)
}

fn execute_plan(args: PlanArgs, builder: &dyn PlannerBuilder) -> Result<PlanResponse, CliError> {
    let config = resolve_plan_config(args)?;
    let mut request = load_trip_request(&config.request_path)?;
    if let Some(max_stops) = config.max_stops {
        request.max_stops = max_stops;
    }
    request
        .validate_detailed()
        .map_err(|source| CliError::InvalidTripRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let planner = builder.build(&config)?;
    planner
        .plan(&request)
        .map_err(|source| CliError::Plan { source })
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`TripRequest`] from disk.
pub(super) fn load_trip_request(path: &Utf8Path) -> Result<TripRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenTripRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseTripRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a JSON array of catalog entries from disk.
pub(super) fn load_catalog<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<Vec<T>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalog {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan_response(writer: &mut dyn Write, response: &PlanResponse) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerializePlanResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
