//! Behaviour-driven step definitions driving the plan CLI scenarios.

use super::helpers::{PlanFiles, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use feast_core::test_support::FailingSource;
use feast_core::{PlanResponse, TripPlanner, TripRequestValidationError};
use feast_planner::ExhaustivePlanner;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use std::cell::RefCell;

#[derive(Debug)]
struct PlanWorld {
    files: PlanFiles,
    include_request: RefCell<bool>,
    failing_planner: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        Self {
            files: PlanFiles::new(),
            include_request: RefCell::new(true),
            failing_planner: RefCell::new(false),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, catalogs: &[(&str, &Utf8PathBuf)]) -> Vec<String> {
        let mut argv = vec!["feast".to_owned(), "plan".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.files.request.as_str().to_owned());
        }
        for (flag, path) in catalogs {
            argv.extend([format!("--{flag}"), path.as_str().to_owned()]);
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn run(&self, catalogs: &[(&str, &Utf8PathBuf)]) {
        let invocation = self.build_command_line(catalogs);
        let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Plan(args) => {
                let mut buffer = self.stdout.borrow_mut();
                if *self.failing_planner.borrow() {
                    run_plan_with(args, &FailingPlannerBuilder, &mut *buffer)
                } else {
                    run_plan_with(args, &DefaultPlannerBuilder, &mut *buffer)
                }
            }
        });
        self.result.replace(Some(outcome));
    }

    fn expect_response(&self) -> PlanResponse {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON plan response")
    }

    fn expect_error(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

/// Builds a planner whose availability source is always offline.
struct FailingPlannerBuilder;

impl PlannerBuilder for FailingPlannerBuilder {
    fn build(&self, _config: &PlanConfig) -> Result<Box<dyn TripPlanner>, CliError> {
        Ok(Box::new(ExhaustivePlanner::new(FailingSource)))
    }
}

#[given("a product listings catalog exists on disk")]
fn listings_exist(#[from(world)] world: &PlanWorld) {
    world.files.write_listings();
}

#[given("a markets catalog exists on disk")]
fn markets_exist(#[from(world)] world: &PlanWorld) {
    world.files.write_markets();
}

#[given("a request for tomato and basil exists on disk")]
fn request_exists(#[from(world)] world: &PlanWorld) {
    world
        .files
        .write_request(&json!({ "ingredients": ["tomato", "basil"] }));
}

#[given("a request whose ingredients are all owned exists on disk")]
fn owned_request_exists(#[from(world)] world: &PlanWorld) {
    world.files.write_request(&json!({
        "ingredients": ["tomato"],
        "owned": ["Tomato"],
    }));
}

#[given("the trip request contains invalid JSON")]
fn request_contains_invalid_json(#[from(world)] world: &PlanWorld) {
    write_utf8(&world.files.request, b"{ not valid json");
}

#[given("I omit the trip request path")]
fn omit_request_path(#[from(world)] world: &PlanWorld) {
    *world.include_request.borrow_mut() = false;
}

#[given("I limit the trip to {stops} stops")]
fn limit_stops(#[from(world)] world: &PlanWorld, stops: u8) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_PLAN_MAX_STOPS}"), stops.to_string()]);
}

#[given("the planner cannot reach its availability source")]
fn planner_source_offline(#[from(world)] world: &PlanWorld) {
    *world.failing_planner.borrow_mut() = true;
}

#[when("I run the plan command with the listings catalog")]
fn run_with_listings(#[from(world)] world: &PlanWorld) {
    world.run(&[(ARG_PLAN_LISTINGS, &world.files.listings)]);
}

#[when("I run the plan command with the markets catalog")]
fn run_with_markets(#[from(world)] world: &PlanWorld) {
    world.run(&[(ARG_PLAN_MARKETS, &world.files.markets)]);
}

#[when("I run the plan command with both catalogs")]
fn run_with_both(#[from(world)] world: &PlanWorld) {
    world.run(&[
        (ARG_PLAN_LISTINGS, &world.files.listings),
        (ARG_PLAN_MARKETS, &world.files.markets),
    ]);
}

#[then("the command succeeds and the trip visits {name}")]
fn trip_visits(#[from(world)] world: &PlanWorld, name: String) {
    let trip = world.expect_response().trip.expect("expected a trip");
    let visited: Vec<String> = trip.markets.into_iter().map(|market| market.name).collect();
    assert_eq!(visited, vec![name.trim_matches('"').to_owned()]);
}

#[then("the printed trip covers {covered} of {total} ingredients")]
fn trip_covers(#[from(world)] world: &PlanWorld, covered: usize, total: usize) {
    let trip = world.expect_response().trip.expect("expected a trip");
    assert_eq!(trip.coverage_count, covered);
    assert_eq!(trip.total_count, total);
}

#[then("the command fails because the request JSON is invalid")]
fn fails_invalid_json(#[from(world)] world: &PlanWorld) {
    world.expect_error(|error| match error {
        CliError::ParseTripRequest { .. } => {}
        other => panic!("expected ParseTripRequest, found {other:?}"),
    });
}

#[then("the command fails because there is nothing to buy")]
fn fails_nothing_to_buy(#[from(world)] world: &PlanWorld) {
    world.expect_error(|error| match error {
        CliError::InvalidTripRequest { source, .. } => {
            assert_eq!(*source, TripRequestValidationError::NothingToBuy);
        }
        other => panic!("expected InvalidTripRequest, found {other:?}"),
    });
}

#[then("the command fails because the request path is missing")]
fn fails_missing_request(#[from(world)] world: &PlanWorld) {
    world.expect_error(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_PLAN_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

#[then("the command fails because the catalogs conflict")]
fn fails_conflicting_catalogs(#[from(world)] world: &PlanWorld) {
    world.expect_error(|error| match error {
        CliError::ConflictingCatalogs => {}
        other => panic!("expected ConflictingCatalogs, found {other:?}"),
    });
}

#[then("the command fails because planning failed")]
fn fails_planning(#[from(world)] world: &PlanWorld) {
    world.expect_error(|error| match error {
        CliError::Plan { .. } => {}
        other => panic!("expected Plan, found {other:?}"),
    });
    assert!(world.stdout.borrow().is_empty());
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plan_from_listings, "planning a trip from product listings");
register_plan_scenario!(
    plan_from_markets_with_limit,
    "planning a trip from markets with a stop limit"
);
register_plan_scenario!(plan_invalid_json, "rejecting invalid JSON input");
register_plan_scenario!(plan_nothing_to_buy, "rejecting requests with nothing to buy");
register_plan_scenario!(plan_missing_request, "rejecting missing request paths");
register_plan_scenario!(plan_conflicting_catalogs, "rejecting conflicting catalogs");
register_plan_scenario!(plan_failure, "surfacing planner failures");
