//! Shared test harness modules for the `feast` CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::plan::*;

mod helpers;
mod plan_steps;
