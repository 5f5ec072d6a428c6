//! Shared test harness modules for the Labelwise CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod filter_unit;
mod helpers;
mod score_steps;
