//! Fast orders command
//!
//! Usage: cafe fast [--minutes N]

use std::io::Write;

use cafe_core::rules::validate_threshold;
use cafe_core::CafeConfig;
use clap::Args;
use rusqlite::Connection;

use super::output::print_details;
use super::CliResult;

#[derive(Debug, Args)]
pub struct FastArgs {
    /// Threshold in minutes (defaults to the configured value)
    #[arg(long)]
    pub minutes: Option<i64>,
}

pub fn execute<W: Write>(
    conn: &Connection,
    config: &CafeConfig,
    args: FastArgs,
    json: bool,
    out: &mut W,
) -> CliResult {
    let threshold = match args.minutes {
        Some(minutes) => validate_threshold(minutes)?,
        None => config.fast_threshold_minutes,
    };
    let rows = cafe_engine::fast_orders(conn, Some(threshold))?;
    print_details(out, &rows, json)
}
