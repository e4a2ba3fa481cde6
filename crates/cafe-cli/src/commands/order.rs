//! Order lookup command
//!
//! Usage: cafe order <ID>

use std::io::Write;

use cafe_core::rules::parse_order_id;
use clap::Args;
use rusqlite::Connection;

use super::output::print_details;
use super::CliResult;

#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Order id
    pub id: String,
}

pub fn execute<W: Write>(conn: &Connection, args: OrderArgs, json: bool, out: &mut W) -> CliResult {
    let order_id = parse_order_id(&args.id)?;
    let rows = cafe_engine::by_order_id(conn, order_id)?;
    print_details(out, &rows, json)
}
