//! List command
//!
//! Usage: cafe list [--sort dish|id]

use std::io::Write;

use clap::{Args, ValueEnum};
use rusqlite::Connection;

use super::output::print_details;
use super::CliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Dish name, ties in insertion order
    Dish,
    /// Order id
    Id,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = SortKey::Id)]
    pub sort: SortKey,
}

pub fn execute<W: Write>(conn: &Connection, args: ListArgs, json: bool, out: &mut W) -> CliResult {
    let rows = match args.sort {
        SortKey::Dish => cafe_engine::sorted_by_dish_name(conn)?,
        SortKey::Id => cafe_engine::sorted_by_order_id(conn)?,
    };
    print_details(out, &rows, json)
}
