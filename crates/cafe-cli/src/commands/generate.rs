//! Test data command
//!
//! Usage: cafe generate [--count N]

use std::io::Write;

use cafe_engine::FullOrder;
use clap::Args;
use rusqlite::Connection;

use super::output::print_json;
use super::CliResult;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// How many dish/order/review chains to insert
    #[arg(long, default_value_t = 1)]
    pub count: u32,
}

pub fn execute<W: Write>(
    conn: &mut Connection,
    args: GenerateArgs,
    json: bool,
    out: &mut W,
) -> CliResult {
    let mut rng = rand::thread_rng();
    let mut created = Vec::with_capacity(args.count as usize);
    for _ in 0..args.count {
        created.push(cafe_engine::generate_full_order(conn, &mut rng)?);
    }

    if json {
        return print_json(out, &created);
    }
    for full in &created {
        print_full_order(out, full)?;
    }
    Ok(())
}

pub fn print_full_order<W: Write>(out: &mut W, full: &FullOrder) -> CliResult {
    writeln!(out, "Added test data:")?;
    writeln!(out, "Dish: {} (ID: {})", full.dish.name, full.dish.id)?;
    writeln!(out, "Order: ID {}", full.order.id)?;
    writeln!(out, "Order Time: {}", full.order.order_time)?;
    writeln!(out, "Cook Time: {}", full.order.cook_time)?;
    writeln!(out, "Review: '{}'", full.review.text)?;
    Ok(())
}
