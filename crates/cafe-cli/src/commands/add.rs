//! Writer commands
//!
//! Usage:
//!   cafe add-dish <NAME>
//!   cafe add-order <DISH_ID> <ORDER_TIME> <COOK_TIME>
//!   cafe add-review <ORDER_ID> <TEXT>

use std::io::Write;

use clap::Args;
use rusqlite::Connection;

use super::output::print_json;
use super::CliResult;

#[derive(Debug, Args)]
pub struct AddDishArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct AddOrderArgs {
    pub dish_id: i64,

    /// `YYYY-MM-DD HH:MM:SS`
    pub order_time: String,

    /// `YYYY-MM-DD HH:MM:SS`
    pub cook_time: String,
}

#[derive(Debug, Args)]
pub struct AddReviewArgs {
    pub order_id: i64,
    pub text: String,
}

pub fn execute_dish<W: Write>(
    conn: &Connection,
    args: AddDishArgs,
    json: bool,
    out: &mut W,
) -> CliResult {
    let dish = cafe_engine::add_dish(conn, &args.name)?;
    if json {
        return print_json(out, &dish);
    }
    writeln!(out, "Added dish: {} (ID: {})", dish.name, dish.id)?;
    Ok(())
}

pub fn execute_order<W: Write>(
    conn: &Connection,
    args: AddOrderArgs,
    json: bool,
    out: &mut W,
) -> CliResult {
    let order = cafe_engine::add_order(conn, args.dish_id, &args.order_time, &args.cook_time)?;
    if json {
        return print_json(out, &order);
    }
    writeln!(
        out,
        "Added order: ID {} (Dish ID: {}, Order Time: {}, Cook Time: {})",
        order.id, order.dish_id, order.order_time, order.cook_time
    )?;
    Ok(())
}

pub fn execute_review<W: Write>(
    conn: &Connection,
    args: AddReviewArgs,
    json: bool,
    out: &mut W,
) -> CliResult {
    let review = cafe_engine::add_review(conn, args.order_id, &args.text)?;
    if json {
        return print_json(out, &review);
    }
    writeln!(
        out,
        "Added review: ID {} (Order ID: {}): '{}'",
        review.id, review.order_id, review.text
    )?;
    Ok(())
}
