//! Interactive numbered menu
//!
//! Reads one choice per line until `0` or end of input. A failed choice is
//! reported and the loop carries on; only I/O on the menu's own input and
//! output ends it early. Input and output are injected so the loop runs
//! unchanged against stdin/stdout or buffers.

use std::io::{BufRead, Write};

use cafe_core::rules::parse_order_id;
use cafe_core::{CafeConfig, CafeError, ExError};
use rusqlite::Connection;

use super::generate::print_full_order;
use super::output::print_details;
use super::CliResult;

const MENU: &str = "\
Enter a number from 0 to 5:
0 - Exit
1 - Show one order
2 - All orders sorted by dish name
3 - All orders sorted by order id
4 - Fast orders
5 - Insert test data";

pub fn execute<R: BufRead, W: Write>(
    conn: &mut Connection,
    config: &CafeConfig,
    mut input: R,
    out: &mut W,
) -> CliResult {
    let mut rng = rand::thread_rng();

    loop {
        writeln!(out, "\n{}", MENU)?;
        let Some(choice) = read_line(&mut input)? else {
            break;
        };

        match choice.as_str() {
            "0" => {
                writeln!(out, "\nStopped")?;
                break;
            }
            "1" => {
                writeln!(out, "\nOrder id:")?;
                let Some(raw) = read_line(&mut input)? else {
                    break;
                };
                let order_id = match parse_order_id(&raw) {
                    Ok(id) => id,
                    Err(CafeError::InvalidOrderId { .. }) => {
                        writeln!(out, "Error: order id must be an integer")?;
                        continue;
                    }
                    Err(e) => {
                        writeln!(out, "Error: {}", e)?;
                        continue;
                    }
                };
                if let Some(rows) = reported(out, cafe_engine::by_order_id(conn, order_id))? {
                    print_details(out, &rows, false)?;
                }
            }
            "2" => {
                writeln!(out, "\nAll orders sorted by dish name:")?;
                if let Some(rows) = reported(out, cafe_engine::sorted_by_dish_name(conn))? {
                    print_details(out, &rows, false)?;
                }
            }
            "3" => {
                writeln!(out, "\nAll orders sorted by order id:")?;
                if let Some(rows) = reported(out, cafe_engine::sorted_by_order_id(conn))? {
                    print_details(out, &rows, false)?;
                }
            }
            "4" => {
                let minutes = config.fast_threshold_minutes;
                writeln!(out, "\nOrders cooked in under {} minutes:", minutes)?;
                if let Some(rows) = reported(out, cafe_engine::fast_orders(conn, Some(minutes)))? {
                    print_details(out, &rows, false)?;
                }
            }
            "5" => {
                let generated = cafe_engine::generate_full_order(conn, &mut rng);
                if let Some(full) = reported(out, generated)? {
                    writeln!(out)?;
                    print_full_order(out, &full)?;
                }
            }
            other => {
                writeln!(out, "Unknown choice '{}'", other)?;
            }
        }
    }

    Ok(())
}

/// Print a failed operation and hand back `None`; only output errors escape
fn reported<W: Write, T>(out: &mut W, result: Result<T, ExError>) -> std::io::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            Ok(None)
        }
    }
}

/// Next trimmed line, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
