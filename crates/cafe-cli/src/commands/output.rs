//! Rendering of command results

use std::io::Write;

use cafe_core::OrderDetailCollection;
use serde::Serialize;

use super::CliResult;

/// One line per row, or a JSON array
pub fn print_details<W: Write>(out: &mut W, rows: &OrderDetailCollection, json: bool) -> CliResult {
    if json {
        return print_json(out, rows);
    }
    for row in rows {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

pub fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
