//! Test-data generation: one dish, one order for it, one review of that order.
//!
//! The randomness lives in [`plan_full_order`]; [`insert_full_order`]
//! writes a plan inside a single transaction so a failure part-way through
//! leaves no dish without its order.

#![allow(clippy::result_large_err)]

use cafe_core::errors::{CafeError, ExError};
use cafe_core::model::{Dish, Order, Review};
use cafe_core::{log_op_end, log_op_error, log_op_start, Timestamp};
use cafe_store::errors::{domain, from_rusqlite, Result};
use cafe_store::CafeRepo;
use chrono::Duration;
use rand::Rng;
use rusqlite::Connection;
use serde::Serialize;

/// Review texts the generator picks from
pub const REVIEW_CHOICES: [&str; 4] = ["Excellent", "Good", "Satisfactory", "Poor"];

/// Dish names are `"{DISH_NAME_PREFIX} N"` with N in this range
pub const DISH_NUMBER_RANGE: std::ops::RangeInclusive<u32> = 1..=100;
/// How long ago the order was placed
pub const ORDER_AGE_MINUTES: std::ops::RangeInclusive<i64> = 0..=60;
/// How long the kitchen took
pub const COOK_MINUTES: std::ops::RangeInclusive<i64> = 5..=30;

pub const DISH_NAME_PREFIX: &str = "Test dish";

/// Values for one generated dish/order/review chain, not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullOrderPlan {
    pub dish_name: String,
    pub order_time: String,
    pub cook_time: String,
    pub review: String,
}

/// The three entities created by one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullOrder {
    pub dish: Dish,
    pub order: Order,
    pub review: Review,
}

/// Draw the values for a full order relative to `now`
///
/// # Errors
///
/// `Internal` if `now` is so close to the calendar limits that the
/// offsets overflow.
pub fn plan_full_order<R: Rng + ?Sized>(
    rng: &mut R,
    now: Timestamp,
) -> cafe_core::Result<FullOrderPlan> {
    let dish_number = rng.gen_range(DISH_NUMBER_RANGE);
    let age = Duration::minutes(rng.gen_range(ORDER_AGE_MINUTES));
    let cook = Duration::minutes(rng.gen_range(COOK_MINUTES));
    let review = REVIEW_CHOICES[rng.gen_range(0..REVIEW_CHOICES.len())];

    let overflow = || CafeError::Internal {
        message: format!("timestamp arithmetic overflow from {}", now),
    };
    let order_time = now.checked_sub(age).ok_or_else(overflow)?;
    let cook_time = order_time.checked_add(cook).ok_or_else(overflow)?;

    Ok(FullOrderPlan {
        dish_name: format!("{} {}", DISH_NAME_PREFIX, dish_number),
        order_time: order_time.format(),
        cook_time: cook_time.format(),
        review: review.to_string(),
    })
}

/// Persist a plan as dish, then order, then review, all or nothing
///
/// ## Errors
///
/// Any error from the three inserts; the transaction is rolled back so no
/// partial chain remains.
pub fn insert_full_order(conn: &mut Connection, plan: &FullOrderPlan) -> Result<FullOrder> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    let dish = CafeRepo::create_dish(&tx, &plan.dish_name)?;
    let order = CafeRepo::create_order(&tx, dish.id, &plan.order_time, &plan.cook_time)?;
    let review = CafeRepo::create_review(&tx, order.id, &plan.review)?;

    tx.commit().map_err(from_rusqlite)?;

    Ok(FullOrder {
        dish,
        order,
        review,
    })
}

/// Generate and persist one random dish/order/review chain
///
/// ## Errors
///
/// - `Internal`: timestamp arithmetic overflowed
/// - `Persistence`: Database error (nothing is written)
pub fn generate_full_order<R: Rng + ?Sized>(
    conn: &mut Connection,
    rng: &mut R,
) -> Result<FullOrder> {
    log_op_start!("generate_full_order");
    let start = std::time::Instant::now();

    let result = plan_full_order(rng, Timestamp::now())
        .map_err(|e| domain("generate_full_order", e))
        .and_then(|plan| insert_full_order(conn, &plan));

    let full = result.map_err(|e: ExError| {
        log_op_error!(
            "generate_full_order",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "generate_full_order",
        duration_ms = start.elapsed().as_millis() as u64,
        dish_id = full.dish.id,
        order_id = full.order.id,
        review_id = full.review.id
    );

    Ok(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn noon() -> Timestamp {
        Timestamp::parse("now", "2024-06-01 12:00:00").unwrap()
    }

    #[test]
    fn test_plan_stays_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let plan = plan_full_order(&mut rng, noon()).unwrap();

            let number: u32 = plan
                .dish_name
                .strip_prefix("Test dish ")
                .unwrap()
                .parse()
                .unwrap();
            assert!(DISH_NUMBER_RANGE.contains(&number));

            let order = Timestamp::parse("order_time", &plan.order_time).unwrap();
            let cook = Timestamp::parse("cook_time", &plan.cook_time).unwrap();
            let age = noon().signed_duration_since(order).num_minutes();
            let took = cook.signed_duration_since(order).num_minutes();
            assert!(ORDER_AGE_MINUTES.contains(&age));
            assert!(COOK_MINUTES.contains(&took));

            assert!(REVIEW_CHOICES.contains(&plan.review.as_str()));
        }
    }

    #[test]
    fn test_plan_is_deterministic_for_seed() {
        let a = plan_full_order(&mut StdRng::seed_from_u64(42), noon()).unwrap();
        let b = plan_full_order(&mut StdRng::seed_from_u64(42), noon()).unwrap();
        assert_eq!(a, b);
    }
}
