//! The flattened order row: Order joined with its Dish name and
//! left-joined with its Review text.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// Placeholder printed when an order has no review
pub const NO_REVIEW: &str = "None";

/// One row of the order detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order_id: i64,
    pub dish_name: String,
    pub order_time: Timestamp,
    pub cook_time: Timestamp,
    /// `None` until a review references the order
    pub review: Option<String>,
}

impl OrderDetail {
    pub fn new(
        order_id: i64,
        dish_name: impl Into<String>,
        order_time: Timestamp,
        cook_time: Timestamp,
        review: Option<String>,
    ) -> Self {
        Self {
            order_id,
            dish_name: dish_name.into(),
            order_time,
            cook_time,
            review,
        }
    }

    /// `cook_time - order_time`, negative if the kitchen "finished" first
    pub fn prep_duration(&self) -> Duration {
        self.cook_time.signed_duration_since(self.order_time)
    }

    pub fn has_review(&self) -> bool {
        self.review.is_some()
    }
}

/// Single-line rendering used by list output
impl fmt::Display for OrderDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order ID: {}, Dish: {}, Order Time: {}, Cook Time: {}, Review: {}",
            self.order_id,
            self.dish_name,
            self.order_time,
            self.cook_time,
            self.review.as_deref().unwrap_or(NO_REVIEW)
        )
    }
}
