use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// Order - one instance of a dish being ordered
///
/// `cook_time` is expected to be at or after `order_time`, but nothing
/// rejects an order where it is not; see [`Order::prep_duration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned identifier
    pub id: i64,

    /// The dish this order is for
    pub dish_id: i64,

    /// When the order was placed
    pub order_time: Timestamp,

    /// When the kitchen finished cooking
    pub cook_time: Timestamp,
}

impl Order {
    pub fn new(id: i64, dish_id: i64, order_time: Timestamp, cook_time: Timestamp) -> Self {
        Self {
            id,
            dish_id,
            order_time,
            cook_time,
        }
    }

    /// Time from placing the order to finishing it (may be negative)
    pub fn prep_duration(&self) -> Duration {
        self.cook_time.signed_duration_since(self.order_time)
    }
}
