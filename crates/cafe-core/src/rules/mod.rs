pub mod validation;

pub use validation::{parse_order_id, parse_order_times, validate_dish_name, validate_threshold};
