pub mod dish;
pub mod order;
pub mod order_detail;
pub mod review;

pub use dish::Dish;
pub use order::Order;
pub use order_detail::OrderDetail;
pub use review::Review;
