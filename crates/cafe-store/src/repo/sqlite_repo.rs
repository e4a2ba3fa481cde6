//! SQLite repository implementation
//!
//! Entities are plain records; this is the only code that knows how they
//! map onto the Dishes / Orders / Reviews tables. Every function takes the
//! connection explicitly, so the same calls work on a `Transaction`.

#![allow(clippy::result_large_err)]

use crate::errors::{domain, from_rusqlite, Result};
use cafe_core::errors::CafeError;
use cafe_core::model::{Dish, Order, Review};
use cafe_core::rules::{parse_order_times, validate_dish_name};
use cafe_core::Timestamp;
use rusqlite::{Connection, OptionalExtension};

/// SQLite repository for dishes, orders and reviews
pub struct CafeRepo;

impl CafeRepo {
    /// Insert a dish and return it with its assigned id
    ///
    /// # Errors
    ///
    /// - `InvalidName` if `name` is empty or whitespace
    /// - `Persistence` on SQLite failure
    pub fn create_dish(conn: &Connection, name: &str) -> Result<Dish> {
        validate_dish_name(name).map_err(|e| domain("create_dish", e))?;

        conn.execute("INSERT INTO Dishes (name) VALUES (?1)", [name])
            .map_err(from_rusqlite)?;
        let id = conn.last_insert_rowid();

        tracing::debug!(dish_id = id, "dish inserted");
        Ok(Dish::new(id, name))
    }

    /// Insert an order for an existing dish
    ///
    /// Timestamps are validated before the dish lookup, so a request that is
    /// wrong in both ways reports the malformed timestamp.
    ///
    /// # Errors
    ///
    /// - `InvalidTimestamp` if either time is not `YYYY-MM-DD HH:MM:SS`
    /// - `NotFound` if `dish_id` does not reference a dish
    /// - `Persistence` on SQLite failure
    pub fn create_order(
        conn: &Connection,
        dish_id: i64,
        order_time: &str,
        cook_time: &str,
    ) -> Result<Order> {
        let (order_ts, cook_ts) =
            parse_order_times(order_time, cook_time).map_err(|e| domain("create_order", e))?;

        if !Self::dish_exists(conn, dish_id)? {
            return Err(domain("create_order", CafeError::DishNotFound { dish_id }));
        }

        conn.execute(
            "INSERT INTO Orders (DishesId, cook_time, order_time) VALUES (?1, ?2, ?3)",
            rusqlite::params![dish_id, cook_ts.format(), order_ts.format()],
        )
        .map_err(from_rusqlite)?;
        let id = conn.last_insert_rowid();

        tracing::debug!(order_id = id, dish_id, "order inserted");
        Ok(Order::new(id, dish_id, order_ts, cook_ts))
    }

    /// Insert a review for an existing order
    ///
    /// Nothing prevents a second review for the same order; the view then
    /// yields one row per review.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `order_id` does not reference an order
    /// - `Persistence` on SQLite failure
    pub fn create_review(conn: &Connection, order_id: i64, text: &str) -> Result<Review> {
        if !Self::order_exists(conn, order_id)? {
            return Err(domain("create_review", CafeError::OrderNotFound { order_id }));
        }

        conn.execute(
            "INSERT INTO Reviews (OrdersId, review) VALUES (?1, ?2)",
            rusqlite::params![order_id, text],
        )
        .map_err(from_rusqlite)?;
        let id = conn.last_insert_rowid();

        tracing::debug!(review_id = id, order_id, "review inserted");
        Ok(Review::new(id, order_id, text))
    }

    /// Get a dish by id; `None` if absent
    ///
    /// # Errors
    ///
    /// `Persistence` on SQLite failure.
    pub fn get_dish(conn: &Connection, dish_id: i64) -> Result<Option<Dish>> {
        conn.query_row(
            "SELECT DishesId, name FROM Dishes WHERE DishesId = ?1",
            [dish_id],
            |row| Ok(Dish::new(row.get(0)?, row.get::<_, String>(1)?)),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get an order by id; `None` if absent
    ///
    /// # Errors
    ///
    /// `Persistence` on SQLite failure, or `InvalidTimestamp` if the stored row was written with a malformed time
    /// by something other than this repository.
    pub fn get_order(conn: &Connection, order_id: i64) -> Result<Option<Order>> {
        let raw = conn
            .query_row(
                "SELECT OrdersId, DishesId, order_time, cook_time FROM Orders WHERE OrdersId = ?1",
                [order_id],
                |row| {
                    Ok(RawOrder {
                        id: row.get(0)?,
                        dish_id: row.get(1)?,
                        order_time: row.get(2)?,
                        cook_time: row.get(3)?,
                    })
                },
            )
            .optional()
            .map_err(from_rusqlite)?;

        raw.map(RawOrder::into_order).transpose()
    }

    /// Get a review by id; `None` if absent
    ///
    /// # Errors
    ///
    /// `Persistence` on SQLite failure.
    pub fn get_review(conn: &Connection, review_id: i64) -> Result<Option<Review>> {
        conn.query_row(
            "SELECT ReviewsId, OrdersId, review FROM Reviews WHERE ReviewsId = ?1",
            [review_id],
            |row| Ok(Review::new(row.get(0)?, row.get(1)?, row.get::<_, String>(2)?)),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All dishes in id order
    ///
    /// # Errors
    ///
    /// `Persistence` on SQLite failure.
    pub fn list_dishes(conn: &Connection) -> Result<Vec<Dish>> {
        let mut stmt = conn
            .prepare("SELECT DishesId, name FROM Dishes ORDER BY DishesId")
            .map_err(from_rusqlite)?;
        let dishes = stmt
            .query_map([], |row| Ok(Dish::new(row.get(0)?, row.get::<_, String>(1)?)))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(dishes)
    }

    /// Reviews attached to one order, oldest first
    ///
    /// # Errors
    ///
    /// `Persistence` on SQLite failure.
    pub fn reviews_for_order(conn: &Connection, order_id: i64) -> Result<Vec<Review>> {
        let mut stmt = conn
            .prepare(
                "SELECT ReviewsId, OrdersId, review FROM Reviews
                 WHERE OrdersId = ?1 ORDER BY ReviewsId",
            )
            .map_err(from_rusqlite)?;
        let reviews = stmt
            .query_map([order_id], |row| {
                Ok(Review::new(row.get(0)?, row.get(1)?, row.get::<_, String>(2)?))
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(reviews)
    }

    /// # Errors
    ///
    /// `Persistence` on SQLite failure.
    pub fn dish_exists(conn: &Connection, dish_id: i64) -> Result<bool> {
        let found = conn
            .query_row(
                "SELECT 1 FROM Dishes WHERE DishesId = ?1",
                [dish_id],
                |_| Ok(()),
            )
            .optional()
            .map_err(from_rusqlite)?;
        Ok(found.is_some())
    }

    /// # Errors
    ///
    /// `Persistence` on SQLite failure.
    pub fn order_exists(conn: &Connection, order_id: i64) -> Result<bool> {
        let found = conn
            .query_row(
                "SELECT 1 FROM Orders WHERE OrdersId = ?1",
                [order_id],
                |_| Ok(()),
            )
            .optional()
            .map_err(from_rusqlite)?;
        Ok(found.is_some())
    }
}

/// Order row before its timestamps are parsed
struct RawOrder {
    id: i64,
    dish_id: i64,
    order_time: String,
    cook_time: String,
}

impl RawOrder {
    fn into_order(self) -> Result<Order> {
        let parse = |field: &str, text: &str| {
            Timestamp::parse(field, text)
                .map_err(|e| domain("get_order", e).with_entity_id(self.id.to_string()))
        };
        let order_time = parse("order_time", &self.order_time)?;
        let cook_time = parse("cook_time", &self.cook_time)?;
        Ok(Order::new(self.id, self.dish_id, order_time, cook_time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_store_in_memory;
    use cafe_core::errors::ExErrorKind;

    #[test]
    fn test_dish_ids_increase() {
        let conn = open_store_in_memory().unwrap();
        let a = CafeRepo::create_dish(&conn, "Espresso").unwrap();
        let b = CafeRepo::create_dish(&conn, "Latte").unwrap();
        assert_eq!(a.id, 1);
        assert!(b.id > a.id);
    }

    #[test]
    fn test_empty_dish_name_rejected_before_insert() {
        let conn = open_store_in_memory().unwrap();
        let err = CafeRepo::create_dish(&conn, "").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidName);
        assert!(CafeRepo::list_dishes(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_get_missing_entities_is_none() {
        let conn = open_store_in_memory().unwrap();
        assert!(CafeRepo::get_dish(&conn, 1).unwrap().is_none());
        assert!(CafeRepo::get_order(&conn, 1).unwrap().is_none());
        assert!(CafeRepo::get_review(&conn, 1).unwrap().is_none());
    }

    #[test]
    fn test_order_bad_timestamp_and_missing_dish_reports_timestamp() {
        let conn = open_store_in_memory().unwrap();
        let err = CafeRepo::create_order(&conn, 99, "now", "2024-01-01 10:00:00").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidTimestamp);
    }

    #[test]
    fn test_get_order_with_corrupt_timestamp() {
        let conn = open_store_in_memory().unwrap();
        let dish = CafeRepo::create_dish(&conn, "Tea").unwrap();
        conn.execute(
            "INSERT INTO Orders (DishesId, cook_time, order_time) VALUES (?1, 'soon', '2024-01-01 10:00:00')",
            [dish.id],
        )
        .unwrap();

        let err = CafeRepo::get_order(&conn, 1).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidTimestamp);
        assert_eq!(err.entity_id(), Some("1"));
    }
}
