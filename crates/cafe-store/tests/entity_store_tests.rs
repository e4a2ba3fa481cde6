// Integration tests for CafeRepo: identifiers, validation and
// referential integrity of dishes, orders and reviews.

use cafe_core::errors::ExErrorKind;
use cafe_core::Timestamp;
use cafe_store::db::open_store_in_memory;
use cafe_store::CafeRepo;
use rusqlite::Connection;

fn setup() -> Connection {
    open_store_in_memory().unwrap()
}

#[test]
fn test_create_dish_empty_name_is_validation_error() {
    let conn = setup();

    let err = CafeRepo::create_dish(&conn, "").unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.code(), "ERR_INVALID_NAME");
    assert_eq!(err.op(), Some("create_dish"));
}

#[test]
fn test_create_dish_assigns_first_id() {
    let conn = setup();
    let dish = CafeRepo::create_dish(&conn, "Espresso").unwrap();
    assert_eq!(dish.id, 1);
    assert_eq!(
        CafeRepo::get_dish(&conn, 1).unwrap().map(|d| d.name),
        Some("Espresso".to_string())
    );
}

#[test]
fn test_create_order_missing_dish_is_not_found() {
    let conn = setup();

    let err = CafeRepo::create_order(&conn, 42, "2024-01-01 10:00:00", "2024-01-01 10:10:00")
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.entity_id(), Some("42"));
    assert_eq!(err.op(), Some("create_order"));
}

#[test]
fn test_create_order_references_given_dish() {
    let conn = setup();
    let dish = CafeRepo::create_dish(&conn, "Espresso").unwrap();

    let order =
        CafeRepo::create_order(&conn, dish.id, "2024-01-01 10:00:00", "2024-01-01 10:10:00")
            .unwrap();

    assert_eq!(order.id, 1);
    assert_eq!(order.dish_id, dish.id);
    assert_eq!(order.order_time.format(), "2024-01-01 10:00:00");

    let stored = CafeRepo::get_order(&conn, order.id).unwrap().unwrap();
    assert_eq!(stored, order);
}

#[test]
fn test_create_order_malformed_timestamps() {
    let conn = setup();
    let dish = CafeRepo::create_dish(&conn, "Espresso").unwrap();

    for (order_time, cook_time) in [
        ("2024-01-01T10:00:00", "2024-01-01 10:10:00"),
        ("2024-01-01 10:00:00", "10:10"),
        ("2024-1-1 10:00:00", "2024-01-01 10:10:00"),
    ] {
        let err = CafeRepo::create_order(&conn, dish.id, order_time, cook_time).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidTimestamp, "{}", order_time);
    }

    assert!(CafeRepo::get_order(&conn, 1).unwrap().is_none());
}

#[test]
fn test_create_order_stores_fixed_pattern_text() {
    let conn = setup();
    let dish = CafeRepo::create_dish(&conn, "Tea").unwrap();
    CafeRepo::create_order(&conn, dish.id, "2024-03-05 13:07:00", "2024-03-05 13:20:00").unwrap();

    let (order_time, cook_time): (String, String) = conn
        .query_row(
            "SELECT order_time, cook_time FROM Orders WHERE OrdersId = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(order_time, "2024-03-05 13:07:00");
    assert_eq!(cook_time, "2024-03-05 13:20:00");
}

#[test]
fn test_create_order_accepts_cook_before_order() {
    let conn = setup();
    let dish = CafeRepo::create_dish(&conn, "Tea").unwrap();
    let order =
        CafeRepo::create_order(&conn, dish.id, "2024-01-01 10:30:00", "2024-01-01 10:00:00")
            .unwrap();
    assert!(order.prep_duration() < chrono::Duration::zero());
}

#[test]
fn test_create_review_missing_order_is_not_found() {
    let conn = setup();

    let err = CafeRepo::create_review(&conn, 7, "Good").unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.entity_id(), Some("7"));
}

#[test]
fn test_multiple_reviews_per_order_accepted() {
    let conn = setup();
    let dish = CafeRepo::create_dish(&conn, "Tea").unwrap();
    let order =
        CafeRepo::create_order(&conn, dish.id, "2024-01-01 10:00:00", "2024-01-01 10:05:00")
            .unwrap();

    let first = CafeRepo::create_review(&conn, order.id, "Good").unwrap();
    let second = CafeRepo::create_review(&conn, order.id, "Poor").unwrap();
    assert!(second.id > first.id);

    let reviews = CafeRepo::reviews_for_order(&conn, order.id).unwrap();
    let texts: Vec<&str> = reviews.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["Good", "Poor"]);
    assert_eq!(CafeRepo::get_review(&conn, first.id).unwrap(), Some(first));
}

#[test]
fn test_foreign_keys_backstop_raw_inserts() {
    let conn = setup();
    let result = conn.execute(
        "INSERT INTO Orders (DishesId, cook_time, order_time) VALUES (5, ?1, ?1)",
        [Timestamp::now().format()],
    );
    assert!(result.is_err(), "FK pragma should reject orphan orders");
}
