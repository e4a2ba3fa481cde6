// Integration tests for the order detail projection

use cafe_store::db::open_store_in_memory;
use cafe_store::view::list_all;
use cafe_store::CafeRepo;

#[test]
fn test_view_flattens_dish_order_review() {
    let conn = open_store_in_memory().unwrap();
    let espresso = CafeRepo::create_dish(&conn, "Espresso").unwrap();
    let cake = CafeRepo::create_dish(&conn, "Cake").unwrap();

    let o1 = CafeRepo::create_order(&conn, espresso.id, "2024-01-01 10:00:00", "2024-01-01 10:10:00")
        .unwrap();
    let o2 = CafeRepo::create_order(&conn, cake.id, "2024-01-01 11:00:00", "2024-01-01 11:20:00")
        .unwrap();
    CafeRepo::create_review(&conn, o2.id, "Good").unwrap();

    let rows = list_all(&conn).unwrap();

    assert_eq!(rows.order_ids(), vec![o1.id, o2.id]);
    assert_eq!(rows[0].dish_name, "Espresso");
    assert_eq!(rows[0].review, None);
    assert_eq!(rows[1].dish_name, "Cake");
    assert_eq!(rows[1].review.as_deref(), Some("Good"));
    assert_eq!(rows[1].order_time.format(), "2024-01-01 11:00:00");
    assert_eq!(rows[1].cook_time.format(), "2024-01-01 11:20:00");
}

#[test]
fn test_view_yields_row_per_review() {
    let conn = open_store_in_memory().unwrap();
    let dish = CafeRepo::create_dish(&conn, "Tea").unwrap();
    let order = CafeRepo::create_order(&conn, dish.id, "2024-01-01 10:00:00", "2024-01-01 10:05:00")
        .unwrap();
    CafeRepo::create_review(&conn, order.id, "Excellent").unwrap();
    CafeRepo::create_review(&conn, order.id, "Poor").unwrap();

    let rows = list_all(&conn).unwrap();
    let reviews: Vec<Option<&str>> = rows.iter().map(|r| r.review.as_deref()).collect();
    assert_eq!(reviews, vec![Some("Excellent"), Some("Poor")]);
}

#[test]
fn test_view_reflects_new_writes_immediately() {
    let conn = open_store_in_memory().unwrap();
    let dish = CafeRepo::create_dish(&conn, "Tea").unwrap();
    let order = CafeRepo::create_order(&conn, dish.id, "2024-01-01 10:00:00", "2024-01-01 10:05:00")
        .unwrap();
    assert_eq!(list_all(&conn).unwrap()[0].review, None);

    CafeRepo::create_review(&conn, order.id, "Good").unwrap();
    assert_eq!(list_all(&conn).unwrap()[0].review.as_deref(), Some("Good"));
}

#[test]
fn test_view_rejects_corrupt_stored_timestamp() {
    let conn = open_store_in_memory().unwrap();
    let dish = CafeRepo::create_dish(&conn, "Tea").unwrap();
    conn.execute(
        "INSERT INTO Orders (DishesId, cook_time, order_time) VALUES (?1, '2024-01-01 10:05', '2024-01-01 10:00:00')",
        [dish.id],
    )
    .unwrap();

    let err = list_all(&conn).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.entity_id(), Some("1"));
}
