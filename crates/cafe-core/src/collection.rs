//! Immutable, materialized result set of order detail rows.
//!
//! A collection is built once from a `Vec` and can then only be read:
//! iterated, indexed, measured. Query operations produce new collections
//! instead of reordering an existing one.

use std::ops::Index;

use serde::Serialize;

use crate::model::OrderDetail;

/// Read-only sequence of `OrderDetail` rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderDetailCollection {
    rows: Vec<OrderDetail>,
}

impl OrderDetailCollection {
    pub fn new(rows: Vec<OrderDetail>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<&OrderDetail> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderDetail> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[OrderDetail] {
        &self.rows
    }

    /// Order ids in collection order
    pub fn order_ids(&self) -> Vec<i64> {
        self.rows.iter().map(|d| d.order_id).collect()
    }

    pub fn into_vec(self) -> Vec<OrderDetail> {
        self.rows
    }
}

impl From<Vec<OrderDetail>> for OrderDetailCollection {
    fn from(rows: Vec<OrderDetail>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<OrderDetail> for OrderDetailCollection {
    fn from_iter<I: IntoIterator<Item = OrderDetail>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for OrderDetailCollection {
    type Output = OrderDetail;

    fn index(&self, index: usize) -> &OrderDetail {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a OrderDetailCollection {
    type Item = &'a OrderDetail;
    type IntoIter = std::slice::Iter<'a, OrderDetail>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for OrderDetailCollection {
    type Item = OrderDetail;
    type IntoIter = std::vec::IntoIter<OrderDetail>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::Timestamp;

    fn row(order_id: i64, dish: &str) -> OrderDetail {
        let t = Timestamp::parse("t", "2024-01-01 10:00:00").unwrap();
        OrderDetail::new(order_id, dish, t, t, None)
    }

    #[test]
    fn test_indexed_and_iterated_access() {
        let collection = OrderDetailCollection::new(vec![row(1, "Tea"), row(2, "Cake")]);

        assert_eq!(collection.len(), 2);
        assert_eq!(collection[1].dish_name, "Cake");
        assert_eq!(collection.get(0).map(|d| d.order_id), Some(1));
        assert!(collection.get(2).is_none());

        let names: Vec<&str> = collection.iter().map(|d| d.dish_name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Cake"]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let collection: OrderDetailCollection = vec![row(3, "A"), row(4, "B")].into();
        let first: Vec<i64> = (&collection).into_iter().map(|d| d.order_id).collect();
        let second = collection.order_ids();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_default() {
        let collection = OrderDetailCollection::default();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }

    #[test]
    fn test_serializes_as_array() {
        let collection = OrderDetailCollection::new(vec![row(1, "Tea")]);
        let json = serde_json::to_value(&collection).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["dish_name"], "Tea");
    }
}
