use serde::{Deserialize, Serialize};

/// Dish - a menu item available for ordering
///
/// Dishes are created once and never modified or deleted. The identifier
/// is assigned by the store and increases monotonically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name, never empty
    pub name: String,
}

impl Dish {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
