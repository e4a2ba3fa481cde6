use serde::{Deserialize, Serialize};

/// Review - free-text feedback left against one order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Store-assigned identifier
    pub id: i64,

    /// The order being reviewed
    pub order_id: i64,

    /// Review content
    pub text: String,
}

impl Review {
    pub fn new(id: i64, order_id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            order_id,
            text: text.into(),
        }
    }
}
