use serde::{Deserialize, Serialize};

/// A dish from the menu demo resource, carrying its review comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Dish {
    pub(crate) id: i64,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) comments: Vec<DishComment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DishComment {
    pub(crate) rating: u8,
    pub(crate) comment: String,
    pub(crate) author: String,
    /// RFC 3339, stamped when the comment is submitted.
    pub(crate) date: String,
}

impl DishComment {
    pub(crate) fn new(rating: u8, author: &str, comment: &str) -> Self {
        Self {
            rating,
            comment: comment.to_string(),
            author: author.to_string(),
            date: chrono::Utc::now().to_rfc3339(),
        }
    }
}
