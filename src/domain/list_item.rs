//! List Rows
//!
//! Entries of the single-column sortable list (`list_items` table).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Positioned};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: String,
    pub label: String,
    pub position: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ListItem {
    /// New row with no id; the backend assigns one on insert.
    pub fn new(label: impl Into<String>, position: i32) -> Self {
        Self {
            id: String::new(),
            label: label.into(),
            position,
            created_at: None,
        }
    }
}

impl Entity for ListItem {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Positioned for ListItem {
    fn position(&self) -> i32 {
        self.position
    }

    fn set_position(&mut self, position: i32) {
        self.position = position;
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
