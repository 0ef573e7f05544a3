//! Grid Rows
//!
//! Tiles of the flat image grid (`grid_items` table). Tiles are
//! identified across drags by their content key (`src`), not their id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Positioned};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridItem {
    pub id: String,
    pub src: String,
    pub position: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl GridItem {
    /// New row with no id; the backend assigns one on insert.
    pub fn new(src: impl Into<String>, position: i32) -> Self {
        Self {
            id: String::new(),
            src: src.into(),
            position,
            created_at: None,
        }
    }
}

impl Entity for GridItem {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Positioned for GridItem {
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
