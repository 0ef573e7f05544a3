//! Board Rows
//!
//! The kanban board and its columns and cards (`boards`, `columns` and
//! `cards` tables). A card's `position` is local to its column; a
//! column's `position` is local to its board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Positioned};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub board_id: String,
    pub title: String,
    pub position: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Cards grouped in after fetch; never part of the persisted row.
    #[serde(skip)]
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(board_id: impl Into<String>, title: impl Into<String>, position: i32) -> Self {
        Self {
            id: String::new(),
            board_id: board_id.into(),
            title: title.into(),
            position,
            created_at: None,
            cards: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub column_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub position: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Card {
    pub fn new(column_id: impl Into<String>, title: impl Into<String>, position: i32) -> Self {
        Self {
            id: String::new(),
            column_id: column_id.into(),
            title: title.into(),
            description: None,
            position,
            created_at: None,
        }
    }
}

impl Entity for Board {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Entity for Column {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Positioned for Column {
    fn position(&self) -> i32 {
        self.position
    }

    fn set_position(&mut self, position: i32) {
        self.position = position;
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn container_key(&self) -> Option<&str> {
        Some(self.board_id.as_str())
    }

    fn set_container_key(&mut self, key: &str) {
        self.board_id = key.to_string();
    }
}

impl Entity for Card {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

impl Positioned for Card {
    fn position(&self) -> i32 {
        self.position
    }

    fn set_position(&mut self, position: i32) {
        self.position = position;
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn container_key(&self) -> Option<&str> {
        Some(self.column_id.as_str())
    }

    fn set_container_key(&mut self, key: &str) {
        self.column_id = key.to_string();
    }
}
