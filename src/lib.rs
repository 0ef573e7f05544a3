//! Dropboard Core
//!
//! Layered architecture:
//! - domain: rows shared with the persistence service
//! - engine: pure reorder/move computations
//! - dnd: drag payloads and the monitor accept predicate
//! - repository: persistence seam and in-memory backend
//! - controller: per-pattern wiring from drop events to engine and store

pub mod controller;
pub mod dnd;
pub mod domain;
pub mod engine;
pub mod repository;

pub use reorder::{Axis, Edge};
