//! Controller Layer
//!
//! One controller per drag-and-drop pattern. Each owns the in-memory
//! rows and a session token, accepts monitor payloads scoped to that
//! token, and translates completed drops into engine calls. Local state
//! mutates synchronously on every valid drop; the returned delta is
//! persisted afterward, fire-and-forget.

mod board;
mod grid;
mod list;

pub use board::{BoardController, BoardMove};
pub use grid::{GridController, DEFAULT_GRID_SOURCES};
pub use list::ListController;
