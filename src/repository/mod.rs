//! Repository Layer
//!
//! Persistence seam over the hosted backend's ordered tables, plus the
//! in-memory table used by tests and demos.

mod memory;
mod traits;

pub use memory::MemoryTable;
pub use traits::PositionedRepository;
