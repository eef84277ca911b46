//! CPU scheduling domain models.
//!
//! Provides the core data types for representing a single-CPU scheduling
//! problem and its solution.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Workload input plus computed timing outputs |
//! | `Timeline` | Ordered CPU slices of one run (Gantt data) |
//! | `Slice` | One contiguous dispatch of one process |

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{Slice, Timeline};
