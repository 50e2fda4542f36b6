//! CPU scheduling domain models.
//!
//! Provides the data types shared by the engine, the metrics calculator and
//! the report layer.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessRow` | Raw (arrival, burst, priority) input triple |
//! | `Process` | Normalized process with simulation run-state |
//! | `Algorithm` | One of the six scheduling policies |
//! | `GanttEntry` / `Timeline` | Execution intervals per core |

mod algorithm;
mod process;
mod timeline;

pub use algorithm::Algorithm;
pub use process::{Pid, Process, ProcessRow, Tick};
pub use timeline::{GanttEntry, Timeline};
