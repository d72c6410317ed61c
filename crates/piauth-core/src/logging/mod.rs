//! Logging abstractions
//!
//! The core has no global logger; callers inject one (or get `NoOpLogger`).

mod traits;
mod noop;
mod console;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
