//! Command implementations for the armory CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod build;
mod import;
mod list;

pub use build::Build;
pub use import::Import;
pub use list::List;
