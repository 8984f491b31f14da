//! CLI command handlers. Each command is in its own file.

mod completions;
mod inspect;
mod man;

pub use completions::run_completions;
pub use inspect::run_inspect;
pub use man::run_man;
