//! CLI command handlers. Each command is in its own file.

mod classify;
mod docs;
mod generate;
mod interactive;
mod quick;

pub use classify::run_classify;
pub use docs::{run_completions, run_man};
pub use generate::run_generate;
pub use interactive::run_interactive;
pub use quick::run_quick;
