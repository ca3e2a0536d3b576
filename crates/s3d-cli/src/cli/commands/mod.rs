//! CLI command handlers. Each command is in its own file.

mod batch;
mod completions;
mod detect;
mod explain;
mod output;

pub use batch::run_batch;
pub use completions::{run_completions, run_man};
pub use detect::run_detect;
pub use explain::run_explain;
