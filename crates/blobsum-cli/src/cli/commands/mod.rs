//! CLI command handlers. Each command is in its own file.

mod completions;
mod digest;
mod headers;
mod scan;
mod verify;

pub use completions::{run_completions, run_manpage};
pub use digest::run_digest;
pub use headers::run_headers;
pub use verify::run_verify;
