//! CLI command handlers, one file per command.

mod inspect;
mod platforms;
mod search;
mod tokens;

pub use inspect::run_inspect;
pub use platforms::run_platforms;
pub use search::{run_search, SearchArgs};
pub use tokens::run_tokens;
