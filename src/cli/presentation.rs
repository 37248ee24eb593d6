//! CLI presentation: text and json formatters per command.

mod check;
mod init;
mod shared;

pub use check::{format_check_json, format_check_text};
pub use init::{format_init_json, format_init_text};
pub use shared::{format_algorithms_text, format_failure};
