//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to the monitor.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{exit_code, map_error, EXIT_FAILURE};
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_algorithms_text, format_check_json, format_check_text, format_failure,
    format_init_json, format_init_text,
};
pub use route::{load_config, RunContext, RunOutput};
