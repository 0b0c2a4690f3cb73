//! Engine module: CLI surface, path tools, progress events

pub mod arg_parser;
pub mod cli;
pub mod progress;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::handle_run;
pub use progress::{CrawlEvent, print_event, render_event};
pub use tools::{
    folder_name, has_extension, is_os_hidden_file, path_relative_to, path_to_cell,
    split_session_day,
};
