//! Listing formatting and display
//!
//! - `config` - Output configuration types
//! - `list` - One entry per line, optionally coloured
//! - `json` - JSON output
//! - `status` - Status line with the current directory and hidden-file mode

mod config;
mod json;
mod list;
mod status;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{print_json, to_json};
pub use list::ListFormatter;
pub use status::{HIDE_HIDDEN_SYMBOL, PATH_SEP, SHOW_HIDDEN_SYMBOL, StatusFormat};
