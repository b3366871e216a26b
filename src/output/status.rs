//! Status line describing the current directory and hidden-file mode

use std::path::MAIN_SEPARATOR;

use crate::fs::FileSystem;
use crate::listing::FileListing;

pub const SHOW_HIDDEN_SYMBOL: &str = "[+]";
pub const HIDE_HIDDEN_SYMBOL: &str = "[-]";
pub const PATH_SEP: &str = " / ";

/// Format of the status line, e.g. `[-] / home / user`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFormat {
    pub show_hidden_symbol: String,
    pub hide_hidden_symbol: String,
    /// Replaces every path separator of the current directory.
    pub path_sep: String,
}

impl StatusFormat {
    pub fn render<F: FileSystem>(&self, listing: &FileListing<F>) -> String {
        let symbol = if listing.policy().show_hidden {
            &self.show_hidden_symbol
        } else {
            &self.hide_hidden_symbol
        };
        let dir = listing.current_dir().to_string_lossy();
        let joined = dir.split(MAIN_SEPARATOR).collect::<Vec<_>>().join(&self.path_sep);
        format!("{}{}", symbol, joined)
    }
}

impl Default for StatusFormat {
    fn default() -> Self {
        Self {
            show_hidden_symbol: SHOW_HIDDEN_SYMBOL.to_string(),
            hide_hidden_symbol: HIDE_HIDDEN_SYMBOL.to_string(),
            path_sep: PATH_SEP.to_string(),
        }
    }
}
