//! CLI entry point for fbrowse

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use fbrowse::output::{HIDE_HIDDEN_SYMBOL, PATH_SEP, SHOW_HIDDEN_SYMBOL};
use fbrowse::tree::DEFAULT_UP_TEXT;
use fbrowse::{FileListing, ListFormatter, ListingPolicy, OutputConfig, StatusFormat, print_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fbrowse")]
#[command(about = "List a directory the way a file browser shows it")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show hidden files
    #[arg(short, long)]
    all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// List files only (directories are still searched)
    #[arg(short = 'f', long = "files-only")]
    files_only: bool,

    /// Do not show the parent directory entry
    #[arg(long = "hide-parent")]
    hide_parent: bool,

    /// Follow symbolic links
    #[arg(short = 'l', long = "follow-symlinks")]
    follow_symlinks: bool,

    /// Descend only N levels deep (0 = unlimited)
    #[arg(short = 'L', long = "level", default_value = "1")]
    level: usize,

    /// Sort by name only instead of listing directories first
    #[arg(long = "no-sort-by-type")]
    no_sort_by_type: bool,

    /// List shallower entries first
    #[arg(long = "sort-by-depth")]
    sort_by_depth: bool,

    /// Exclude files and directories matching a glob (can be used multiple times)
    #[arg(short = 'I', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Label of the parent directory entry
    #[arg(long = "up-text", default_value = DEFAULT_UP_TEXT)]
    up_text: String,

    /// Read the entries from standard input instead of the filesystem
    #[arg(long = "stdin")]
    stdin: bool,

    /// Print absolute paths
    #[arg(short = 'p', long = "print-paths")]
    print_paths: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Print a status line with the hidden-file mode and current directory first
    #[arg(long = "status")]
    status: bool,

    /// Status symbol when hidden files are shown
    #[arg(long = "show-hidden-symbol", default_value = SHOW_HIDDEN_SYMBOL)]
    show_hidden_symbol: String,

    /// Status symbol when hidden files are hidden
    #[arg(long = "hide-hidden-symbol", default_value = HIDE_HIDDEN_SYMBOL)]
    hide_hidden_symbol: String,

    /// Separator replacing '/' in the status line
    #[arg(long = "path-sep", default_value = PATH_SEP)]
    path_sep: String,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn policy(&self) -> ListingPolicy {
        ListingPolicy {
            show_hidden: self.all,
            only_dirs: self.dirs_only,
            only_files: self.files_only,
            hide_parent: self.hide_parent,
            follow_symlinks: self.follow_symlinks,
            sort_by_type: !self.no_sort_by_type,
            sort_by_depth: self.sort_by_depth,
            depth_limit: self.level,
            exclude_patterns: self.exclude.clone(),
            up_text: self.up_text.clone(),
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut listing = match FileListing::initialize(&args.path, args.policy()) {
        Ok(listing) => listing,
        Err(e) => {
            eprintln!("fbrowse: {}", e);
            process::exit(1);
        }
    };

    if args.stdin {
        let lines: Result<Vec<String>, _> = io::stdin().lock().lines().collect();
        match lines {
            Ok(lines) => listing.load_from_external_source(lines),
            Err(e) => {
                eprintln!("fbrowse: error reading standard input: {}", e);
                process::exit(1);
            }
        }
    }

    if args.status {
        let status = StatusFormat {
            show_hidden_symbol: args.show_hidden_symbol.clone(),
            hide_hidden_symbol: args.hide_hidden_symbol.clone(),
            path_sep: args.path_sep.clone(),
        };
        println!("{}", status.render(&listing));
    }

    let result = if args.json {
        print_json(&listing)
    } else {
        let formatter = ListFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
            absolute_paths: args.print_paths,
        });
        formatter.print(&listing)
    };

    if let Err(e) = result {
        eprintln!("fbrowse: error writing output: {}", e);
        process::exit(1);
    }
}
