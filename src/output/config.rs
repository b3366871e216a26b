//! Output configuration types

/// Configuration for listing output.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print absolute paths instead of paths relative to the listed directory.
    pub absolute_paths: bool,
}
