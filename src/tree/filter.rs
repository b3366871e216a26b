//! Exclude-pattern filtering for tree walking

use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone)]
enum ExcludePattern {
    Glob(Pattern),
    /// A pattern that failed to compile, compared verbatim.
    Literal(String),
}

/// Compiled set of shell-style exclude patterns, matched against basenames.
#[derive(Debug, Clone, Default)]
pub struct GlobFilter {
    patterns: Vec<ExcludePattern>,
}

impl GlobFilter {
    /// Compile `patterns`. Malformed patterns are kept as literals.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                match Pattern::new(p) {
                    Ok(glob) => ExcludePattern::Glob(glob),
                    Err(err) => {
                        log::debug!("Treating exclude pattern {:?} as literal: {}", p, err);
                        ExcludePattern::Literal(p.to_string())
                    }
                }
            })
            .collect();
        Self { patterns }
    }

    /// Check if a basename matches any pattern.
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| match pattern {
            ExcludePattern::Glob(glob) => glob.matches_with(name, MATCH_OPTIONS),
            ExcludePattern::Literal(literal) => literal == name,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
